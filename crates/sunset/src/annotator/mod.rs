//! Building deprecation wrappers around callables.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

use sunset_diagnostic::{
    channel, CallSite, Escalation, InvalidSeverity, Notice, NoticeTemplate, Severity,
};

use crate::__private::notify;
use crate::{Invoke, InvokeMut};

/// Produces [`Deprecated`] wrappers that share one notice template.
///
/// # Example
///
/// ```text
/// let annotator = Annotator::new("use new_api() instead").since("0.4");
/// let old_api = annotator.wrap(|x: i32, y: i32| x + y);
/// assert_eq!(old_api.call((1, 2)), 3); // logs one deprecation notice
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Annotator {
    template: NoticeTemplate,
}

impl Annotator {
    /// Create an annotator with `Severity::Deprecation` and no `since` tag.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Annotator {
            template: NoticeTemplate::new(message),
        }
    }

    /// Create an annotator from textual metadata.
    ///
    /// Fails with [`InvalidSeverity`] when `severity` names no known
    /// classification, before anything can be wrapped.
    pub fn parse(
        message: impl Into<Cow<'static, str>>,
        severity: &str,
        since: Option<&str>,
    ) -> Result<Self, InvalidSeverity> {
        let severity: Severity = severity.parse()?;
        let mut template = NoticeTemplate::new(message).with_severity(severity);
        if let Some(since) = since {
            template = template.with_since(since.to_owned());
        }
        Ok(Annotator { template })
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.template = self.template.with_severity(severity);
        self
    }

    /// Attach an opaque version or date tag.
    #[must_use]
    pub fn since(mut self, since: impl Into<Cow<'static, str>>) -> Self {
        self.template = self.template.with_since(since);
        self
    }

    pub fn template(&self) -> &NoticeTemplate {
        &self.template
    }

    /// Wrap `target`. Nothing is emitted until the wrapper is called.
    ///
    /// `target` must be callable with some tuple of arguments; anything
    /// else is rejected here, at compile time:
    ///
    /// ```compile_fail,E0277
    /// let not_callable = sunset::Annotator::new("old").wrap(5_u8);
    /// ```
    pub fn wrap<F, Args>(&self, target: F) -> Deprecated<F>
    where
        F: InvokeMut<Args>,
    {
        Deprecated {
            target,
            template: self.template.clone(),
        }
    }
}

impl From<NoticeTemplate> for Annotator {
    fn from(template: NoticeTemplate) -> Self {
        Annotator { template }
    }
}

/// Shorthand for `Annotator::new(message).wrap(target)`.
pub fn deprecate<F, Args>(message: impl Into<Cow<'static, str>>, target: F) -> Deprecated<F>
where
    F: InvokeMut<Args>,
{
    Annotator::new(message).wrap(target)
}

/// A callable that emits a deprecation notice before every call.
///
/// Arguments are forwarded unmodified and the target's return value,
/// `Err` included, comes back untouched. A panic in the target unwinds
/// through the wrapper as is.
#[derive(Clone)]
pub struct Deprecated<F> {
    target: F,
    template: NoticeTemplate,
}

impl<F> Deprecated<F> {
    pub fn target(&self) -> &F {
        &self.target
    }

    pub fn template(&self) -> &NoticeTemplate {
        &self.template
    }

    /// Unwrap the target, dropping the deprecation.
    pub fn into_inner(self) -> F {
        self.target
    }

    /// Emit a notice attributed to the caller, then call the target.
    ///
    /// Panics at the caller's location, without running the target, if
    /// the active channel escalates the notice.
    #[track_caller]
    pub fn call<Args>(&self, args: Args) -> <F as Invoke<Args>>::Output
    where
        F: Invoke<Args>,
    {
        notify(&self.template);
        self.target.invoke(args)
    }

    /// Like [`call`](Self::call) for targets that need `&mut`.
    #[track_caller]
    pub fn call_mut<Args>(&mut self, args: Args) -> <F as InvokeMut<Args>>::Output
    where
        F: InvokeMut<Args>,
    {
        notify(&self.template);
        self.target.invoke_mut(args)
    }

    /// Like [`call`](Self::call), returning an escalation instead of
    /// panicking on it.
    #[track_caller]
    pub fn try_call<Args>(&self, args: Args) -> Result<<F as Invoke<Args>>::Output, Escalation>
    where
        F: Invoke<Args>,
    {
        channel::emit(self.notice_for(Location::caller()))?;
        Ok(self.target.invoke(args))
    }

    #[track_caller]
    pub fn try_call_mut<Args>(
        &mut self,
        args: Args,
    ) -> Result<<F as InvokeMut<Args>>::Output, Escalation>
    where
        F: InvokeMut<Args>,
    {
        channel::emit(self.notice_for(Location::caller()))?;
        Ok(self.target.invoke_mut(args))
    }

    fn notice_for(&self, location: &'static Location<'static>) -> Notice {
        self.template.instantiate(Some(CallSite::from(location)))
    }
}

impl<F> fmt::Debug for Deprecated<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deprecated")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}
