//! The notice value and the template it is stamped from.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

use crate::Severity;

/// Where a deprecated symbol was called from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        CallSite { file, line, column }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    /// 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column number.
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        CallSite::new(location.file(), location.line(), location.column())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// The fixed message, severity and `since` tag of one deprecated symbol.
///
/// Templates never change after construction. Every invocation of the
/// deprecated symbol stamps a fresh [`Notice`] out of the same template.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NoticeTemplate {
    message: Cow<'static, str>,
    severity: Severity,
    since: Option<Cow<'static, str>>,
}

impl NoticeTemplate {
    /// Create a template with the default severity and no `since` tag.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        NoticeTemplate {
            message: message.into(),
            severity: Severity::default(),
            since: None,
        }
    }

    /// Build a template from string literals in a `const` context.
    ///
    /// Used by `#[deprecated_fn]` expansions so that no allocation
    /// happens on the call path.
    pub const fn from_static(
        message: &'static str,
        severity: Severity,
        since: Option<&'static str>,
    ) -> Self {
        NoticeTemplate {
            message: Cow::Borrowed(message),
            severity,
            since: match since {
                Some(since) => Some(Cow::Borrowed(since)),
                None => None,
            },
        }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_since(mut self, since: impl Into<Cow<'static, str>>) -> Self {
        self.since = Some(since.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn since(&self) -> Option<&str> {
        self.since.as_deref()
    }

    /// Stamp out the notice for one invocation.
    pub fn instantiate(&self, call_site: Option<CallSite>) -> Notice {
        Notice {
            message: self.message.clone(),
            severity: self.severity,
            since: self.since.clone(),
            call_site,
        }
    }
}

/// One deprecation event.
///
/// Immutable once built. Created per call and handed to the channel,
/// which decides whether it is displayed, collected or escalated.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Notice {
    message: Cow<'static, str>,
    severity: Severity,
    since: Option<Cow<'static, str>>,
    call_site: Option<CallSite>,
}

impl Notice {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Opaque version or date tag, if the template carried one.
    pub fn since(&self) -> Option<&str> {
        self.since.as_deref()
    }

    /// The caller of the deprecated symbol, when it could be attributed.
    pub fn call_site(&self) -> Option<CallSite> {
        self.call_site
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(since) = &self.since {
            write!(f, " (since {since})")?;
        }
        if let Some(site) = &self.call_site {
            write!(f, "\n  --> {site}")?;
        }
        Ok(())
    }
}
