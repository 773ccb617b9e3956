//! Wrap-and-warn deprecation.
//!
//! Marking a callable as deprecated keeps it working but makes every call
//! emit a [`Notice`] through the diagnostic [`channel`] first. The notice
//! carries the location of the code that made the call, so the warning
//! points at the line a caller has to change.
//!
//! Two ways in:
//!
//! ```text
//! // Annotation syntax
//! #[sunset::deprecated_fn("use new_api() instead", since = "0.4")]
//! pub fn old_api(x: i32, y: i32) -> i32 { x + y }
//!
//! // Functional composition
//! let old_api = Annotator::new("use new_api() instead").wrap(|x: i32, y: i32| x + y);
//! assert_eq!(old_api.call((1, 2)), 3);
//! ```
//!
//! Notices go to `tracing` under the `deprecation` target unless another
//! channel is installed. See [`init_tracing`] for a ready-made subscriber.
//!
//! # Rejected targets
//!
//! Mistakes surface when the code is compiled, not when it runs.
//!
//! Only functions can be annotated:
//!
//! ```compile_fail
//! #[sunset::deprecated_fn("use `Config` instead")]
//! pub struct Settings;
//! ```
//!
//! Severities outside the known set are refused:
//!
//! ```compile_fail
//! #[sunset::deprecated_fn("old", severity = "user-warning")]
//! pub fn old_api() {}
//! ```
//!
//! And only callables can be wrapped:
//!
//! ```compile_fail,E0277
//! let wrapped = sunset::deprecate("old", "not a function");
//! ```

mod annotator;
mod invoke;
mod logging;

pub use annotator::{deprecate, Annotator, Deprecated};
pub use invoke::{Invoke, InvokeMut};
pub use logging::init_tracing;
pub use sunset_diagnostic::channel;
pub use sunset_diagnostic::{
    CallSite, Escalate, Escalation, InvalidSeverity, Notice, NoticeChannel, NoticeQueue,
    NoticeTemplate, Severity, TracingChannel,
};
pub use sunset_macros::deprecated_fn;

/// Support code for `#[deprecated_fn]` expansions. Not public API.
#[doc(hidden)]
pub mod __private {
    use std::panic::Location;

    pub use sunset_diagnostic::{NoticeTemplate, Severity};

    use sunset_diagnostic::{channel, CallSite};

    /// Emit one notice for the caller of the enclosing `#[track_caller]`
    /// function, panicking there if the channel escalates it.
    #[track_caller]
    pub fn notify(template: &NoticeTemplate) {
        let site = CallSite::from(Location::caller());
        if let Err(escalation) = channel::emit(template.instantiate(Some(site))) {
            panic!("{escalation}");
        }
    }
}
