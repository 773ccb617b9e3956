//! Deprecation notices and the channel they travel through.
//!
//! A [`Notice`] describes one call to a deprecated symbol: the fixed
//! message, its [`Severity`], an optional `since` tag, and the
//! [`CallSite`] of the code that made the call. Notices are built from a
//! [`NoticeTemplate`] each time the deprecated symbol is invoked and are
//! handed by value to the active [`NoticeChannel`].
//!
//! What happens next is the channel's business:
//! - [`TracingChannel`]: forwards to `tracing` (the default)
//! - [`NoticeQueue`]: collects notices for inspection in tests
//! - [`Escalate`]: turns selected notices into [`Escalation`] failures
//!
//! ```text
//! let queue = Arc::new(NoticeQueue::new());
//! channel::with_channel(queue.clone(), || old_api.call((1, 2)));
//! assert_eq!(queue.len(), 1);
//! ```

pub mod channel;
mod errors;
mod notice;
mod severity;

pub use channel::{Escalate, NoticeChannel, NoticeQueue, TracingChannel};
pub use errors::{Escalation, InvalidSeverity};
pub use notice::{CallSite, Notice, NoticeTemplate};
pub use severity::Severity;
