//! The diagnostic channel notices are emitted through.
//!
//! Resolution order for every emission:
//! 1. the channel scoped to the current thread by [`with_channel`]
//! 2. the process-wide channel set by [`install`]
//! 3. a [`TracingChannel`]
//!
//! The channel owns every policy decision (display, filtering,
//! escalation). Emitting code only forwards the notice and propagates an
//! [`Escalation`] if the channel returns one.

mod escalate;
mod queue;
mod trace;

pub use escalate::Escalate;
pub use queue::NoticeQueue;
pub use trace::TracingChannel;

use std::cell::RefCell;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Escalation, Notice};

/// A sink for deprecation notices.
pub trait NoticeChannel: Send + Sync {
    /// Accept one notice.
    ///
    /// Returning `Err` escalates the notice into a failure at the call
    /// site; the deprecated target is then not invoked.
    fn emit(&self, notice: Notice) -> Result<(), Escalation>;
}

impl<C: NoticeChannel + ?Sized> NoticeChannel for Arc<C> {
    fn emit(&self, notice: Notice) -> Result<(), Escalation> {
        (**self).emit(notice)
    }
}

impl<C: NoticeChannel + ?Sized> NoticeChannel for &C {
    fn emit(&self, notice: Notice) -> Result<(), Escalation> {
        (**self).emit(notice)
    }
}

type SharedChannel = Arc<dyn NoticeChannel>;

static GLOBAL: RwLock<Option<SharedChannel>> = parking_lot::const_rwlock(None);

thread_local! {
    static SCOPED: RefCell<Option<SharedChannel>> = const { RefCell::new(None) };
}

/// Set the process-wide channel, returning the previous one.
pub fn install(channel: SharedChannel) -> Option<SharedChannel> {
    GLOBAL.write().replace(channel)
}

/// Remove the process-wide channel, falling back to [`TracingChannel`].
pub fn uninstall() -> Option<SharedChannel> {
    GLOBAL.write().take()
}

/// Run `f` with `channel` receiving every notice emitted on this thread.
///
/// Scopes nest; the previous scoped channel is restored when `f` returns
/// or unwinds.
pub fn with_channel<R>(channel: SharedChannel, f: impl FnOnce() -> R) -> R {
    let previous = SCOPED.with(|slot| slot.borrow_mut().replace(channel));
    let _restore = ScopeGuard { previous };
    f()
}

struct ScopeGuard {
    previous: Option<SharedChannel>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        // The thread-local may already be torn down during thread exit.
        let _ = SCOPED.try_with(|slot| *slot.borrow_mut() = previous);
    }
}

/// The channel an emission on this thread would currently reach.
fn current() -> Option<SharedChannel> {
    SCOPED
        .try_with(|slot| slot.borrow().clone())
        .ok()
        .flatten()
        .or_else(|| GLOBAL.read().clone())
}

/// Hand `notice` to the active channel.
///
/// No lock is held while the channel runs, so channels may emit
/// notices themselves.
pub fn emit(notice: Notice) -> Result<(), Escalation> {
    match current() {
        Some(channel) => channel.emit(notice),
        None => TracingChannel.emit(notice),
    }
}
