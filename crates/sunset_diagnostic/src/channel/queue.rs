use parking_lot::Mutex;

use super::NoticeChannel;
use crate::{Escalation, Notice, Severity};

/// Collects every notice it receives, in emission order.
///
/// Meant for test harnesses: install it with
/// [`with_channel`](super::with_channel) and inspect it afterwards.
///
/// ```text
/// let queue = Arc::new(NoticeQueue::new());
/// channel::with_channel(queue.clone(), || deprecated.call(()));
/// assert_eq!(queue.flush().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notices.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.lock().is_empty()
    }

    /// Number of collected notices with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.notices
            .lock()
            .iter()
            .filter(|n| n.severity() == severity)
            .count()
    }

    /// Snapshot of the collected notices without clearing the queue.
    pub fn peek(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    /// Take all collected notices, leaving the queue empty.
    pub fn flush(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock())
    }
}

impl NoticeChannel for NoticeQueue {
    fn emit(&self, notice: Notice) -> Result<(), Escalation> {
        self.notices.lock().push(notice);
        Ok(())
    }
}
