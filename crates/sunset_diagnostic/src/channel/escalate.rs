use super::{NoticeChannel, TracingChannel};
use crate::{Escalation, Notice, Severity};

/// Turns notices into hard failures.
///
/// Notices whose severity is selected are returned as [`Escalation`];
/// the rest are forwarded to the inner channel untouched.
#[derive(Clone, Debug)]
pub struct Escalate<C = TracingChannel> {
    inner: C,
    severities: Vec<Severity>,
}

impl Escalate<TracingChannel> {
    /// Escalate every notice.
    pub fn all() -> Self {
        Escalate {
            inner: TracingChannel,
            severities: Severity::ALL.to_vec(),
        }
    }

    /// Escalate only notices of `severity`, logging the rest.
    pub fn only(severity: Severity) -> Self {
        Escalate {
            inner: TracingChannel,
            severities: vec![severity],
        }
    }
}

impl<C: NoticeChannel> Escalate<C> {
    /// Escalate the given severities, forwarding others to `inner`.
    pub fn wrapping(inner: C, severities: impl IntoIterator<Item = Severity>) -> Self {
        Escalate {
            inner,
            severities: severities.into_iter().collect(),
        }
    }

    pub fn escalates(&self, severity: Severity) -> bool {
        self.severities.contains(&severity)
    }
}

impl<C: NoticeChannel> NoticeChannel for Escalate<C> {
    fn emit(&self, notice: Notice) -> Result<(), Escalation> {
        if self.escalates(notice.severity()) {
            Err(Escalation::new(notice))
        } else {
            self.inner.emit(notice)
        }
    }
}
