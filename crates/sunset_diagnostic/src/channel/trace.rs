use tracing::{info, warn};

use super::NoticeChannel;
use crate::{Escalation, Notice, Severity};

/// Forwards notices to `tracing` under the `deprecation` target.
///
/// `FutureChange` notices are logged at INFO, everything else at WARN.
/// Filtering is left to the installed subscriber, e.g.
/// `RUST_LOG=deprecation=off` silences all notices.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingChannel;

impl NoticeChannel for TracingChannel {
    fn emit(&self, notice: Notice) -> Result<(), Escalation> {
        let since = notice.since().unwrap_or("");
        let caller = notice
            .call_site()
            .map(|site| site.to_string())
            .unwrap_or_default();
        match notice.severity() {
            Severity::FutureChange => info!(
                target: "deprecation",
                severity = %notice.severity(),
                since,
                caller = %caller,
                "{}",
                notice.message()
            ),
            Severity::Deprecation | Severity::PendingRemoval => warn!(
                target: "deprecation",
                severity = %notice.severity(),
                since,
                caller = %caller,
                "{}",
                notice.message()
            ),
        }
        Ok(())
    }
}
