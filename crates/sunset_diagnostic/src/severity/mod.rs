//! Classification of deprecation notices.

use std::fmt;
use std::str::FromStr;

use crate::InvalidSeverity;

/// How far along the retirement path a deprecated symbol is.
///
/// The set is closed. Textual forms are kebab-case (`pending-removal`);
/// parsing also accepts `_` separators and any ASCII case.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Severity {
    /// The symbol is deprecated and callers should migrate.
    #[default]
    Deprecation,
    /// The symbol is scheduled for removal in an upcoming release.
    PendingRemoval,
    /// The symbol keeps working but its behavior will change.
    FutureChange,
}

impl Severity {
    /// Every classification, in declaration order.
    pub const ALL: [Severity; 3] = [
        Severity::Deprecation,
        Severity::PendingRemoval,
        Severity::FutureChange,
    ];

    /// The kebab-case name used in attributes and rendered output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Deprecation => "deprecation",
            Severity::PendingRemoval => "pending-removal",
            Severity::FutureChange => "future-change",
        }
    }

    /// The Rust variant name, for code generation.
    pub const fn variant_name(self) -> &'static str {
        match self {
            Severity::Deprecation => "Deprecation",
            Severity::PendingRemoval => "PendingRemoval",
            Severity::FutureChange => "FutureChange",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = InvalidSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Severity::ALL
            .into_iter()
            .find(|severity| {
                let name = severity.as_str();
                name.len() == trimmed.len()
                    && name
                        .bytes()
                        .zip(trimmed.bytes())
                        .all(|(a, b)| a == b.to_ascii_lowercase() || (a == b'-' && b == b'_'))
            })
            .ok_or_else(|| InvalidSeverity::new(s))
    }
}
