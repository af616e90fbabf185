//! Structured diagnostics for tolerated protocol variance.
//!
//! Decoders never fail on variance that real servers are known to produce
//! (odd subtype markers, unlisted mode pairs, short records). They record a
//! [`Diagnostic`] instead and keep going. Every recorded event is also sent
//! to the `log` facade at the kind's level.

use log::Level;

/// The closed set of tolerated conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DiagnosticKind {
    /// Response subtype marker did not match the expected value.
    SubtypeMismatch,
    /// Player record below the minimum length; the record was skipped.
    IncompleteRecord,
    /// Player record ran out of bytes mid-field; the record was skipped.
    TruncatedRecord,
    /// Player record decoded with an empty name; the record was skipped.
    EmptyName,
    /// Accepted record carried a client id the header did not list.
    UnexpectedClientId,
    /// Mode pair not in the known table.
    UnknownMode,
}

impl DiagnosticKind {
    /// Log level used when the event is recorded.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::UnknownMode => Level::Info,
            Self::SubtypeMismatch
            | Self::IncompleteRecord
            | Self::TruncatedRecord
            | Self::EmptyName
            | Self::UnexpectedClientId => Level::Warn,
        }
    }

    /// Returns `true` if the event caused a record to be dropped.
    #[must_use]
    pub const fn discards_record(self) -> bool {
        matches!(
            self,
            Self::IncompleteRecord | Self::TruncatedRecord | Self::EmptyName
        )
    }
}

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub detail: String,
}

/// Collector for diagnostics raised during one decode or query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Diagnostics {
    events: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event and logs it.
    pub fn record(&mut self, kind: DiagnosticKind, detail: impl Into<String>) {
        let detail = detail.into();
        log::log!(target: "cubequery", kind.level(), "{kind:?}: {detail}");
        self.events.push(Diagnostic { kind, detail });
    }

    /// Returns how many events of `kind` were recorded.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.events.iter().filter(|event| event.kind == kind).count()
    }

    /// Returns all recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[Diagnostic] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Moves all events from `other` into `self`.
    pub fn absorb(&mut self, other: Self) {
        self.events.extend(other.events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_kind() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.record(DiagnosticKind::EmptyName, "cn 3");
        diagnostics.record(DiagnosticKind::SubtypeMismatch, "got -9");
        diagnostics.record(DiagnosticKind::EmptyName, "cn 4");

        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics.count(DiagnosticKind::EmptyName), 2);
        assert_eq!(diagnostics.count(DiagnosticKind::SubtypeMismatch), 1);
        assert_eq!(diagnostics.count(DiagnosticKind::UnknownMode), 0);
    }

    #[test]
    fn events_keep_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.record(DiagnosticKind::UnknownMode, "first");
        diagnostics.record(DiagnosticKind::TruncatedRecord, "second");
        let kinds: Vec<_> = diagnostics.events().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [DiagnosticKind::UnknownMode, DiagnosticKind::TruncatedRecord]
        );
        assert_eq!(diagnostics.events()[1].detail, "second");
    }

    #[test]
    fn absorb_appends() {
        let mut a = Diagnostics::new();
        a.record(DiagnosticKind::EmptyName, "a");
        let mut b = Diagnostics::new();
        b.record(DiagnosticKind::IncompleteRecord, "b");
        a.absorb(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.count(DiagnosticKind::IncompleteRecord), 1);
    }

    #[test]
    fn discarding_kinds() {
        assert!(DiagnosticKind::EmptyName.discards_record());
        assert!(DiagnosticKind::IncompleteRecord.discards_record());
        assert!(!DiagnosticKind::UnexpectedClientId.discards_record());
        assert_eq!(DiagnosticKind::UnknownMode.level(), Level::Info);
    }
}
