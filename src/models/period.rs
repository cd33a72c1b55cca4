use chrono::NaiveDateTime;
use serde::Serialize;

/// Selects which pair of tables a period record lives in.
///
/// Shifts and breaks share the same open/closed shape, so the repository
/// exposes one set of typed queries keyed by kind instead of duplicating
/// every function per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Shift,
    Break,
}

impl PeriodKind {
    /// Table holding in-progress records of this kind.
    pub fn open_table(self) -> &'static str {
        match self {
            PeriodKind::Shift => "open_shifts",
            PeriodKind::Break => "open_breaks",
        }
    }

    /// Table holding completed (or forcibly closed) records of this kind.
    pub fn closed_table(self) -> &'static str {
        match self {
            PeriodKind::Shift => "closed_shifts",
            PeriodKind::Break => "closed_breaks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PeriodKind::Shift => "shift",
            PeriodKind::Break => "break",
        }
    }
}

/// An in-progress shift or break. At most one exists per worker and kind.
#[derive(Debug, Clone, Serialize)]
pub struct OpenPeriod {
    pub worker_id: i64,
    pub begun_at: NaiveDateTime,
}

/// A completed shift or break. `ended_at` is None when the record was closed
/// by day-boundary reconciliation instead of an explicit end stamp; such a
/// record has an unknowable duration and is never re-opened.
#[derive(Debug, Clone, Serialize)]
pub struct ClosedPeriod {
    pub worker_id: i64,
    pub begun_at: NaiveDateTime,
    pub ended_at: Option<NaiveDateTime>,
}

impl ClosedPeriod {
    /// Elapsed seconds, or None when the end stamp was missed.
    pub fn seconds(&self) -> Option<i64> {
        self.ended_at
            .map(|ended| (ended - self.begun_at).num_seconds())
    }
}
