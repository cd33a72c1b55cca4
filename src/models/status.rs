use std::fmt;

/// Current work state of a worker, derived from the presence of open records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkStatus {
    /// Not working: before the first stamp of the day, or after the shift ended.
    Before,
    /// On shift and not on break.
    During,
    /// On shift and on break.
    Break,
}

impl WorkStatus {
    pub fn is_before(self) -> bool {
        self == WorkStatus::Before
    }

    pub fn is_during(self) -> bool {
        self == WorkStatus::During
    }

    pub fn is_break(self) -> bool {
        self == WorkStatus::Break
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkStatus::Before => "off duty",
            WorkStatus::During => "on shift",
            WorkStatus::Break => "on break",
        };
        write!(f, "{}", s)
    }
}
