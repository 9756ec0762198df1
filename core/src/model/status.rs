use serde::{Deserialize, Serialize};
use std::fmt;

/// Attendance-style status attached to a single day by the caller.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Present,
    Late,
    Absent,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Present, Status::Late, Status::Absent];
}

/// One caller-supplied record. `date` stays a raw string so that malformed
/// input can be reported instead of failing deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusRecord {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl StatusRecord {
    pub fn new(date: impl Into<String>, status: Option<Status>) -> Self {
        Self {
            date: date.into(),
            status,
        }
    }
}

/// Color class a tile is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorClass {
    Present,
    Late,
    Absent,
    #[default]
    Default,
}

impl ColorClass {
    pub fn class_name(self) -> &'static str {
        match self {
            ColorClass::Present => "present",
            ColorClass::Late => "late",
            ColorClass::Absent => "absent",
            ColorClass::Default => "default",
        }
    }
}

impl From<Option<Status>> for ColorClass {
    fn from(status: Option<Status>) -> Self {
        match status {
            Some(Status::Present) => ColorClass::Present,
            Some(Status::Late) => ColorClass::Late,
            Some(Status::Absent) => ColorClass::Absent,
            None => ColorClass::Default,
        }
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
