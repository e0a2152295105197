/// Row-major index of a slot within the active layout.
pub type SlotPosition = usize;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
