use chrono::{DateTime, FixedOffset};

/// Supplies the instant the clock face should show
pub trait InstantSource {
    /// Current instant, keeping the offset of the zone it was read in
    fn now(&self) -> DateTime<FixedOffset>;
}
