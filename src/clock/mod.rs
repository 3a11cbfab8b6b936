mod formatter;
mod tick;

pub use formatter::{format, ClockFormatter, ClockSnapshot};
pub use tick::{ClockDisplay, FixedInstant, SystemTime, TickTimer};
