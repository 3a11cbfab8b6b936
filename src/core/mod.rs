pub mod clock;
pub mod frame;

pub use clock::FrameClock;
pub use frame::{FixedStep, FrameInfo};
