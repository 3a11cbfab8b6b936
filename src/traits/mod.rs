pub mod controller;
pub mod frame;
pub mod instant;

pub use controller::*;
pub use frame::*;
pub use instant::*;
