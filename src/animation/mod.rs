mod slide;
mod spin;

pub use slide::{advance, toggle_open, RadialSlideAnimator, SlideState};
pub use spin::Spin;
