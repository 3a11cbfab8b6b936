//! Geometry, animation and clock-face core of a septagon display case.
//!
//! Rendering is left to an external scene-graph engine; this crate only
//! produces poses and label strings for it.

pub mod animation;
pub mod cli;
pub mod clock;
pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod scene;
pub mod traits;

pub use animation::{advance, toggle_open, RadialSlideAnimator, SlideState};
pub use clock::{format, ClockFormatter, ClockSnapshot};
pub use config::SceneConfig;
pub use error::{ErrorKind, Result, SceneError};
pub use math::{
    chord_width_at_radius, face_center_angle, face_position, FaceIndex, Placement, PolygonSpec,
};
pub use scene::{CaseScene, FrameOutput, InteractionEvent, TargetId};
