//! Radial slide of a drawer-like object along its face bisector.
//!
//! The displayed distance is owned here and chased towards the open or
//! closed target every frame. Nothing is ever read back from the renderer.

use crate::error::{check_elapsed, Result, SceneError};
use crate::math::{face_position, face_rotation_y, FaceIndex, Placement, PolygonSpec};

/// Exponential smoothing step from `current` towards `target`.
///
/// Uses `1 - exp(-rate * elapsed)` as the blend factor, so any split of the
/// same wall-clock time into frames lands on the same distance.
pub fn advance(current: f32, target: f32, elapsed_seconds: f32, rate: f32) -> Result<f32> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(SceneError::NonPositiveRate(rate));
    }
    check_elapsed(elapsed_seconds)?;

    let blend = 1.0 - (-rate * elapsed_seconds).exp();
    Ok(current + (target - current) * blend)
}

/// Flips the open flag, leaving the displayed distance where it is.
pub fn toggle_open(state: SlideState) -> SlideState {
    SlideState {
        is_open: !state.is_open,
        ..state
    }
}

/// Animation state of one slidable object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideState {
    pub face: FaceIndex,
    /// Bisector angle of `face`, fixed for the state's lifetime
    pub angle: f32,
    pub closed_distance: f32,
    pub open_distance: f32,
    pub is_open: bool,
    pub current_distance: f32,
}

impl SlideState {
    /// Closed state seeded at `closed_distance` so the first frame does not jump.
    pub fn new(spec: &PolygonSpec, face: FaceIndex, closed_distance: f32, open_distance: f32) -> Self {
        Self {
            face,
            angle: spec.face_angle(face),
            closed_distance,
            open_distance,
            is_open: false,
            current_distance: closed_distance,
        }
    }

    pub fn target(&self) -> f32 {
        if self.is_open {
            self.open_distance
        } else {
            self.closed_distance
        }
    }

    pub fn toggle(&mut self) {
        *self = toggle_open(*self);
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    pub fn placement(&self) -> Placement {
        let (x, z) = face_position(self.angle, self.current_distance);
        Placement::new(x, z, face_rotation_y(self.angle))
    }
}

/// Drives [`SlideState`]s at a fixed convergence rate (per second).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialSlideAnimator {
    rate: f32,
}

impl RadialSlideAnimator {
    pub fn new(rate: f32) -> Result<Self> {
        if rate > 0.0 && rate.is_finite() {
            Ok(Self { rate })
        } else {
            Err(SceneError::NonPositiveRate(rate))
        }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Moves `state` towards its target and returns the new pose.
    pub fn step(&self, state: &mut SlideState, elapsed_seconds: f32) -> Result<Placement> {
        state.current_distance = advance(
            state.current_distance,
            state.target(),
            elapsed_seconds,
            self.rate,
        )?;
        Ok(state.placement())
    }

    pub fn is_settled(&self, state: &SlideState, epsilon: f32) -> bool {
        (state.current_distance - state.target()).abs() <= epsilon
    }

    /// Seconds until the remaining gap shrinks to `fraction` of what it is now.
    pub fn time_to_fraction(&self, fraction: f32) -> f32 {
        -fraction.ln() / self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawer() -> SlideState {
        let spec = PolygonSpec::new(7, 3.0, 1.2, 1.0).unwrap();
        SlideState::new(&spec, spec.face(3).unwrap(), 1.1, 2.6)
    }

    #[test]
    fn test_advance_zero_elapsed_is_identity() {
        assert_eq!(advance(1.1, 2.6, 0.0, 8.0).unwrap(), 1.1);
    }

    #[test]
    fn test_advance_rejects_bad_timing() {
        assert!(matches!(advance(0.0, 1.0, 0.1, 0.0), Err(SceneError::NonPositiveRate(_))));
        assert!(matches!(advance(0.0, 1.0, 0.1, -2.0), Err(SceneError::NonPositiveRate(_))));
        assert!(matches!(advance(0.0, 1.0, -0.1, 8.0), Err(SceneError::NegativeElapsed(_))));
        assert!(advance(0.0, 1.0, 0.1, f32::NAN).is_err());
    }

    #[test]
    fn test_new_state_is_seeded_closed() {
        let state = drawer();
        assert!(!state.is_open);
        assert_eq!(state.current_distance, 1.1);
        assert_eq!(state.target(), 1.1);
    }

    #[test]
    fn test_toggle_keeps_distance() {
        let mut state = drawer();
        state.current_distance = 1.7;
        state.toggle();
        assert!(state.is_open);
        assert_eq!(state.current_distance, 1.7);
        assert_eq!(state.target(), 2.6);
    }

    #[test]
    fn test_step_returns_placement_on_bisector() {
        let animator = RadialSlideAnimator::new(8.0).unwrap();
        let mut state = toggle_open(drawer());
        let pose = animator.step(&mut state, 0.1).unwrap();
        assert!((pose.radial_distance() - state.current_distance).abs() < 1e-5);
        assert!((pose.rotation_y + state.angle).abs() < 1e-6);
    }

    #[test]
    fn test_animator_rejects_bad_rate() {
        assert!(RadialSlideAnimator::new(0.0).is_err());
        assert!(RadialSlideAnimator::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_time_to_fraction() {
        let animator = RadialSlideAnimator::new(8.0).unwrap();
        let t = animator.time_to_fraction(0.01);
        assert!((t - 0.5756).abs() < 1e-3, "got {}", t);
    }
}
