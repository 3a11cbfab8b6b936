use std::f32::consts::TAU;

use crate::error::{check_elapsed, Result};

/// Constant-speed turntable rotation about the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angle: f32,
    angular_speed: f32,
}

impl Spin {
    /// `angular_speed` is in radians per second; zero holds the ring still.
    pub fn new(angular_speed: f32) -> Self {
        Self {
            angle: 0.0,
            angular_speed,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Advances by `elapsed` seconds, keeping the angle in `[0, 2π)`.
    pub fn advance(&mut self, elapsed: f32) -> Result<f32> {
        check_elapsed(elapsed)?;
        let angle = (self.angle + self.angular_speed * elapsed).rem_euclid(TAU);
        // rem_euclid rounds tiny negative sums up to exactly TAU
        self.angle = if angle >= TAU { 0.0 } else { angle };
        Ok(self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_wraps() {
        let mut spin = Spin::new(TAU);
        let angle = spin.advance(1.25).unwrap();
        assert!((angle - TAU * 0.25).abs() < 1e-4, "got {}", angle);
    }

    #[test]
    fn test_reverse_spin_stays_positive() {
        let mut spin = Spin::new(-1.0);
        let angle = spin.advance(0.5).unwrap();
        assert!(angle >= 0.0 && angle < TAU);
        assert!((angle - (TAU - 0.5)).abs() < 1e-5);
    }

    #[test]
    fn test_tiny_reverse_step_stays_below_full_turn() {
        let mut spin = Spin::new(-1.0);
        let angle = spin.advance(1e-8).unwrap();
        assert!(angle >= 0.0 && angle < TAU, "got {}", angle);
    }

    #[test]
    fn test_infinite_elapsed_rejected() {
        let mut spin = Spin::new(0.2);
        spin.advance(1.0).unwrap();
        assert!(spin.advance(f32::INFINITY).is_err());
        assert!((spin.angle() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_static_ring() {
        let mut spin = Spin::new(0.0);
        assert_eq!(spin.advance(10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_elapsed_rejected() {
        let mut spin = Spin::new(1.0);
        assert!(spin.advance(-0.1).is_err());
        assert_eq!(spin.angle(), 0.0);
    }
}
