use glam::{Mat4, Quat, Vec3};
use serde::Serialize;

/// Ground-plane pose handed to the renderer: position on the XZ plane plus
/// yaw about the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Placement {
    pub x: f32,
    pub z: f32,
    pub rotation_y: f32,
}

impl Placement {
    pub const fn new(x: f32, z: f32, rotation_y: f32) -> Self {
        Self { x, z, rotation_y }
    }

    /// Distance from the polygon's vertical axis
    pub fn radial_distance(&self) -> f32 {
        self.x.hypot(self.z)
    }

    pub fn translation(&self, y: f32) -> Vec3 {
        Vec3::new(self.x, y, self.z)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.rotation_y)
    }

    /// Model matrix with the object lifted to height `y`
    pub fn to_matrix(&self, y: f32) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.translation(y))
    }

    /// Spins the pose about the polygon's vertical axis.
    ///
    /// The position is rotated in the same sense as `rotation_y`, so an
    /// object stays flush with its face while the whole ring turns.
    pub fn rotated_about_center(&self, angle: f32) -> Self {
        let (sin, cos) = (-angle).sin_cos();
        Self {
            x: self.x * cos - self.z * sin,
            z: self.x * sin + self.z * cos,
            rotation_y: self.rotation_y + angle,
        }
    }
}
