//! Face placement on a regular n-gon.
//!
//! Faces are numbered counter-clockwise (viewed from above, +X towards +Z)
//! starting at the seam on the +X axis. Face `i` spans the arc between
//! vertices `i` and `i + 1`, so its bisector sits half a step past vertex `i`.

use std::f32::consts::{PI, TAU};

use serde::Serialize;

use super::Placement;
use crate::error::{Result, SceneError};

/// Fewest sides a closed polygon can have
pub const MIN_SEGMENTS: usize = 3;

/// Angle of the bisector of face `face_index` on an n-gon.
///
/// Indices outside `[0, segment_count)` are a caller bug and are reported,
/// never wrapped.
pub fn face_center_angle(segment_count: usize, face_index: usize) -> Result<f32> {
    if segment_count < MIN_SEGMENTS {
        return Err(SceneError::TooFewSegments(segment_count));
    }
    if face_index >= segment_count {
        return Err(SceneError::FaceIndexOutOfRange {
            index: face_index,
            segment_count,
        });
    }
    Ok((face_index as f32 + 0.5) * (TAU / segment_count as f32))
}

/// Ground-plane `(x, z)` at `distance` from the center along `angle`.
pub fn face_position(angle: f32, distance: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (cos * distance, sin * distance)
}

/// Straight-line distance between two adjacent vertices at `radius`.
///
/// Objects meant to fit inside one face should subtract a clearance from
/// this before using it as a physical width.
pub fn chord_width_at_radius(radius: f32, segment_count: usize) -> Result<f32> {
    if segment_count < MIN_SEGMENTS {
        return Err(SceneError::TooFewSegments(segment_count));
    }
    Ok(chord(radius, segment_count))
}

fn chord(radius: f32, segment_count: usize) -> f32 {
    2.0 * radius * (PI / segment_count as f32).sin()
}

/// Yaw that points a mounted object's local +X away from the center.
pub fn face_rotation_y(angle: f32) -> f32 {
    -angle
}

/// A face of a specific [`PolygonSpec`]; always in range for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FaceIndex(usize);

impl FaceIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

/// Dimensions of the septagon case (or any regular n-gon case).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonSpec {
    segment_count: usize,
    outer_radius: f32,
    inner_radius: f32,
    case_height: f32,
}

impl PolygonSpec {
    pub fn new(
        segment_count: usize,
        outer_radius: f32,
        inner_radius: f32,
        case_height: f32,
    ) -> Result<Self> {
        if segment_count < MIN_SEGMENTS {
            return Err(SceneError::TooFewSegments(segment_count));
        }
        positive("outer radius", outer_radius)?;
        positive("inner radius", inner_radius)?;
        positive("case height", case_height)?;
        if inner_radius >= outer_radius {
            return Err(SceneError::InnerRadiusTooLarge {
                inner: inner_radius,
                outer: outer_radius,
            });
        }

        Ok(Self {
            segment_count,
            outer_radius,
            inner_radius,
            case_height,
        })
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    pub fn case_height(&self) -> f32 {
        self.case_height
    }

    /// Angular span of one face
    pub fn step(&self) -> f32 {
        TAU / self.segment_count as f32
    }

    pub fn face(&self, index: usize) -> Result<FaceIndex> {
        if index < self.segment_count {
            Ok(FaceIndex(index))
        } else {
            Err(SceneError::FaceIndexOutOfRange {
                index,
                segment_count: self.segment_count,
            })
        }
    }

    pub fn faces(&self) -> impl Iterator<Item = FaceIndex> {
        (0..self.segment_count).map(FaceIndex)
    }

    pub fn face_angle(&self, face: FaceIndex) -> f32 {
        (face.0 as f32 + 0.5) * self.step()
    }

    /// Vertex `index` (taken modulo the segment count) at `radius`
    pub fn vertex(&self, index: usize, radius: f32) -> (f32, f32) {
        let angle = (index % self.segment_count) as f32 * self.step();
        face_position(angle, radius)
    }

    /// Distance from the center to the middle of a face at `radius`
    pub fn apothem(&self, radius: f32) -> f32 {
        radius * (PI / self.segment_count as f32).cos()
    }

    pub fn wall_thickness(&self) -> f32 {
        self.outer_radius - self.inner_radius
    }

    pub fn chord_width(&self, radius: f32) -> f32 {
        chord(radius, self.segment_count)
    }

    /// Width of an object that fits one face at `radius` with `clearance`
    /// left over.
    pub fn fitted_width(&self, radius: f32, clearance: f32) -> Result<f32> {
        let chord = self.chord_width(radius);
        let width = chord - clearance;
        if width > 0.0 {
            Ok(width)
        } else {
            Err(SceneError::NoClearance { chord, clearance })
        }
    }

    /// Pose of an object on `face`, `distance` out from the center.
    pub fn placement(&self, face: FaceIndex, distance: f32) -> Placement {
        let angle = self.face_angle(face);
        let (x, z) = face_position(angle, distance);
        Placement::new(x, z, face_rotation_y(angle))
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::NonPositiveDimension { name, value })
    }
}
