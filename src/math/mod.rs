mod placement;
mod polygon;

pub use placement::Placement;
pub use polygon::{
    chord_width_at_radius, face_center_angle, face_position, face_rotation_y, FaceIndex,
    PolygonSpec, MIN_SEGMENTS,
};
