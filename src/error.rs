use thiserror::Error;

use crate::scene::TargetId;

/// Broad category of a [`SceneError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid scene setup, raised before the first frame.
    Configuration,
    /// A face or target outside the polygon was addressed.
    Range,
    /// The upstream timing source produced unusable values.
    Timing,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("a polygon needs at least 3 segments, got {0}")]
    TooFewSegments(usize),

    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveDimension { name: &'static str, value: f32 },

    #[error("inner radius {inner} must be smaller than outer radius {outer}")]
    InnerRadiusTooLarge { inner: f32, outer: f32 },

    #[error("clearance {clearance} leaves no room on a face of width {chord}")]
    NoClearance { chord: f32, clearance: f32 },

    #[error("face {0} already carries another mounted object")]
    FaceOccupied(usize),

    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("tick interval must be positive, got {0}")]
    InvalidTickInterval(f32),

    #[error("face index {index} is out of range for a {segment_count}-sided polygon")]
    FaceIndexOutOfRange { index: usize, segment_count: usize },

    #[error("no interactive object with target {0:?}")]
    UnknownTarget(TargetId),

    #[error("animation rate must be positive, got {0}")]
    NonPositiveRate(f32),

    #[error("elapsed time must not be negative, got {0}")]
    NegativeElapsed(f32),

    #[error("elapsed time must be finite, got {0}")]
    NonFiniteElapsed(f32),
}

impl SceneError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooFewSegments(_)
            | Self::NonPositiveDimension { .. }
            | Self::InnerRadiusTooLarge { .. }
            | Self::NoClearance { .. }
            | Self::FaceOccupied(_)
            | Self::UnknownLocale(_)
            | Self::InvalidTickInterval(_) => ErrorKind::Configuration,
            Self::FaceIndexOutOfRange { .. } | Self::UnknownTarget(_) => ErrorKind::Range,
            Self::NonPositiveRate(_) | Self::NegativeElapsed(_) | Self::NonFiniteElapsed(_) => {
                ErrorKind::Timing
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SceneError>;

/// Rejects negative, NaN and infinite frame deltas.
pub(crate) fn check_elapsed(elapsed: f32) -> Result<()> {
    if elapsed.is_infinite() {
        Err(SceneError::NonFiniteElapsed(elapsed))
    } else if elapsed >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::NegativeElapsed(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(SceneError::TooFewSegments(2).kind(), ErrorKind::Configuration);
        assert_eq!(
            SceneError::FaceIndexOutOfRange { index: 7, segment_count: 7 }.kind(),
            ErrorKind::Range
        );
        assert_eq!(SceneError::NonPositiveRate(0.0).kind(), ErrorKind::Timing);
        assert_eq!(SceneError::NegativeElapsed(-1.0).kind(), ErrorKind::Timing);
    }

    #[test]
    fn test_display_names_the_problem() {
        let msg = SceneError::FaceIndexOutOfRange { index: 9, segment_count: 7 }.to_string();
        assert!(msg.contains('9') && msg.contains("7-sided"), "unexpected message: {}", msg);
    }

    #[test]
    fn test_check_elapsed() {
        assert!(check_elapsed(0.0).is_ok());
        assert!(check_elapsed(0.016).is_ok());
        assert!(check_elapsed(-0.001).is_err());
        assert!(check_elapsed(f32::NAN).is_err());
        assert!(matches!(
            check_elapsed(f32::INFINITY),
            Err(SceneError::NonFiniteElapsed(_))
        ));
        assert_eq!(SceneError::NonFiniteElapsed(f32::INFINITY).kind(), ErrorKind::Timing);
    }
}
