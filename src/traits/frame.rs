use crate::core::frame::FrameInfo;

/// Frame timing and iteration abstraction
pub trait FrameSource: Iterator<Item = FrameInfo> {
    /// Seconds between consecutive frames
    fn delta_time(&self) -> f32;

    /// Number of frames yielded so far
    fn frame_count(&self) -> u64;
}
