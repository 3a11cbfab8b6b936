use crate::traits::FrameSource;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Simulated seconds since the first frame
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Deterministic frame sequence at a fixed rate.
///
/// The first frame has a zero delta, matching a render loop that has not
/// measured anything yet. Bounded by `limit` when one is given.
#[derive(Debug, Clone)]
pub struct FixedStep {
    delta: f32,
    frame_number: u64,
    limit: Option<u64>,
}

impl FixedStep {
    pub fn new(fps: f32) -> Self {
        Self {
            delta: 1.0 / fps,
            frame_number: 0,
            limit: None,
        }
    }

    /// Stop after `frames` frames
    pub fn take_frames(mut self, frames: u64) -> Self {
        self.limit = Some(frames);
        self
    }

    pub fn time(&self) -> f32 {
        self.frame_number.saturating_sub(1) as f32 * self.delta
    }
}

impl Iterator for FixedStep {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.limit.is_some_and(|limit| self.frame_number >= limit) {
            return None;
        }

        let number = self.frame_number;
        let delta = if number == 0 { 0.0 } else { self.delta };
        let info = FrameInfo::new(number, number as f32 * self.delta, delta);

        self.frame_number += 1;
        Some(info)
    }
}

impl FrameSource for FixedStep {
    fn delta_time(&self) -> f32 {
        self.delta
    }

    fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_first_frame_has_no_delta() {
        let frames: Vec<_> = FixedStep::new(60.0).take_frames(3).collect();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].delta, 0.0);
        assert!((frames[1].delta - 1.0 / 60.0).abs() < 1e-7);
        assert!((frames[2].time - 2.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn fixed_step_counts_frames() {
        let mut frames = FixedStep::new(30.0).take_frames(5);
        for _ in frames.by_ref() {}

        assert_eq!(frames.frame_count(), 5);
        assert!((frames.delta_time() - 1.0 / 30.0).abs() < 1e-7);
        assert!((frames.time() - 4.0 / 30.0).abs() < 1e-6);
    }
}
