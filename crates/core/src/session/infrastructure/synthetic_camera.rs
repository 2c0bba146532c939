use std::time::Duration;

use crate::session::domain::frame_source::FrameSource;
use crate::shared::constants::{SYNTHETIC_FRAME_HEIGHT, SYNTHETIC_FRAME_WIDTH};
use crate::shared::frame::{Frame, PixelFormat};

/// Fixed-size frame generator standing in for a device frame stream.
///
/// Emits `frame_budget` gray frames with monotonic indices, pacing
/// delivery by `frame_interval` when one is set (zero interval runs
/// flat out, which tests use to provoke drops).
pub struct SyntheticCamera {
    width: u32,
    height: u32,
    frame_budget: usize,
    frame_interval: Duration,
    next_index: usize,
}

impl SyntheticCamera {
    pub fn new(frame_budget: usize, frame_interval: Duration) -> Self {
        Self {
            width: SYNTHETIC_FRAME_WIDTH,
            height: SYNTHETIC_FRAME_HEIGHT,
            frame_budget,
            frame_interval,
            next_index: 0,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl FrameSource for SyntheticCamera {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.next_index >= self.frame_budget {
            return None;
        }
        if !self.frame_interval.is_zero() {
            std::thread::sleep(self.frame_interval);
        }
        let index = self.next_index;
        self.next_index += 1;
        let len = (self.width * self.height * 3) as usize;
        Some(Frame::new(
            vec![0x80; len],
            self.width,
            self.height,
            PixelFormat::Rgb8,
            index,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_budgeted_frames_then_ends() {
        let mut camera = SyntheticCamera::new(3, Duration::ZERO).with_size(4, 4);
        let indices: Vec<usize> = std::iter::from_fn(|| camera.next_frame())
            .map(|f| f.index())
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(camera.next_frame().is_none());
    }

    #[test]
    fn test_frame_dimensions() {
        let mut camera = SyntheticCamera::new(1, Duration::ZERO).with_size(8, 2);
        let frame = camera.next_frame().unwrap();
        assert_eq!(frame.width(), 8);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.data().len(), 8 * 2 * 3);
    }
}
