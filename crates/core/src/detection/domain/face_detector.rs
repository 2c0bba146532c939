use crate::shared::frame::Frame;
use crate::shared::geometry::DetectionRect;

/// Trade-off preference of the detection capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerformanceMode {
    Fast,
    Accurate,
}

/// Static configuration of the detection capability, fixed at
/// startup and never varied at runtime.
#[derive(Clone, Copy, Debug)]
pub struct DetectorOptions {
    pub performance_mode: PerformanceMode,
    pub landmarks: bool,
    pub classification: bool,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            performance_mode: PerformanceMode::Fast,
            landmarks: false,
            classification: false,
        }
    }
}

/// Domain interface for the external face detection capability.
///
/// Implementations may be stateful, hence `&mut self`. The frame is
/// borrowed for the duration of the call only.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<DetectionRect>, Box<dyn std::error::Error>>;
}
