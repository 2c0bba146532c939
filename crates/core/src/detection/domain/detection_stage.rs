use crate::shared::frame::Frame;
use crate::shared::geometry::FaceResult;

use super::face_detector::FaceDetector;

/// Runs the detection capability once per delivered frame.
///
/// The stage never lets a capability error escape: a failed frame is
/// logged and treated as zero detections so frame delivery continues
/// uninterrupted.
pub struct DetectionStage {
    detector: Box<dyn FaceDetector>,
    failures: usize,
}

impl DetectionStage {
    pub fn new(detector: Box<dyn FaceDetector>) -> Self {
        Self {
            detector,
            failures: 0,
        }
    }

    pub fn process(&mut self, frame: &Frame) -> FaceResult {
        match self.detector.detect(frame) {
            Ok(faces) => FaceResult {
                frame_index: frame.index(),
                faces,
            },
            Err(e) => {
                self.failures += 1;
                log::warn!(
                    "detection failed on frame {}, treating as zero faces: {e}",
                    frame.index()
                );
                FaceResult::empty(frame.index())
            }
        }
    }

    /// Count of frames recovered via the zero-detections policy.
    pub fn failures(&self) -> usize {
        self.failures
    }
}
