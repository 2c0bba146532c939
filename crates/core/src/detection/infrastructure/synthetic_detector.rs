use crate::detection::domain::face_detector::{DetectorOptions, FaceDetector};
use crate::shared::constants::DETECTOR_REFERENCE_DIM;
use crate::shared::frame::Frame;
use crate::shared::geometry::DetectionRect;

/// Radius of the synthetic face's orbit around the detector-space
/// center, in detector units.
const ORBIT_RADIUS: f64 = 250.0;

/// Side length of the synthetic face box, in detector units.
const FACE_SIZE: f64 = 200.0;

/// Orbit advance per frame, in radians.
const ORBIT_STEP: f64 = 0.08;

/// Deterministic stand-in for the external detection capability.
///
/// Emits one face orbiting the detector-space center as a pure
/// function of the frame index, so driver output is reproducible.
/// `fail_every` injects a capability error on every Nth frame to
/// exercise the zero-detections recovery policy end to end.
pub struct SyntheticFaceDetector {
    fail_every: Option<usize>,
}

impl SyntheticFaceDetector {
    pub fn new(options: DetectorOptions, fail_every: Option<usize>) -> Self {
        log::debug!(
            "synthetic detector configured: mode={:?} landmarks={} classification={}",
            options.performance_mode,
            options.landmarks,
            options.classification
        );
        Self { fail_every }
    }
}

impl FaceDetector for SyntheticFaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<DetectionRect>, Box<dyn std::error::Error>> {
        if let Some(n) = self.fail_every {
            if n > 0 && frame.index() % n == n - 1 {
                return Err(format!("injected detector fault on frame {}", frame.index()).into());
            }
        }

        let angle = frame.index() as f64 * ORBIT_STEP;
        let center = DETECTOR_REFERENCE_DIM / 2.0;
        let cx = center + ORBIT_RADIUS * angle.cos();
        let cy = center + ORBIT_RADIUS * angle.sin();

        Ok(vec![DetectionRect {
            x: cx - FACE_SIZE / 2.0,
            y: cy - FACE_SIZE / 2.0,
            width: FACE_SIZE,
            height: FACE_SIZE,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::frame::PixelFormat;

    fn frame(index: usize) -> Frame {
        Frame::new(vec![0u8; 3], 1, 1, PixelFormat::Rgb8, index)
    }

    #[test]
    fn test_deterministic_per_frame_index() {
        let mut a = SyntheticFaceDetector::new(DetectorOptions::default(), None);
        let mut b = SyntheticFaceDetector::new(DetectorOptions::default(), None);
        assert_eq!(a.detect(&frame(5)).unwrap(), b.detect(&frame(5)).unwrap());
    }

    #[test]
    fn test_face_moves_between_frames() {
        let mut d = SyntheticFaceDetector::new(DetectorOptions::default(), None);
        let r0 = d.detect(&frame(0)).unwrap();
        let r1 = d.detect(&frame(10)).unwrap();
        assert_ne!(r0, r1);
    }

    #[test]
    fn test_fail_every_injects_errors() {
        let mut d = SyntheticFaceDetector::new(DetectorOptions::default(), Some(3));
        assert!(d.detect(&frame(0)).is_ok());
        assert!(d.detect(&frame(1)).is_ok());
        assert!(d.detect(&frame(2)).is_err());
        assert!(d.detect(&frame(3)).is_ok());
        assert!(d.detect(&frame(5)).is_err());
    }
}
