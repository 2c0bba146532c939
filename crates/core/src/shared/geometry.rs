/// A face bounding box in detector coordinate space (long axis spans
/// `DETECTOR_REFERENCE_DIM` units). Immutable once produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Complete detection output for one frame.
///
/// Replaced wholesale every cycle; `faces` order is detection order
/// and carries no identity across frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceResult {
    pub frame_index: usize,
    pub faces: Vec<DetectionRect>,
}

impl FaceResult {
    pub fn empty(frame_index: usize) -> Self {
        Self {
            frame_index,
            faces: Vec::new(),
        }
    }
}

/// Measured size of the rendering surface, in view pixels.
///
/// Mutated only by layout events; read by the overlay renderer. A
/// zero width means no layout has been measured yet and rendering
/// must be suppressed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewGeometry {
    pub width: f64,
    pub height: f64,
}

impl ViewGeometry {
    pub const UNMEASURED: ViewGeometry = ViewGeometry {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_measured(&self) -> bool {
        self.width > 0.0
    }
}

/// One draw instruction: an axis-aligned marker rectangle in
/// view-space pixels. Derived every cycle, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayMarker {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmeasured_geometry() {
        assert!(!ViewGeometry::UNMEASURED.is_measured());
        assert!(!ViewGeometry::new(0.0, 500.0).is_measured());
        assert!(ViewGeometry::new(1.0, 0.0).is_measured());
    }

    #[test]
    fn test_empty_result_has_no_faces() {
        let r = FaceResult::empty(9);
        assert_eq!(r.frame_index, 9);
        assert!(r.faces.is_empty());
    }
}
