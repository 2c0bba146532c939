/// Long-axis dimension of the detector coordinate space, in detector
/// units. All detection rectangles are expressed against this scale.
pub const DETECTOR_REFERENCE_DIM: f64 = 1080.0;

/// Fixed oval aspect: marker height = marker width * this ratio,
/// approximating a face.
pub const MARKER_ASPECT_RATIO: f64 = 1.3;

/// Default capture size for the synthetic camera (pixels).
pub const SYNTHETIC_FRAME_WIDTH: u32 = 1280;
pub const SYNTHETIC_FRAME_HEIGHT: u32 = 720;
