pub mod detection_stage;
pub mod face_detector;
