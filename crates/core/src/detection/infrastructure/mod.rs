pub mod synthetic_detector;
