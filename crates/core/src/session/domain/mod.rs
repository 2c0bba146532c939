pub mod camera_device;
pub mod frame_source;
pub mod permission;
pub mod session_controller;
