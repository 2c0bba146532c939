pub mod static_devices;
pub mod static_permission;
pub mod synthetic_camera;
