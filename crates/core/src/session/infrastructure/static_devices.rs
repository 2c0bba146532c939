use crate::session::domain::camera_device::{CameraDevice, CameraFacing, DeviceEnumerator};

/// Enumerator over a fixed device list. First match per facing wins.
pub struct StaticDeviceEnumerator {
    devices: Vec<CameraDevice>,
}

impl StaticDeviceEnumerator {
    pub fn new(devices: Vec<CameraDevice>) -> Self {
        Self { devices }
    }
}

impl DeviceEnumerator for StaticDeviceEnumerator {
    fn device_for(&self, facing: CameraFacing) -> Option<CameraDevice> {
        self.devices.iter().find(|d| d.facing == facing).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_first_device_per_facing() {
        let enumerator = StaticDeviceEnumerator::new(vec![
            CameraDevice {
                id: "back-wide".into(),
                facing: CameraFacing::Back,
            },
            CameraDevice {
                id: "back-tele".into(),
                facing: CameraFacing::Back,
            },
        ]);
        let device = enumerator.device_for(CameraFacing::Back).unwrap();
        assert_eq!(device.id, "back-wide");
    }

    #[test]
    fn test_absent_facing_resolves_to_none() {
        let enumerator = StaticDeviceEnumerator::new(vec![]);
        assert!(enumerator.device_for(CameraFacing::Front).is_none());
    }
}
