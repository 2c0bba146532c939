use crate::shared::geometry::ViewGeometry;

use super::camera_device::{CameraDevice, CameraFacing, DeviceEnumerator};
use super::permission::{PermissionGate, PermissionStatus};

/// What the viewfinder should present right now.
///
/// Only `Ready` permits capture and detection; every other state is a
/// waiting presentation during which no frames are processed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingPermission,
    PermissionDenied,
    WaitingForDevice,
    Ready(CameraDevice),
}

/// Owns device selection, permission state, and view layout.
///
/// Facing toggles and layout updates are single-writer and replaced
/// atomically; readers consume each wholesale, so no further
/// synchronization discipline is needed here.
pub struct SessionController {
    facing: CameraFacing,
    permission: PermissionStatus,
    geometry: ViewGeometry,
    devices: Box<dyn DeviceEnumerator>,
}

impl SessionController {
    pub fn new(devices: Box<dyn DeviceEnumerator>) -> Self {
        Self {
            facing: CameraFacing::default(),
            permission: PermissionStatus::default(),
            geometry: ViewGeometry::UNMEASURED,
            devices,
        }
    }

    /// Resolves camera permission through the platform boundary and
    /// stores the outcome. Called on explicit triggers only.
    pub fn request_permission(&mut self, gate: &mut dyn PermissionGate) -> PermissionStatus {
        self.permission = gate.request();
        self.permission
    }

    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }

    /// Flips facing. Takes effect with the next device resolution:
    /// frames already in flight from the old device are unaffected.
    pub fn toggle_facing(&mut self) -> CameraFacing {
        self.facing = self.facing.toggled();
        self.facing
    }

    pub fn facing(&self) -> CameraFacing {
        self.facing
    }

    /// Layout boundary: replaces the measured view geometry.
    pub fn set_geometry(&mut self, geometry: ViewGeometry) {
        self.geometry = geometry;
    }

    pub fn geometry(&self) -> ViewGeometry {
        self.geometry
    }

    pub fn state(&self) -> SessionState {
        match self.permission {
            PermissionStatus::Undetermined => SessionState::AwaitingPermission,
            PermissionStatus::Denied => SessionState::PermissionDenied,
            PermissionStatus::Granted => match self.devices.device_for(self.facing) {
                Some(device) => SessionState::Ready(device),
                None => SessionState::WaitingForDevice,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::infrastructure::static_devices::StaticDeviceEnumerator;
    use crate::session::infrastructure::static_permission::StaticPermissionGate;

    fn back_only() -> Box<StaticDeviceEnumerator> {
        Box::new(StaticDeviceEnumerator::new(vec![CameraDevice {
            id: "back-wide".into(),
            facing: CameraFacing::Back,
        }]))
    }

    #[test]
    fn test_starts_awaiting_permission() {
        let controller = SessionController::new(back_only());
        assert_eq!(controller.state(), SessionState::AwaitingPermission);
        assert_eq!(controller.geometry(), ViewGeometry::UNMEASURED);
    }

    #[test]
    fn test_denied_permission_is_terminal_until_retrigger() {
        let mut controller = SessionController::new(back_only());
        controller.request_permission(&mut StaticPermissionGate::new(PermissionStatus::Denied));
        assert_eq!(controller.state(), SessionState::PermissionDenied);

        controller.request_permission(&mut StaticPermissionGate::new(PermissionStatus::Granted));
        assert!(matches!(controller.state(), SessionState::Ready(_)));
    }

    #[test]
    fn test_granted_with_device_is_ready() {
        let mut controller = SessionController::new(back_only());
        controller.request_permission(&mut StaticPermissionGate::new(PermissionStatus::Granted));
        match controller.state() {
            SessionState::Ready(device) => assert_eq!(device.facing, CameraFacing::Back),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn test_toggle_to_absent_facing_waits_for_device() {
        // back camera exists, front does not
        let mut controller = SessionController::new(back_only());
        controller.request_permission(&mut StaticPermissionGate::new(PermissionStatus::Granted));
        assert!(matches!(controller.state(), SessionState::Ready(_)));

        assert_eq!(controller.toggle_facing(), CameraFacing::Front);
        assert_eq!(controller.state(), SessionState::WaitingForDevice);

        // toggling back recovers without any other action
        controller.toggle_facing();
        assert!(matches!(controller.state(), SessionState::Ready(_)));
    }

    #[test]
    fn test_geometry_replaced_wholesale() {
        let mut controller = SessionController::new(back_only());
        controller.set_geometry(ViewGeometry::new(390.0, 844.0));
        assert_eq!(controller.geometry(), ViewGeometry::new(390.0, 844.0));
        controller.set_geometry(ViewGeometry::new(844.0, 390.0));
        assert_eq!(controller.geometry(), ViewGeometry::new(844.0, 390.0));
    }
}
