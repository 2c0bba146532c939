/// Which physical camera supplies frames. Front implies a mirrored
/// preview, so marker positions mirror with it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraFacing {
    Front,
    #[default]
    Back,
}

impl CameraFacing {
    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Front => CameraFacing::Back,
            CameraFacing::Back => CameraFacing::Front,
        }
    }
}

/// Handle to a resolved physical camera.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraDevice {
    pub id: String,
    pub facing: CameraFacing,
}

/// Device enumeration boundary: zero or one device per facing.
/// Absence is a presentable loading state, never a failure.
pub trait DeviceEnumerator {
    fn device_for(&self, facing: CameraFacing) -> Option<CameraDevice>;
}
