use crate::session::domain::camera_device::CameraFacing;
use crate::shared::geometry::{FaceResult, OverlayMarker, ViewGeometry};

use super::coordinate_mapper::map_detection;
use super::scale_policy::ScalePolicy;

/// Derives the full marker set for one render cycle.
///
/// Every call recomputes all markers from the given result and
/// geometry; nothing is diffed against previous cycles and marker i
/// corresponds to face i of this result only. Inputs arrive as
/// explicit parameters so the renderer reads no ambient state.
pub struct OverlayRenderer {
    policy: ScalePolicy,
}

impl OverlayRenderer {
    pub fn new(policy: ScalePolicy) -> Self {
        Self { policy }
    }

    /// Emits zero markers while geometry is unmeasured (a startup
    /// transient, not an error) or the result holds no faces.
    pub fn render(
        &self,
        result: &FaceResult,
        geometry: ViewGeometry,
        facing: CameraFacing,
    ) -> Vec<OverlayMarker> {
        if !geometry.is_measured() {
            return Vec::new();
        }
        result
            .faces
            .iter()
            .map(|&rect| map_detection(rect, geometry, facing, self.policy))
            .collect()
    }
}
