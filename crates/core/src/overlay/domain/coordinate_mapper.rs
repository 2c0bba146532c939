use crate::session::domain::camera_device::CameraFacing;
use crate::shared::constants::{DETECTOR_REFERENCE_DIM, MARKER_ASPECT_RATIO};
use crate::shared::geometry::{DetectionRect, OverlayMarker, ViewGeometry};

use super::scale_policy::ScalePolicy;

/// Maps one detection rectangle from detector space into a view-space
/// marker.
///
/// Pure and deterministic: identical inputs yield identical output.
/// Caller contract: `geometry.width > 0` — with no layout measured
/// yet, rendering must be suppressed instead of calling the mapper.
///
/// The marker is sized from the scaled face width with a fixed oval
/// aspect, centered on the scaled detection rectangle's center, and
/// shifted down by the policy's vertical offset. For the front camera
/// the horizontal center is reflected about the view's vertical axis
/// so the marker tracks the mirrored preview image.
pub fn map_detection(
    rect: DetectionRect,
    geometry: ViewGeometry,
    facing: CameraFacing,
    policy: ScalePolicy,
) -> OverlayMarker {
    debug_assert!(
        geometry.is_measured(),
        "map_detection requires measured view geometry"
    );

    let scale = geometry.width / DETECTOR_REFERENCE_DIM * policy.multiplier;

    let face_width = rect.width * scale;
    let face_height = rect.height * scale;
    let marker_width = face_width;
    let marker_height = marker_width * MARKER_ASPECT_RATIO;

    let mut center_x = rect.x * scale + face_width / 2.0;
    if facing == CameraFacing::Front {
        center_x = geometry.width - center_x;
    }
    let center_y = rect.y * scale + face_height / 2.0;

    OverlayMarker {
        left: center_x - marker_width / 2.0,
        top: center_y - marker_height / 2.0 + policy.vertical_offset,
        width: marker_width,
        height: marker_height,
    }
}
