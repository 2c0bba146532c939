use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use thiserror::Error;

use crate::detection::domain::detection_stage::DetectionStage;
use crate::overlay::domain::overlay_renderer::OverlayRenderer;
use crate::session::domain::frame_source::FrameSource;
use crate::session::domain::session_controller::{SessionController, SessionState};
use crate::shared::geometry::{OverlayMarker, ViewGeometry};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("session is not ready to capture: {0:?}")]
    SessionNotReady(SessionState),
    #[error("capture thread panicked")]
    CaptureThreadPanicked,
    #[error("detection thread panicked")]
    DetectThreadPanicked,
}

/// Draw-instruction boundary: receives the complete marker set for
/// one render cycle. Markers are keyed by position for that cycle
/// only.
pub trait MarkerSink {
    fn present(&mut self, frame_index: usize, markers: &[OverlayMarker]);
}

/// Configuration for one pipeline run.
pub struct PipelineConfig {
    /// Cooperative stop flag checked by all contexts.
    pub cancelled: Arc<AtomicBool>,
    /// Layout boundary: measured geometry changes, drained by the
    /// render loop before each cycle.
    pub layout_events: Option<crossbeam_channel::Receiver<ViewGeometry>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            layout_events: None,
        }
    }
}

/// Abstracts how the capture → detect → relay → render pipeline runs.
///
/// This is a port; infrastructure provides the threaded
/// implementation. The caller's thread acts as the render context.
pub trait PipelineExecutor {
    fn execute(
        &self,
        source: Box<dyn FrameSource>,
        stage: DetectionStage,
        renderer: OverlayRenderer,
        session: &mut SessionController,
        sink: &mut dyn MarkerSink,
        config: PipelineConfig,
    ) -> Result<(), PipelineError>;
}
