use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::TrySendError;

use crate::detection::domain::detection_stage::DetectionStage;
use crate::overlay::domain::overlay_renderer::OverlayRenderer;
use crate::pipeline::pipeline_executor::{
    MarkerSink, PipelineConfig, PipelineError, PipelineExecutor,
};
use crate::session::domain::frame_source::FrameSource;
use crate::session::domain::session_controller::{SessionController, SessionState};
use crate::shared::frame::Frame;
use crate::shared::geometry::FaceResult;

use super::result_relay::{result_relay, RelayRecvError, RelaySender};

/// How long the render loop blocks on the relay before re-checking
/// the cancel flag.
const RENDER_POLL: Duration = Duration::from_millis(50);

/// Runs the pipeline across its two execution contexts.
///
/// Layout: `capture thread → [rendezvous] → detect thread → [relay] →
/// render loop (caller thread)`.
///
/// The frame hand-off is a zero-capacity rendezvous: a frame is
/// accepted only while the detection thread is waiting for one, so a
/// frame arriving mid-detection is dropped rather than queued. The
/// relay coalesces results the same way on the render side. Together
/// those two points are the whole admission-control story; nothing
/// ever blocks capture.
pub struct ThreadedPipelineExecutor;

impl ThreadedPipelineExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreadedPipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineExecutor for ThreadedPipelineExecutor {
    fn execute(
        &self,
        source: Box<dyn FrameSource>,
        stage: DetectionStage,
        renderer: OverlayRenderer,
        session: &mut SessionController,
        sink: &mut dyn MarkerSink,
        config: PipelineConfig,
    ) -> Result<(), PipelineError> {
        match session.state() {
            SessionState::Ready(device) => {
                log::debug!("starting viewfinder pipeline on device {}", device.id);
            }
            gated => return Err(PipelineError::SessionNotReady(gated)),
        }

        let (frame_tx, frame_rx) = crossbeam_channel::bounded::<Frame>(0);
        let (relay_tx, relay_rx) = result_relay::<FaceResult>();

        let dropped = Arc::new(AtomicUsize::new(0));
        let captured = Arc::new(AtomicUsize::new(0));

        let capture_handle =
            spawn_capture(source, frame_tx, config.cancelled.clone(), captured.clone(), dropped.clone());
        let detect_handle = spawn_detect(stage, frame_rx, relay_tx, config.cancelled.clone());

        run_render_loop(&relay_rx, &renderer, session, sink, &config);

        let result = join_threads(capture_handle, detect_handle);

        log::debug!(
            "viewfinder pipeline finished: {} frames captured, {} dropped at hand-off, {} results coalesced",
            captured.load(Ordering::Relaxed),
            dropped.load(Ordering::Relaxed),
            relay_rx.replaced(),
        );

        result
    }
}

fn spawn_capture(
    mut source: Box<dyn FrameSource>,
    frame_tx: crossbeam_channel::Sender<Frame>,
    cancelled: Arc<std::sync::atomic::AtomicBool>,
    captured: Arc<AtomicUsize>,
    dropped: Arc<AtomicUsize>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while let Some(frame) = source.next_frame() {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            captured.fetch_add(1, Ordering::Relaxed);
            match frame_tx.try_send(frame) {
                Ok(()) => {}
                Err(TrySendError::Full(frame)) => {
                    // detection is still busy with an earlier frame
                    dropped.fetch_add(1, Ordering::Relaxed);
                    log::trace!("dropped frame {} at detection hand-off", frame.index());
                }
                Err(TrySendError::Disconnected(_)) => break,
            }
        }
    })
}

fn spawn_detect(
    mut stage: DetectionStage,
    frame_rx: crossbeam_channel::Receiver<Frame>,
    relay_tx: RelaySender<FaceResult>,
    cancelled: Arc<std::sync::atomic::AtomicBool>,
) -> thread::JoinHandle<DetectionStage> {
    thread::spawn(move || {
        for frame in frame_rx {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            let result = stage.process(&frame);
            relay_tx.publish(result);
            // frame dropped here: never retained past one call
        }
        stage
    })
}

fn run_render_loop(
    relay_rx: &super::result_relay::RelayReceiver<FaceResult>,
    renderer: &OverlayRenderer,
    session: &mut SessionController,
    sink: &mut dyn MarkerSink,
    config: &PipelineConfig,
) {
    loop {
        if config.cancelled.load(Ordering::Relaxed) {
            break;
        }
        match relay_rx.recv_timeout(RENDER_POLL) {
            Ok(result) => {
                drain_layout_events(session, config);
                let markers = renderer.render(&result, session.geometry(), session.facing());
                sink.present(result.frame_index, &markers);
            }
            Err(RelayRecvError::Timeout) => {
                drain_layout_events(session, config);
            }
            Err(RelayRecvError::Disconnected) => break,
        }
    }
}

/// Applies every pending layout measurement before rendering so a
/// cycle never mixes a new result with geometry it has already
/// superseded.
fn drain_layout_events(session: &mut SessionController, config: &PipelineConfig) {
    if let Some(ref layout_rx) = config.layout_events {
        while let Ok(geometry) = layout_rx.try_recv() {
            session.set_geometry(geometry);
        }
    }
}

fn join_threads(
    capture_handle: thread::JoinHandle<()>,
    detect_handle: thread::JoinHandle<DetectionStage>,
) -> Result<(), PipelineError> {
    let capture = capture_handle
        .join()
        .map_err(|_| PipelineError::CaptureThreadPanicked);
    let detect = detect_handle
        .join()
        .map_err(|_| PipelineError::DetectThreadPanicked);
    capture?;
    detect.map(|_| ())
}
