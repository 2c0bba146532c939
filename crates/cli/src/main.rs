use std::process;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use facelens_core::detection::domain::detection_stage::DetectionStage;
use facelens_core::detection::domain::face_detector::DetectorOptions;
use facelens_core::detection::infrastructure::synthetic_detector::SyntheticFaceDetector;
use facelens_core::overlay::domain::overlay_renderer::OverlayRenderer;
use facelens_core::overlay::domain::scale_policy::{Platform, ScalePolicy};
use facelens_core::pipeline::infrastructure::threaded_pipeline_executor::ThreadedPipelineExecutor;
use facelens_core::pipeline::pipeline_executor::{MarkerSink, PipelineConfig, PipelineExecutor};
use facelens_core::session::domain::camera_device::{CameraDevice, CameraFacing};
use facelens_core::session::domain::permission::PermissionStatus;
use facelens_core::session::domain::session_controller::{SessionController, SessionState};
use facelens_core::session::infrastructure::static_devices::StaticDeviceEnumerator;
use facelens_core::session::infrastructure::static_permission::StaticPermissionGate;
use facelens_core::session::infrastructure::synthetic_camera::SyntheticCamera;
use facelens_core::shared::geometry::{OverlayMarker, ViewGeometry};

#[derive(Clone, Copy, ValueEnum)]
enum PlatformArg {
    Ios,
    Android,
}

#[derive(Clone, Copy, ValueEnum)]
enum FacingArg {
    Front,
    Back,
}

/// Viewfinder face-marker pipeline with synthetic camera and detector.
#[derive(Parser)]
#[command(name = "facelens")]
struct Cli {
    /// Coordinate policy of the target platform.
    #[arg(long, value_enum, default_value = "android")]
    platform: PlatformArg,

    /// Which camera to start on.
    #[arg(long, value_enum, default_value = "back")]
    facing: FacingArg,

    /// Number of synthetic frames to capture.
    #[arg(long, default_value = "60")]
    frames: usize,

    /// Interval between synthetic frames, in milliseconds.
    #[arg(long, default_value = "33")]
    frame_interval_ms: u64,

    /// Rendering surface width, in view pixels.
    #[arg(long, default_value = "1080")]
    view_width: f64,

    /// Rendering surface height, in view pixels.
    #[arg(long, default_value = "1920")]
    view_height: f64,

    /// Simulate a denied camera permission.
    #[arg(long)]
    deny_permission: bool,

    /// Inject a detector fault on every Nth frame.
    #[arg(long)]
    fail_every: Option<usize>,

    /// Enumerate no front camera.
    #[arg(long)]
    no_front_device: bool,

    /// Enumerate no back camera.
    #[arg(long)]
    no_back_device: bool,
}

/// Prints one line per marker, one block per render cycle.
struct StdoutMarkerSink;

impl MarkerSink for StdoutMarkerSink {
    fn present(&mut self, frame_index: usize, markers: &[OverlayMarker]) {
        if markers.is_empty() {
            println!("frame {frame_index}: no markers");
            return;
        }
        for (i, m) in markers.iter().enumerate() {
            println!(
                "frame {frame_index}: marker {i} left={:.1} top={:.1} width={:.1} height={:.1}",
                m.left, m.top, m.width, m.height
            );
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut session = SessionController::new(Box::new(StaticDeviceEnumerator::new(devices(&cli))));
    if matches!(cli.facing, FacingArg::Front) {
        session.toggle_facing();
    }
    session.set_geometry(ViewGeometry::new(cli.view_width, cli.view_height));

    let status = if cli.deny_permission {
        PermissionStatus::Denied
    } else {
        PermissionStatus::Granted
    };
    session.request_permission(&mut StaticPermissionGate::new(status));

    match session.state() {
        SessionState::AwaitingPermission | SessionState::PermissionDenied => {
            println!("Please grant camera permission");
            return Ok(());
        }
        SessionState::WaitingForDevice => {
            println!("Loading camera...");
            return Ok(());
        }
        SessionState::Ready(device) => {
            log::info!("camera ready: {} ({:?})", device.id, device.facing);
        }
    }

    let source = Box::new(SyntheticCamera::new(
        cli.frames,
        Duration::from_millis(cli.frame_interval_ms),
    ));
    let stage = DetectionStage::new(Box::new(SyntheticFaceDetector::new(
        DetectorOptions::default(),
        cli.fail_every,
    )));
    let renderer = OverlayRenderer::new(ScalePolicy::for_platform(platform(&cli)));

    let executor = ThreadedPipelineExecutor::new();
    executor.execute(
        source,
        stage,
        renderer,
        &mut session,
        &mut StdoutMarkerSink,
        PipelineConfig::default(),
    )?;

    Ok(())
}

fn platform(cli: &Cli) -> Platform {
    match cli.platform {
        PlatformArg::Ios => Platform::Ios,
        PlatformArg::Android => Platform::Android,
    }
}

fn devices(cli: &Cli) -> Vec<CameraDevice> {
    let mut devices = Vec::new();
    if !cli.no_back_device {
        devices.push(CameraDevice {
            id: "back-wide".into(),
            facing: CameraFacing::Back,
        });
    }
    if !cli.no_front_device {
        devices.push(CameraDevice {
            id: "front-true-depth".into(),
            facing: CameraFacing::Front,
        });
    }
    devices
}
