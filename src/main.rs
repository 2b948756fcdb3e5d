//! Headless render-loop driver.
//!
//! Plays the demo build script against a [`dockyard::stage::Stage`] at the
//! configured frame rate and logs what a renderer would draw.
//!
//! Usage: `dockyard [options.toml]`

use std::path::Path;

use dockyard::options::Options;
use dockyard::stage::{Script, Stage, StageFrame, UiSignal};
use dockyard::status::ContainerStatus;
use dockyard::util::frame_timing::FrameTiming;
use dockyard::DockyardError;
use web_time::{Duration, Instant};

/// Mock build output scrolled onto the doors.
const BUILD_LOG: &[&str] = &[
    "$ docker build -t dockyard-demo .",
    "[+] Building 0.0s (0/9)",
    " => [internal] load build definition from Dockerfile",
    " => [internal] load .dockerignore",
    " => [internal] load metadata for docker.io/library/rust:1",
    " => [1/5] FROM docker.io/library/rust:1",
    " => [2/5] WORKDIR /app",
    " => [3/5] COPY Cargo.toml Cargo.lock ./",
    " => [4/5] COPY src ./src",
    " => [5/5] RUN cargo build --release",
    " => exporting to image",
    " => => naming to docker.io/library/dockyard-demo",
];

/// Seconds after the last script step to keep ticking so exits finish.
const TAIL_SECONDS: f32 = 2.5;

fn main() -> Result<(), DockyardError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };
    let driver = options.driver.clone();

    let start = Instant::now();
    let mut timing = FrameTiming::starting_at(driver.target_fps, start);
    let mut stage = Stage::new(&options);
    let mut script = Script::demo(&driver);
    let end = script.length() + Duration::from_secs_f32(TAIL_SECONDS);
    let line_interval = driver.terminal_line_interval.max(0.05);
    let mut build_started: Option<Instant> = None;

    loop {
        let now = Instant::now();
        if !timing.should_render_at(now) {
            std::thread::sleep(timing.remaining_at(now));
            continue;
        }
        let elapsed = now.saturating_duration_since(start);

        for signal in script.due(elapsed) {
            if signal == UiSignal::StartBuild {
                build_started = Some(now);
            }
            stage.signal(signal, now);
        }

        if stage.status() == ContainerStatus::Building {
            if let Some(began) = build_started {
                feed_build(
                    &mut stage,
                    now.saturating_duration_since(began),
                    driver.build_seconds,
                    line_interval,
                );
            }
        } else if stage.status() == ContainerStatus::Running {
            stage.set_status_progress(1.0);
        }

        let frame = stage.tick(now);
        report(&frame, timing.frame_count(), driver.log_every_frames);
        timing.end_frame_at(now);

        if script.is_finished() && elapsed >= end {
            break;
        }
    }

    log::info!(
        "finished after {} frames ({:.1} fps)",
        timing.frame_count(),
        timing.fps()
    );
    Ok(())
}

/// Drive build progress and scroll mock log lines onto the doors.
fn feed_build(
    stage: &mut Stage,
    since_start: Duration,
    build_seconds: f32,
    line_interval: f32,
) {
    let secs = since_start.as_secs_f32();
    let progress = if build_seconds > 0.0 {
        secs / build_seconds
    } else {
        1.0
    };
    stage.set_status_progress(progress);

    let wanted = ((secs / line_interval) as usize + 1).min(BUILD_LOG.len());
    if stage.terminal_lines().len() < wanted {
        stage.set_terminal_lines(
            BUILD_LOG[..wanted].iter().map(|line| (*line).to_owned()).collect(),
        );
    }
}

fn report(frame: &StageFrame, frame_index: u64, every: u64) {
    if let Some(done) = frame.image_crate.completed {
        log::info!("crate finished {} -> {:?}", done.completed, done.next);
    }
    if let Some(done) = frame.doors.completed {
        log::info!("doors finished {} -> {:?}", done.completed, done.next);
    }
    if let Some(done) = frame.camera.completed {
        log::info!("camera landed on {}", done.completed);
    }
    if every == 0 || frame_index % every != 0 {
        return;
    }
    let pose = frame.image_crate.pose;
    log::debug!(
        "[{}] crate {} p={:.2} pos=({:.2}, {:.2}, {:.2}) scale={:.2} | doors {} L={:.1}° R={:.1}° a={:.2} | camera {}",
        frame.status,
        frame.image_crate.phase,
        frame.image_crate.progress,
        pose.position.x,
        pose.position.y,
        pose.position.z,
        pose.scale,
        frame.doors.phase,
        frame.doors.pose.left_rotation.to_degrees(),
        frame.doors.pose.right_rotation.to_degrees(),
        frame.doors.pose.opacity,
        frame.camera.phase,
    );
}
