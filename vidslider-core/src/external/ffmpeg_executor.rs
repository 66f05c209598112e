// ============================================================================
// vidslider-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Abstraction
//
// This module provides abstractions for spawning and interacting with FFmpeg
// processes. It defines traits and implementations for executing FFmpeg
// commands and handling their events and lifecycle.
//
// KEY COMPONENTS:
// - FfmpegProcess: Trait representing an active FFmpeg process
// - FfmpegSpawner: Trait for creating new FFmpeg processes
// - SidecarSpawner: Concrete implementation using ffmpeg-sidecar
// - run_to_completion: Drives a process, captures its output, checks status
// - run_with_deadline: Same, killing the process once a time limit passes
//
// AI-ASSISTANT-INFO: FFmpeg process management and execution abstraction

use crate::error::{
    CoreError, CoreResult, command_failed_error, command_start_error, command_wait_error,
};
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::process::ExitStatus;
use std::time::{Duration, Instant};

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;

    /// Terminates the process.
    fn kill(&mut self) -> CoreResult<()>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.0.iter().map_err(|e| {
            log::error!("Failed to get ffmpeg event iterator: {}", e);
            command_wait_error("ffmpeg (sidecar - get iter)", std::io::Error::other(e.to_string()))
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_wait_error("ffmpeg (sidecar)", e))
    }

    fn kill(&mut self) -> CoreResult<()> {
        self.0
            .kill()
            .map_err(|e| command_wait_error("ffmpeg (sidecar - kill)", e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg (sidecar)", e))
    }
}

// --- Running to completion ---

/// Drains all events of `process`, then checks its exit status.
///
/// Log and error lines are captured and attached to the error when the
/// process exits abnormally. `on_progress` receives the frame number of every
/// progress report.
///
/// # Errors
///
/// Returns `CoreError::EncoderExecutionFailed` on a non-zero exit, or the
/// error of the process abstraction if events or status cannot be read.
pub fn run_to_completion<P, F>(process: P, on_progress: F) -> CoreResult<()>
where
    P: FfmpegProcess,
    F: FnMut(u32),
{
    drive(process, None, on_progress)
}

/// [`run_to_completion`] with a time limit.
///
/// The limit is checked whenever the process reports an event. Once it has
/// passed, the process is killed and the run fails with
/// `EncoderExecutionFailed` without an exit code.
///
/// # Errors
///
/// See [`run_to_completion`].
pub fn run_with_deadline<P, F>(process: P, limit: Duration, on_progress: F) -> CoreResult<()>
where
    P: FfmpegProcess,
    F: FnMut(u32),
{
    drive(process, Some(limit), on_progress)
}

fn drive<P, F>(mut process: P, limit: Option<Duration>, mut on_progress: F) -> CoreResult<()>
where
    P: FfmpegProcess,
    F: FnMut(u32),
{
    let start = Instant::now();
    let mut captured = String::new();

    let drained = process.handle_events(|event| {
        if let Some(limit) = limit {
            if start.elapsed() >= limit {
                return Err(CoreError::EncoderExecutionFailed {
                    exit_code: None,
                    output: format!("timed out after {}s", limit.as_secs_f64()),
                });
            }
        }
        match event {
            FfmpegEvent::Progress(progress) => on_progress(progress.frame),
            FfmpegEvent::Log(_, line) | FfmpegEvent::Error(line) => {
                log::trace!("ffmpeg: {}", line);
                captured.push_str(&line);
                captured.push('\n');
            }
            _ => {}
        }
        Ok(())
    });

    if let Err(e) = drained {
        if matches!(e, CoreError::EncoderExecutionFailed { exit_code: None, .. }) {
            log::error!("ffmpeg {}, killing it", e);
            if let Err(kill_err) = process.kill() {
                log::warn!("Failed to kill ffmpeg: {}", kill_err);
            }
            let _ = process.wait();
        }
        return Err(e);
    }

    let status = process.wait()?;
    if !status.success() {
        log::error!("ffmpeg exited with {}", status);
        return Err(command_failed_error(status, captured.trim_end()));
    }
    Ok(())
}
