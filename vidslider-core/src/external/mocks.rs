// vidslider-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::{FfmpegProcess, FfmpegSpawner};
use crate::error::{CoreError, CoreResult};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::rc::Rc;

/// Contents of the dummy output file written by a mocked run.
pub const MOCK_OUTPUT: &[u8] = b"mock encoder output";

/// Builds an `ExitStatus` carrying the given exit code.
#[must_use]
pub fn exit_status(code: i32) -> ExitStatus {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        // Raw wait status: the exit code lives in the second byte.
        ExitStatus::from_raw(code << 8)
    }
    #[cfg(windows)]
    {
        use std::os::windows::process::ExitStatusExt;
        ExitStatus::from_raw(code as u32)
    }
}

/// Mock implementation of FfmpegProcess.
#[derive(Clone)]
pub struct MockFfmpegProcess {
    /// Events to emit when handle_events is called.
    pub events_to_emit: Vec<FfmpegEvent>,
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
    kills: Rc<Cell<usize>>,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        for event in self.events_to_emit.drain(..) {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }

    fn kill(&mut self) -> CoreResult<()> {
        self.kills.set(self.kills.get() + 1);
        Ok(())
    }
}

/// A queued outcome for the next spawn call.
struct MockOutcome {
    result: CoreResult<MockFfmpegProcess>,
    create_dummy_output: bool,
}

/// Mock implementation of FfmpegSpawner answering spawns in FIFO order.
#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    outcomes: Rc<RefCell<VecDeque<MockOutcome>>>,
    received_calls: Rc<RefCell<Vec<Vec<String>>>>,
    kills: Rc<Cell<usize>>,
}

impl MockFfmpegSpawner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a run that exits with `exit_code` after emitting `events`.
    ///
    /// With `create_dummy_output`, the last command argument is treated as the
    /// output path and a small placeholder file is written there, as a real
    /// run would.
    pub fn add_exit_expectation(
        &self,
        exit_code: i32,
        events: Vec<FfmpegEvent>,
        create_dummy_output: bool,
    ) {
        self.outcomes.borrow_mut().push_back(MockOutcome {
            result: Ok(MockFfmpegProcess {
                events_to_emit: events,
                exit_status: exit_status(exit_code),
                kills: Rc::clone(&self.kills),
            }),
            create_dummy_output,
        });
    }

    pub fn add_success_expectation(&self, events: Vec<FfmpegEvent>, create_dummy_output: bool) {
        self.add_exit_expectation(0, events, create_dummy_output);
    }

    pub fn add_spawn_error_expectation(&self, error: CoreError) {
        self.outcomes.borrow_mut().push_back(MockOutcome {
            result: Err(error),
            create_dummy_output: false,
        });
    }

    /// Arguments of every spawn call received so far.
    #[must_use]
    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }

    /// Number of processes killed so far.
    #[must_use]
    pub fn get_kill_count(&self) -> usize {
        self.kills.get()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<String> = cmd
            .get_args()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        self.received_calls.borrow_mut().push(args.clone());

        let Some(outcome) = self.outcomes.borrow_mut().pop_front() else {
            log::error!("MockFfmpegSpawner: No expectation queued for command args: {:?}", args);
            panic!("MockFfmpegSpawner: No expectation queued for command args: {args:?}");
        };

        if outcome.create_dummy_output && outcome.result.is_ok() {
            if let Some(output_path) = args.last().map(PathBuf::from) {
                if let Some(parent) = output_path.parent() {
                    if let Err(e) = std::fs::create_dir_all(parent) {
                        log::error!("MockFfmpegSpawner failed to create parent dir {:?}: {}", parent, e);
                    }
                }
                match std::fs::write(&output_path, MOCK_OUTPUT) {
                    Ok(()) => log::info!("MockFfmpegSpawner created dummy output file: {:?}", output_path),
                    Err(e) => log::error!("MockFfmpegSpawner failed to create dummy output file {:?}: {}", output_path, e),
                }
            }
        }

        outcome.result
    }
}
