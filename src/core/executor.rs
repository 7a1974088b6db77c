//! Sequential execution of generated build commands.
//!
//! Generation finishes before the first subprocess starts, so step numbers
//! always reflect generation order regardless of the failure policy. Step
//! numbers are assigned from the loop index instead of any shared counter.

use serde::Serialize;

use crate::log_status;
use crate::utils::command::{execute_shell_command, CapturedOutput};

/// Result of one executed (or skipped) build command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutcome {
    /// 1-based position in the generated command list.
    pub step: usize,
    pub command: String,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(flatten)]
    pub output: CapturedOutput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Success,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

#[derive(Debug, Serialize)]
pub struct RunResult {
    pub steps: Vec<StepOutcome>,
    pub summary: RunSummary,
}

impl RunResult {
    pub fn all_succeeded(&self) -> bool {
        self.summary.failed == 0 && self.summary.skipped == 0
    }
}

/// Run generated commands in order, one subprocess at a time.
///
/// By default the first failure short-circuits and the remaining commands are
/// recorded as skipped. With `keep_going` every command runs and failures are
/// collected. Either way the outcome list covers all input commands.
pub fn run_commands(commands: &[String], keep_going: bool) -> RunResult {
    let total = commands.len();
    let mut steps = Vec::with_capacity(total);
    let mut succeeded = 0usize;
    let mut failed = 0usize;
    let mut halted = false;

    for (index, command) in commands.iter().enumerate() {
        let step = index + 1;

        if halted {
            steps.push(StepOutcome {
                step,
                command: command.clone(),
                status: StepStatus::Skipped,
                exit_code: None,
                output: CapturedOutput::default(),
            });
            continue;
        }

        log_status!("run", "[{}/{}] {}", step, total, command);
        let output = execute_shell_command(command);

        if output.success {
            succeeded += 1;
        } else {
            failed += 1;
            log_status!("run", "[{}/{}] failed (exit code {})", step, total, output.exit_code);
            if !keep_going {
                halted = true;
            }
        }

        steps.push(StepOutcome {
            step,
            command: command.clone(),
            status: if output.success {
                StepStatus::Success
            } else {
                StepStatus::Failed
            },
            exit_code: Some(output.exit_code),
            output: CapturedOutput::new(output.stdout, output.stderr),
        });
    }

    let skipped = total - succeeded - failed;
    RunResult {
        steps,
        summary: RunSummary {
            total,
            succeeded,
            failed,
            skipped,
        },
    }
}
