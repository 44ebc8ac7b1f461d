//! The compress operation: check the input, run, classify, clean up.

use crate::classify::classify;
use crate::job::EncodeJob;
use crate::runner::{HandBrakeRunner, JobRunner};
use std::path::Path;

/// Check that the input file is still at `<dir>/<file_name>`.
///
/// Logs the path and an error when it is gone. Must be called before
/// [`Encoder::compress`].
pub fn check_exists(dir: &Path, file_name: &str) -> bool {
    let input = dir.join(file_name);

    if input.is_file() {
        return true;
    }

    tracing::debug!("{}", input.display());
    tracing::error!("Input file no longer exists");
    false
}

/// Delete an input that has been encoded.
///
/// Failure is logged and reported as `false`, never raised.
pub fn remove_input(path: &Path) -> bool {
    match std::fs::remove_file(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Could not remove {}: {}", path.display(), e);
            false
        }
    }
}

/// Runs encodes and decides whether they succeeded.
#[derive(Debug, Clone)]
pub struct Encoder<R = HandBrakeRunner> {
    runner: R,
}

impl<R: JobRunner> Encoder<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Encode `job` and remove its input if the encode verifiably completed.
    ///
    /// The verdict comes from the encoder's output alone; a non-zero exit
    /// status is logged but does not decide it. A failed removal does not
    /// turn a completed encode into a failure. Jobs whose output is their
    /// input are refused without running.
    pub fn compress(&self, job: &EncodeJob) -> bool {
        if job.input() == job.output() {
            tracing::error!(
                "Refusing to encode {} onto itself",
                job.input().display()
            );
            return false;
        }

        let result = match self.runner.run(job) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Failed to run HandBrakeCLI for {}: {}", job.name(), e);
                return false;
            }
        };

        if !result.success() {
            match result.exit_code {
                Some(code) => tracing::error!(
                    "HandBrakeCLI (compress) returned status code: {}",
                    code
                ),
                None => tracing::error!("HandBrakeCLI (compress) was terminated by a signal"),
            }
        }

        let classification = classify(&result.output);
        classification.log();

        if !classification.is_success() {
            return false;
        }

        tracing::debug!("HandBrakeCLI Completed successfully");
        remove_input(job.input());

        true
    }
}
