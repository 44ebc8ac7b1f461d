//! Classification of HandBrakeCLI output.
//!
//! HandBrakeCLI has no machine readable completion report, so the verbose log
//! it writes is used instead. An encode counts as complete only when both
//! end-of-job markers were printed and no fatal error line came before them.
//!
//! [`classify`] is pure: it returns the verdict together with the lines that
//! should be echoed, and [`Classification::log`] does the logging.

/// Per-task progress heartbeat. Never echoed.
pub const PROGRESS_MARKER: &str = "Encoding: task";

/// End-of-job speed summary.
pub const JOB_SPEED_MARKER: &str = "average encoding speed for job";

/// Final line of a finished encode.
pub const DONE_MARKER: &str = "Encode done!";

/// Marks an error line.
pub const ERROR_MARKER: &str = "ERROR";

/// Error lines containing this are not fatal.
pub const ERROR_EXEMPTION: &str = "opening";

/// Completion markers needed for a successful verdict.
pub const REQUIRED_CHECKS: u32 = 2;

/// Outcome of scanning an encoder log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    /// Both completion markers seen and no fatal error.
    Complete,
    /// Scanning stopped at this error line.
    Fatal(&'a str),
    /// Fewer than [`REQUIRED_CHECKS`] markers seen.
    Incomplete,
    /// The encoder printed nothing.
    NoOutput,
}

/// Verdict plus the diagnostics gathered while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub verdict: Verdict<'a>,
    /// Completion markers counted before scanning ended.
    pub checks: u32,
    /// Trimmed lines to forward to the debug log, in order.
    pub echoed: Vec<&'a str>,
}

impl Classification<'_> {
    /// Whether the encode verifiably finished.
    pub fn is_success(&self) -> bool {
        self.verdict == Verdict::Complete
    }

    /// Emit the echoed lines and any fatal error.
    pub fn log(&self) {
        for line in &self.echoed {
            tracing::debug!(target: "handbrake", "{}", line);
        }

        if let Verdict::Fatal(line) = self.verdict {
            tracing::error!(target: "handbrake", "HandBrakeCLI encountered the following error: ");
            tracing::error!(target: "handbrake", "{}", line);
        }
    }
}

/// Scan HandBrakeCLI output and decide whether the encode completed.
///
/// Each line is handled in order: lines without [`PROGRESS_MARKER`] are
/// echoed, [`JOB_SPEED_MARKER`] and [`DONE_MARKER`] each add a check, and a
/// line containing [`ERROR_MARKER`] but not [`ERROR_EXEMPTION`] ends the scan
/// with [`Verdict::Fatal`].
///
/// An `ERROR` line mentioning `opening` is neither fatal nor a success marker
/// and simply falls through.
///
/// # Example
///
/// ```
/// use reelpress_av::classify::{classify, Verdict};
///
/// let log = "Encoding: task 1 of 1, 99.9 %\n\
///            average encoding speed for job is 30.000000 fps\n\
///            Encode done!\n";
/// let result = classify(log);
/// assert_eq!(result.verdict, Verdict::Complete);
/// assert_eq!(result.echoed.len(), 2);
/// ```
pub fn classify(output: &str) -> Classification<'_> {
    let mut checks = 0;
    let mut echoed = Vec::new();

    if output.is_empty() {
        return Classification {
            verdict: Verdict::NoOutput,
            checks,
            echoed,
        };
    }

    for line in output.lines() {
        if !line.contains(PROGRESS_MARKER) {
            echoed.push(line.trim());
        }

        if line.contains(JOB_SPEED_MARKER) {
            checks += 1;
        }

        if line.contains(DONE_MARKER) {
            checks += 1;
        }

        if line.contains(ERROR_MARKER) && !line.contains(ERROR_EXEMPTION) {
            return Classification {
                verdict: Verdict::Fatal(line),
                checks,
                echoed,
            };
        }
    }

    let verdict = if checks >= REQUIRED_CHECKS {
        Verdict::Complete
    } else {
        Verdict::Incomplete
    };

    Classification {
        verdict,
        checks,
        echoed,
    }
}
