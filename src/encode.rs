//! Encoding a movie with the configured HandBrake settings.

use crate::config::HandBrakeConfig;
use crate::stopwatch::Stopwatch;
use reelpress_av::{check_exists, EncodeJob, Encoder, JobRunner};
use reelpress_common::Movie;

/// Encode one movie, timing the run.
///
/// Returns `false` without launching anything when the input is missing.
pub fn encode_movie<R: JobRunner>(
    encoder: &Encoder<R>,
    settings: &HandBrakeConfig,
    movie: &Movie,
) -> bool {
    if !check_exists(&movie.path, &movie.filename) {
        return false;
    }

    let job = EncodeJob::for_movie(movie, settings.nice, &settings.args);
    tracing::info!("Encoding {}", job);

    let _watch = Stopwatch::start(format!("Encoding {}", movie.moviename));
    encoder.compress(&job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelpress_av::{ExecutionResult, Result};
    use std::cell::RefCell;
    use std::fs;

    #[derive(Default)]
    struct Recorder {
        jobs: RefCell<Vec<EncodeJob>>,
    }

    impl JobRunner for Recorder {
        fn run(&self, job: &EncodeJob) -> Result<ExecutionResult> {
            self.jobs.borrow_mut().push(job.clone());
            Ok(ExecutionResult::new(
                Some(0),
                "average encoding speed for job is 42 fps\nEncode done!\n",
            ))
        }
    }

    #[test]
    fn test_missing_input_launches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let movie = Movie::new(dir.path(), "missing.mkv", "Missing");
        let encoder = Encoder::new(Recorder::default());

        assert!(!encode_movie(&encoder, &HandBrakeConfig::default(), &movie));
        assert!(encoder.runner().jobs.borrow().is_empty());
    }

    #[test]
    fn test_job_uses_settings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("title_t00.mkv"), b"rip").unwrap();
        let movie = Movie::new(dir.path(), "title_t00.mkv", "Ran");
        let settings = HandBrakeConfig {
            nice: 5,
            args: vec!["-e".to_string(), "x265".to_string()],
        };
        let encoder = Encoder::new(Recorder::default());

        assert!(encode_movie(&encoder, &settings, &movie));

        let jobs = encoder.runner().jobs.borrow();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].priority(), 5);
        assert_eq!(jobs[0].args(), settings.args.as_slice());
        assert_eq!(jobs[0].output(), dir.path().join("Ran.mkv"));
        assert!(!dir.path().join("title_t00.mkv").exists());
    }
}
