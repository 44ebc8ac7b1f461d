//! Sequential processing of a queue of movies.
//!
//! A queue file lists movies as `[[movie]]` tables:
//!
//! ```toml
//! [[movie]]
//! path = "/srv/rips"
//! filename = "title_t00.mkv"
//! moviename = "Heat (1995)"
//! ```

use crate::config::HandBrakeConfig;
use crate::encode::encode_movie;
use anyhow::{Context, Result};
use reelpress_av::{Encoder, JobRunner};
use reelpress_common::Movie;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct QueueFile {
    #[serde(default, rename = "movie")]
    movies: Vec<Movie>,
}

/// Load the movies of a queue file, in file order.
pub fn load_queue(path: &Path) -> Result<Vec<Movie>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read queue file: {:?}", path))?;

    let queue: QueueFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse queue file: {:?}", path))?;

    Ok(queue.movies)
}

/// Names of the movies that did and did not encode.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueueSummary {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

impl QueueSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Encode every movie one after another. A failure does not stop the queue.
pub fn run_queue<R: JobRunner>(
    encoder: &Encoder<R>,
    settings: &HandBrakeConfig,
    movies: &[Movie],
) -> QueueSummary {
    let mut summary = QueueSummary::default();

    for (i, movie) in movies.iter().enumerate() {
        tracing::info!("[{}/{}] {}", i + 1, movies.len(), movie);

        if encode_movie(encoder, settings, movie) {
            summary.succeeded.push(movie.moviename.clone());
        } else {
            tracing::warn!("Encoding {} failed", movie.moviename);
            summary.failed.push(movie.moviename.clone());
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelpress_av::{EncodeJob, ExecutionResult};
    use std::fs;

    /// Completes every job except those whose name starts with "Bad".
    struct Picky;

    impl JobRunner for Picky {
        fn run(&self, job: &EncodeJob) -> reelpress_av::Result<ExecutionResult> {
            let output = if job.name().starts_with("Bad") {
                "ERROR: invalid stream\n"
            } else {
                "average encoding speed for job is 12 fps\nEncode done!\n"
            };
            Ok(ExecutionResult::new(Some(0), output))
        }
    }

    #[test]
    fn test_load_queue() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queue.toml");
        fs::write(
            &path,
            r#"
            [[movie]]
            path = "/rips"
            filename = "a.mkv"
            moviename = "A"

            [[movie]]
            path = "/rips/other dir"
            filename = "b c.mkv"
            moviename = "B C"
            "#,
        )
        .unwrap();

        let movies = load_queue(&path).unwrap();
        assert_eq!(
            movies,
            vec![
                Movie::new("/rips", "a.mkv", "A"),
                Movie::new("/rips/other dir", "b c.mkv", "B C"),
            ]
        );
    }

    #[test]
    fn test_load_empty_queue() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queue.toml");
        fs::write(&path, "").unwrap();
        assert!(load_queue(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_queue_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queue.toml");
        fs::write(&path, "[[movie]]\npath = \"/rips\"\n").unwrap();
        assert!(load_queue(&path).is_err());
    }

    #[test]
    fn test_run_queue_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["good.mkv", "bad.mkv"] {
            fs::write(dir.path().join(name), b"rip").unwrap();
        }
        let movies = vec![
            Movie::new(dir.path(), "bad.mkv", "Bad Movie"),
            Movie::new(dir.path(), "missing.mkv", "Missing"),
            Movie::new(dir.path(), "good.mkv", "Good Movie"),
        ];

        let summary = run_queue(&Encoder::new(Picky), &HandBrakeConfig::default(), &movies);

        assert_eq!(summary.succeeded, vec!["Good Movie"]);
        assert_eq!(summary.failed, vec!["Bad Movie", "Missing"]);
        assert!(!summary.all_succeeded());
        assert!(dir.path().join("bad.mkv").exists());
        assert!(!dir.path().join("good.mkv").exists());
    }
}
