//! # reelpress-av
//!
//! Supervision of HandBrakeCLI encodes.
//!
//! This crate provides functionality for:
//! - Locating HandBrakeCLI and `nice` ([`tools`])
//! - Describing one encode ([`EncodeJob`])
//! - Running the encoder at reduced priority with stdout and stderr merged
//!   ([`HandBrakeRunner`])
//! - Deciding from the encoder's log whether the encode really finished
//!   ([`classify`])
//! - Removing the input once it has been encoded ([`Encoder::compress`])
//!
//! ## Example
//!
//! ```no_run
//! use reelpress_av::{check_exists, EncodeJob, Encoder, HandBrakeRunner};
//! use reelpress_common::Movie;
//!
//! let movie = Movie::new("/srv/rips", "title_t00.mkv", "Heat (1995)");
//! let encoder = Encoder::new(HandBrakeRunner::discover(None, None)?);
//!
//! if check_exists(&movie.path, &movie.filename) {
//!     let args = vec!["--preset".to_string(), "Fast 1080p30".to_string()];
//!     let job = EncodeJob::for_movie(&movie, 15, &args);
//!     println!("encoded: {}", encoder.compress(&job));
//! }
//! # Ok::<(), reelpress_av::Error>(())
//! ```

pub mod classify;
mod encoder;
mod error;
mod job;
pub mod runner;
pub mod tools;

// Re-exports
pub use classify::{Classification, Verdict};
pub use encoder::{check_exists, remove_input, Encoder};
pub use error::{Error, Result};
pub use job::EncodeJob;
pub use runner::{ExecutionResult, HandBrakeRunner, JobRunner};
pub use tools::{check_tool, check_tools, require_tool, ToolInfo};
