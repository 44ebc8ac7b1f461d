//! Reelpress-Common: Shared types and path utilities.
//!
//! - **Movie**: the read-only descriptor of a movie waiting to be encoded
//! - **Path Utilities**: video extension detection and output naming
//!
//! # Examples
//!
//! ```
//! use reelpress_common::Movie;
//! use reelpress_common::paths::is_video_file;
//! use std::path::Path;
//!
//! let movie = Movie::new("/srv/rips", "title_t00.mkv", "Heat (1995)");
//! assert_eq!(movie.input_path(), Path::new("/srv/rips/title_t00.mkv"));
//! assert_eq!(movie.output_path(), Path::new("/srv/rips/Heat (1995).mkv"));
//! assert!(is_video_file(&movie.input_path()));
//! ```

pub mod movie;
pub mod paths;

pub use movie::Movie;
