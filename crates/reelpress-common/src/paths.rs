//! Path utilities for detecting rips by extension and naming encoded output.

use std::path::Path;

/// Extensions of rips the encoder accepts as input.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "m2ts", "iso", "mov", "mpg", "vob",
];

/// Container extension of every encoded file.
pub const OUTPUT_EXTENSION: &str = "mkv";

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use reelpress_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("title_t00.mkv")));
/// assert!(is_video_file(Path::new("/rips/DISC.ISO")));
/// assert!(!is_video_file(Path::new("notes.txt")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// File name of the encoded output for a movie name.
///
/// # Examples
///
/// ```
/// use reelpress_common::paths::output_file_name;
///
/// assert_eq!(output_file_name("Heat (1995)"), "Heat (1995).mkv");
/// ```
pub fn output_file_name(moviename: &str) -> String {
    format!("{moviename}.{OUTPUT_EXTENSION}")
}

/// Get the list of accepted input extensions.
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}
