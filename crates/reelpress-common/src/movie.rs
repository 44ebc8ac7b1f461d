//! Movie descriptor handed to the encoder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::paths::output_file_name;

/// A movie waiting to be encoded.
///
/// `path` is the directory holding the rip, `filename` the name of the rip
/// inside it and `moviename` the base name the encoded file gets. The encoded
/// file is written next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Directory containing the input file.
    pub path: PathBuf,
    /// File name of the input inside `path`.
    pub filename: String,
    /// Target base name, without extension.
    pub moviename: String,
}

impl Movie {
    /// Create a new movie descriptor.
    pub fn new(
        path: impl Into<PathBuf>,
        filename: impl Into<String>,
        moviename: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            filename: filename.into(),
            moviename: moviename.into(),
        }
    }

    /// Build a descriptor from the path of an input file.
    ///
    /// The target name defaults to the file stem. Returns `None` when the path
    /// has no file name.
    pub fn from_input(input: &Path, moviename: Option<&str>) -> Option<Self> {
        let filename = input.file_name()?.to_str()?.to_string();
        let moviename = match moviename {
            Some(name) => name.to_string(),
            None => input.file_stem()?.to_str()?.to_string(),
        };
        let path = match input.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Some(Self {
            path,
            filename,
            moviename,
        })
    }

    /// `<path>/<filename>`
    pub fn input_path(&self) -> PathBuf {
        self.path.join(&self.filename)
    }

    /// `<path>/<moviename>.mkv`
    pub fn output_path(&self) -> PathBuf {
        self.path.join(output_file_name(&self.moviename))
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.moviename, self.input_path().display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let movie = Movie::new("/media/rips", "title_t01.mkv", "Alien");
        assert_eq!(movie.input_path(), PathBuf::from("/media/rips/title_t01.mkv"));
        assert_eq!(movie.output_path(), PathBuf::from("/media/rips/Alien.mkv"));
    }

    #[test]
    fn test_paths_with_whitespace() {
        let movie = Movie::new("/media/my rips", "disc one.mkv", "The Thing (1982)");
        assert_eq!(
            movie.input_path(),
            PathBuf::from("/media/my rips/disc one.mkv")
        );
        assert_eq!(
            movie.output_path(),
            PathBuf::from("/media/my rips/The Thing (1982).mkv")
        );
    }

    #[test]
    fn test_from_input_defaults_to_stem() {
        let movie = Movie::from_input(Path::new("/rips/Brazil.iso"), None).unwrap();
        assert_eq!(movie.path, PathBuf::from("/rips"));
        assert_eq!(movie.filename, "Brazil.iso");
        assert_eq!(movie.moviename, "Brazil");
    }

    #[test]
    fn test_from_input_with_name() {
        let movie = Movie::from_input(Path::new("rip.ts"), Some("Ran")).unwrap();
        assert_eq!(movie.path, PathBuf::from("."));
        assert_eq!(movie.moviename, "Ran");
        assert_eq!(movie.output_path(), PathBuf::from("./Ran.mkv"));
    }

    #[test]
    fn test_from_input_without_file_name() {
        assert!(Movie::from_input(Path::new("/"), None).is_none());
    }

    #[test]
    fn test_deserialize() {
        let movie: Movie = toml::from_str(
            r#"
            path = "/rips"
            filename = "a.mkv"
            moviename = "A"
            "#,
        )
        .unwrap();
        assert_eq!(movie, Movie::new("/rips", "a.mkv", "A"));
    }
}
