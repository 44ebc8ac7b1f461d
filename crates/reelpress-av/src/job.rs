//! Job descriptor for a single HandBrakeCLI encode.

use reelpress_common::Movie;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Everything needed to run one encode. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeJob {
    input: PathBuf,
    output: PathBuf,
    name: String,
    priority: i32,
    args: Vec<String>,
}

impl EncodeJob {
    /// Create a job from explicit paths.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        name: impl Into<String>,
        priority: i32,
        args: Vec<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            name: name.into(),
            priority,
            args,
        }
    }

    /// Create a job encoding `movie` into `<path>/<moviename>.mkv`.
    pub fn for_movie(movie: &Movie, priority: i32, args: &[String]) -> Self {
        Self::new(
            movie.input_path(),
            movie.output_path(),
            movie.moviename.clone(),
            priority,
            args.to_vec(),
        )
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Niceness the encoder runs with.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Extra encoder arguments, passed through verbatim.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments handed to HandBrakeCLI, in order.
    ///
    /// Input and output are single arguments each, so whitespace in either
    /// path needs no quoting.
    pub fn handbrake_args(&self) -> Vec<OsString> {
        let mut out: Vec<OsString> = Vec::with_capacity(self.args.len() + 5);
        out.push("--verbose".into());
        out.push("-i".into());
        out.push(self.input.clone().into_os_string());
        out.push("-o".into());
        out.push(self.output.clone().into_os_string());
        out.extend(self.args.iter().map(OsString::from));
        out
    }

    /// Shell-style rendering of the full command line, for logs only.
    pub fn command_line(&self, handbrake: &Path) -> String {
        let mut line = format!(
            "nice -n {} {} --verbose -i \"{}\" -o \"{}\"",
            self.priority,
            handbrake.display(),
            self.input.display(),
            self.output.display()
        );
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for EncodeJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.input.display(),
            self.output.display()
        )
    }
}
