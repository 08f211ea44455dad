//! Path selection backends for the command line.
//!
//! The backend is picked once at startup ([`SelectorBackend`]) and then only
//! used through the core's [`PathSelector`] trait.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use scansurf_core::{DirRequest, FileRequest, PathSelector};

/// Which selection backend satisfies the path-selection capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SelectorBackend {
    /// Paths come from command-line arguments.
    #[default]
    Args,
    /// Paths are typed at an interactive prompt.
    Prompt,
}

/// Answers selections with paths fixed up front.
#[derive(Debug, Clone, Default)]
pub struct ArgsSelector {
    files: Vec<PathBuf>,
    dir: Option<PathBuf>,
}

impl ArgsSelector {
    /// Creates a selector answering with `files` and `dir`.
    pub fn new(files: Vec<PathBuf>, dir: Option<PathBuf>) -> Self {
        Self { files, dir }
    }
}

impl PathSelector for ArgsSelector {
    fn select_file(&mut self, _request: &FileRequest) -> Option<PathBuf> {
        self.files.first().cloned()
    }

    fn select_files(&mut self, _request: &FileRequest) -> Vec<PathBuf> {
        self.files.clone()
    }

    fn select_dir(&mut self, _request: &DirRequest) -> Option<PathBuf> {
        self.dir.clone()
    }
}

/// Asks for paths on a text stream, one per line.
///
/// An empty line (or end of input) cancels. Relative answers are resolved
/// against the request's initial directory, and files that match none of the
/// request's filters are rejected.
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    /// Creates a prompt reading from `input` and printing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{text}") {
            log::warn!("failed to write prompt: {e}");
        }
    }

    fn read_answer(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let answer = line.trim();
                (!answer.is_empty()).then(|| answer.to_string())
            }
            Err(e) => {
                log::warn!("failed to read selection: {e}");
                None
            }
        }
    }

    fn read_file(&mut self, request: &FileRequest) -> Option<PathBuf> {
        let path = resolve(&request.initial_dir, &self.read_answer()?);
        if request.accepts(&path) {
            Some(path)
        } else {
            let patterns: Vec<&str> = request.filters.iter().map(|f| f.pattern.as_str()).collect();
            log::warn!(
                "'{}' does not match {}, ignoring it",
                path.display(),
                patterns.join(", ")
            );
            None
        }
    }
}

fn resolve(initial_dir: &Path, answer: &str) -> PathBuf {
    let path = Path::new(answer);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        initial_dir.join(path)
    }
}

impl<R: BufRead, W: Write> PathSelector for PromptSelector<R, W> {
    fn select_file(&mut self, request: &FileRequest) -> Option<PathBuf> {
        if !request.quiet {
            self.say(&request.prompt);
        }
        let path = self.read_file(request)?;
        if !request.quiet {
            self.say(&format!("{}\n", path.display()));
        }
        Some(path)
    }

    fn select_files(&mut self, request: &FileRequest) -> Vec<PathBuf> {
        if !request.quiet {
            self.say(&format!("{} (one per line, empty line to finish)", request.prompt));
        }
        let mut paths = Vec::new();
        loop {
            let Some(answer) = self.read_answer() else {
                break;
            };
            let path = resolve(&request.initial_dir, &answer);
            if request.accepts(&path) {
                paths.push(path);
            } else {
                log::warn!("'{}' does not match the file filters, ignoring it", path.display());
            }
        }
        if !request.quiet {
            for path in &paths {
                self.say(&path.display().to_string());
            }
            self.say("");
        }
        paths
    }

    fn select_dir(&mut self, request: &DirRequest) -> Option<PathBuf> {
        if !request.quiet {
            self.say(&request.prompt);
        }
        let path = resolve(&request.initial_dir, &self.read_answer()?);
        if !request.quiet {
            self.say(&format!("{}\n", path.display()));
        }
        Some(path)
    }
}
