//! Path selection capability.
//!
//! Choosing which scan to open (and where to write results) is left to an
//! external collaborator: a dialog, a prompt, or plain command-line arguments.
//! The core only sees the [`PathSelector`] trait and the default-on-cancel
//! helpers built on it.

use std::path::{Component, Path, PathBuf};

/// A named file pattern such as `("CSV", "*.csv")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Label shown to the user.
    pub label: String,
    /// Glob pattern; `*` and `*.*` match everything, `*.ext` matches an extension.
    pub pattern: String,
}

impl FileFilter {
    /// Creates a new filter.
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }

    /// Returns whether `path` matches this filter's pattern.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        match self.pattern.as_str() {
            "*" | "*.*" => true,
            pattern => match pattern.strip_prefix("*.") {
                Some(ext) => path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case(ext)),
                None => path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n == pattern),
            },
        }
    }
}

/// Parameters for a file selection.
#[derive(Debug, Clone)]
pub struct FileRequest {
    /// Directory the selection starts from.
    pub initial_dir: PathBuf,
    /// Accepted file patterns. Empty means any file.
    pub filters: Vec<FileFilter>,
    /// Prompt printed before selection.
    pub prompt: String,
    /// Title of the selection window, for backends that have one.
    pub title: String,
    /// Suppresses prompt and echo.
    pub quiet: bool,
}

impl Default for FileRequest {
    fn default() -> Self {
        Self {
            initial_dir: PathBuf::new(),
            filters: vec![FileFilter::new("CSV", "*.csv"), FileFilter::new("Text", "*.txt")],
            prompt: "Select a file:".to_string(),
            title: "Select File".to_string(),
            quiet: false,
        }
    }
}

impl FileRequest {
    /// Returns whether `path` passes the filters.
    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        self.filters.is_empty() || self.filters.iter().any(|f| f.matches(path))
    }
}

/// Parameters for a directory selection.
#[derive(Debug, Clone)]
pub struct DirRequest {
    /// Directory the selection starts from.
    pub initial_dir: PathBuf,
    /// Prompt printed before selection.
    pub prompt: String,
    /// Title of the selection window, for backends that have one.
    pub title: String,
    /// Suppresses prompt and echo.
    pub quiet: bool,
}

impl Default for DirRequest {
    fn default() -> Self {
        Self {
            initial_dir: PathBuf::from("."),
            prompt: "Select a directory:".to_string(),
            title: "Select Directory".to_string(),
            quiet: false,
        }
    }
}

/// Something that can ask for paths.
///
/// `None` (or an empty list) means the user cancelled.
pub trait PathSelector {
    /// Selects a single file.
    fn select_file(&mut self, request: &FileRequest) -> Option<PathBuf>;

    /// Selects any number of files, in order.
    fn select_files(&mut self, request: &FileRequest) -> Vec<PathBuf>;

    /// Selects a directory.
    fn select_dir(&mut self, request: &DirRequest) -> Option<PathBuf>;
}

/// Selects a file, falling back to `default` when cancelled. The result is normalized.
pub fn get_file(
    selector: &mut dyn PathSelector,
    request: &FileRequest,
    default: impl AsRef<Path>,
) -> PathBuf {
    let path = selector
        .select_file(request)
        .unwrap_or_else(|| default.as_ref().to_path_buf());
    normalize_path(path)
}

/// Selects several files. Each result is normalized; cancelling yields an empty list.
pub fn get_files(selector: &mut dyn PathSelector, request: &FileRequest) -> Vec<PathBuf> {
    selector
        .select_files(request)
        .into_iter()
        .map(normalize_path)
        .collect()
}

/// Selects a directory, falling back to `default` when cancelled. The result is normalized.
pub fn get_dir(
    selector: &mut dyn PathSelector,
    request: &DirRequest,
    default: impl AsRef<Path>,
) -> PathBuf {
    let path = selector
        .select_dir(request)
        .unwrap_or_else(|| default.as_ref().to_path_buf());
    normalize_path(path)
}

/// Lexically normalizes a path: drops `.` components and folds `..` into the
/// preceding component. An empty result becomes `.`.
///
/// Symlinks are not resolved.
pub fn normalize_path(path: impl AsRef<Path>) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays canned answers.
    struct Scripted {
        file: Option<PathBuf>,
        files: Vec<PathBuf>,
        dir: Option<PathBuf>,
    }

    impl PathSelector for Scripted {
        fn select_file(&mut self, _request: &FileRequest) -> Option<PathBuf> {
            self.file.take()
        }

        fn select_files(&mut self, _request: &FileRequest) -> Vec<PathBuf> {
            std::mem::take(&mut self.files)
        }

        fn select_dir(&mut self, _request: &DirRequest) -> Option<PathBuf> {
            self.dir.take()
        }
    }

    #[test]
    fn test_filter_matching() {
        let csv = FileFilter::new("CSV", "*.csv");
        assert!(csv.matches(Path::new("data/scan.csv")));
        assert!(csv.matches(Path::new("SCAN.CSV")));
        assert!(!csv.matches(Path::new("scan.txt")));
        assert!(!csv.matches(Path::new("csv")));
        assert!(FileFilter::new("All", "*").matches(Path::new("anything")));
        assert!(FileFilter::new("Exact", "scan.dat").matches(Path::new("x/scan.dat")));
    }

    #[test]
    fn test_request_accepts() {
        let request = FileRequest::default();
        assert!(request.accepts(Path::new("a.csv")));
        assert!(request.accepts(Path::new("a.txt")));
        assert!(!request.accepts(Path::new("a.png")));

        let any = FileRequest {
            filters: Vec::new(),
            ..FileRequest::default()
        };
        assert!(any.accepts(Path::new("a.png")));
    }

    #[test]
    fn test_defaults_on_cancel() {
        let mut selector = Scripted {
            file: None,
            files: Vec::new(),
            dir: None,
        };
        assert_eq!(
            get_file(&mut selector, &FileRequest::default(), "./Data/default.csv"),
            PathBuf::from("Data/default.csv")
        );
        assert_eq!(
            get_dir(&mut selector, &DirRequest::default(), "./"),
            PathBuf::from(".")
        );
        assert!(get_files(&mut selector, &FileRequest::default()).is_empty());
    }

    #[test]
    fn test_selection_is_normalized() {
        let mut selector = Scripted {
            file: Some(PathBuf::from("Data/./raw/../scan.csv")),
            files: vec![PathBuf::from("a/../b.csv"), PathBuf::from("./c.csv")],
            dir: Some(PathBuf::from("/tmp/out/")),
        };
        assert_eq!(
            get_file(&mut selector, &FileRequest::default(), "unused.csv"),
            PathBuf::from("Data/scan.csv")
        );
        assert_eq!(
            get_files(&mut selector, &FileRequest::default()),
            vec![PathBuf::from("b.csv"), PathBuf::from("c.csv")]
        );
        assert_eq!(
            get_dir(&mut selector, &DirRequest::default(), "."),
            PathBuf::from("/tmp/out")
        );
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), PathBuf::from("."));
        assert_eq!(normalize_path("a/.."), PathBuf::from("."));
        assert_eq!(normalize_path("../a/./b"), PathBuf::from("../a/b"));
        assert_eq!(normalize_path("/.."), PathBuf::from("/"));
        assert_eq!(normalize_path("a/../../b"), PathBuf::from("../b"));
    }
}
