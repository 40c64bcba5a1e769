use std::path::{Path, PathBuf};

/// Default dependency directory for `~`-aliased specifiers, resolved
/// against the process working directory at call time
pub const DEFAULT_NODE_MODULES_DIR: &str = "./node_modules";

/// Context an import specifier is resolved against.
///
/// Callers construct this once and pass it immutably; every field has a
/// documented default, so partial contexts are spelled with struct update
/// syntax rather than merged implicitly:
///
/// ```
/// use sassport_core::ResolveOptions;
///
/// let opts = ResolveOptions {
///     previous_file: "/project/styles/main.scss".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// File containing the import being resolved. May also name a
    /// directory; a path without an extension is treated as one.
    /// Default: empty (candidates root at the process working directory).
    pub previous_file: PathBuf,
    /// Extra directories searched, in order, for plain specifiers.
    /// Default: empty.
    pub include_paths: Vec<PathBuf>,
    /// Directory `~`-aliased specifiers resolve against.
    /// Default: [`DEFAULT_NODE_MODULES_DIR`].
    pub node_modules_dir: PathBuf,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            previous_file: PathBuf::new(),
            include_paths: Vec::new(),
            node_modules_dir: PathBuf::from(DEFAULT_NODE_MODULES_DIR),
        }
    }
}

impl ResolveOptions {
    /// Directory relative candidates are rooted at: `previous_file` itself
    /// when it has no extension, otherwise its parent directory.
    pub(crate) fn base_dir(&self) -> PathBuf {
        let prev = self.previous_file.as_path();
        if prev.extension().is_some() {
            prev.parent().unwrap_or(Path::new("")).to_path_buf()
        } else {
            prev.to_path_buf()
        }
    }
}
