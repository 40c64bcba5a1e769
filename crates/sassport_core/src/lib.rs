//! Import resolution for Sass/SCSS stylesheets.
//!
//! This crate emulates the lookup rules of a Sass-style module system on
//! behalf of a preprocessor's import hook, including:
//! - Classifying specifiers (external URLs, absolute paths, `~` package
//!   aliases, relative imports) by their leading characters
//! - Expanding extension-less names into the implicit-extension, partial
//!   (`_name.scss`) and directory-index (`name/index.scss`) conventions
//! - Probing candidates across the search roots in priority order and
//!   picking the first that exists on disk
//!
//! Resolution is stateless: nothing is cached between calls and no file
//! content is ever read. An import that cannot be resolved is reported by
//! handing the specifier back unchanged rather than by an error.

mod candidates;
mod config;
mod constants;
mod resolver;
mod types;

// Re-export public API
pub use candidates::generate_candidates;
pub use config::{DEFAULT_NODE_MODULES_DIR, ResolveOptions};
pub use constants::{
    EXTERNAL_PREFIXES, INDEX_BASENAMES, SASS_EXTENSIONS, STYLESHEET_EXTENSIONS,
};
pub use resolver::{resolve, resolve_with};
pub use types::SpecifierKind;
