//! Constants for stylesheet extensions and candidate expansion.
//!
//! Sass resolution does not treat the three stylesheet extensions equally:
//! any of them may appear explicitly in a specifier, but only the two Sass
//! syntaxes participate in the partial (`_name`) and directory-index
//! (`name/index`) conventions. Plain CSS has neither.

/// Extensions a specifier may name explicitly; anything else is ambiguous
pub const STYLESHEET_EXTENSIONS: &[&str] = &[
    "css",  // plain CSS
    "scss", // Sassy CSS syntax
    "sass", // indented syntax
];

/// Extensions tried for partial and index forms (in priority order)
pub const SASS_EXTENSIONS: &[&str] = &["scss", "sass"];

/// Index basenames tried when a specifier names a package directory
pub const INDEX_BASENAMES: &[&str] = &["index", "_index"];

/// Prefixes marking a specifier as external: never resolved against the
/// filesystem, passed through to the emitted stylesheet untouched
pub const EXTERNAL_PREFIXES: &[&str] = &[
    "http://",
    "https://",
    "//",   // protocol-relative URL
    "\\\\", // UNC share
    "url(", // CSS url() reference
];
