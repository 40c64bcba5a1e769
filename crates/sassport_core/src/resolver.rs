use log::{debug, trace};
use std::{fs, path::Path};

use crate::{candidates::generate_candidates, config::ResolveOptions, types::SpecifierKind};

/// Resolve an import specifier to the first existing candidate on disk.
///
/// External specifiers come back unchanged without touching the
/// filesystem. When no candidate exists the original specifier also comes
/// back unchanged; callers treat an unchanged specifier as a resolution
/// failure. This is the only operation that crosses the filesystem
/// boundary, and it does so through single existence probes only — no
/// file content is ever read.
pub fn resolve(specifier: &str, options: &ResolveOptions) -> String {
    resolve_with(specifier, options, is_regular_file)
}

/// Same as [`resolve`], with the filesystem probe supplied by the caller.
///
/// The probe is asked once per candidate, in generation order, and should
/// answer "does a regular file exist at this path?". A probe hitting an
/// I/O error should answer `false`; there is no retry.
pub fn resolve_with<F>(specifier: &str, options: &ResolveOptions, exists: F) -> String
where
    F: Fn(&Path) -> bool,
{
    if SpecifierKind::of(specifier) == SpecifierKind::External {
        trace!("Passing external reference through: '{}'", specifier);
        return specifier.to_string();
    }

    for candidate in generate_candidates(specifier, options) {
        trace!("Probing candidate: {}", candidate.display());
        if exists(&candidate) {
            debug!("Resolved '{}' to {}", specifier, candidate.display());
            return candidate.to_string_lossy().into_owned();
        }
    }

    debug!("No candidate exists for '{}', returning it unresolved", specifier);
    specifier.to_string()
}

/// Default probe. Directories don't count, and I/O errors (permissions,
/// races with deletion) collapse to `false`.
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
