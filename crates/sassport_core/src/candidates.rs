use log::trace;
use path_clean::clean;
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    config::ResolveOptions,
    constants::{INDEX_BASENAMES, SASS_EXTENSIONS, STYLESHEET_EXTENSIONS},
    types::SpecifierKind,
};

/// Enumerate every filesystem location a specifier may bind to, in
/// resolution priority order.
///
/// The sequence is duplicate-free and stable for fixed inputs. An external
/// specifier produces a single-element passthrough; everything else yields
/// absolute candidate paths, roots first in search order, path forms in
/// convention order under each root (explicit extension, implicit
/// extension, partial prefix, directory index).
///
/// This function performs no filesystem probing; see
/// [`resolve`](crate::resolve) for selection.
pub fn generate_candidates(specifier: &str, options: &ResolveOptions) -> Vec<PathBuf> {
    let kind = SpecifierKind::of(specifier);
    trace!("Classified '{}' as {:?}", specifier, kind);

    // Search-root policy per kind. Only plain relative specifiers consult
    // the include paths; the base directory always ranks first.
    let (spec, base_root, extra_roots): (&str, PathBuf, &[PathBuf]) = match kind {
        SpecifierKind::External => return vec![PathBuf::from(specifier)],
        SpecifierKind::Absolute => (specifier, PathBuf::new(), &[]),
        SpecifierKind::PackageAliased => {
            (&specifier[1..], options.node_modules_dir.clone(), &[])
        }
        SpecifierKind::ParentRelative => (specifier, options.base_dir(), &[]),
        SpecifierKind::PlainRelative => {
            (specifier, options.base_dir(), options.include_paths.as_slice())
        }
    };

    let mut roots: Vec<&Path> = Vec::with_capacity(1 + extra_roots.len());
    roots.push(base_root.as_path());
    for dir in extra_roots {
        if !roots.contains(&dir.as_path()) {
            roots.push(dir.as_path());
        }
    }

    let spec_path = Path::new(spec);
    let sub_dir = spec_path.parent().unwrap_or(Path::new(""));
    let basename = spec_path.file_name().and_then(|n| n.to_str()).unwrap_or("");

    let mut candidates: Vec<PathBuf> = Vec::new();
    for root in roots {
        if has_stylesheet_extension(spec_path) {
            // Explicit extension binds exactly one location per root
            push_unique(&mut candidates, resolve_under(root, spec_path));
        } else {
            expand_ambiguous(&mut candidates, root, sub_dir, basename);
        }
    }

    trace!("Generated {} candidates for '{}'", candidates.len(), specifier);
    candidates
}

/// Expand an extension-less basename into every path form the preprocessor
/// convention allows it to bind to, under one search root.
///
/// A basename already carrying the underscore prefix refers to a partial
/// explicitly, so the prefixed forms are not re-derived for it.
fn expand_ambiguous(out: &mut Vec<PathBuf>, root: &Path, sub_dir: &Path, basename: &str) {
    let dir = root.join(sub_dir);

    for ext in STYLESHEET_EXTENSIONS {
        push_unique(out, resolve_under(&dir, Path::new(&format!("{basename}.{ext}"))));
    }

    // Partials are conventionally private but importable by their bare name
    if !basename.starts_with('_') {
        for ext in SASS_EXTENSIONS {
            push_unique(out, resolve_under(&dir, Path::new(&format!("_{basename}.{ext}"))));
        }
    }

    for index in INDEX_BASENAMES {
        for ext in SASS_EXTENSIONS {
            push_unique(out, resolve_under(&dir, Path::new(&format!("{basename}/{index}.{ext}"))));
        }
    }
}

/// Join `rel` under `root`, absolutize against the process working
/// directory when still relative, and collapse `.`/`..` segments lexically.
///
/// An absolute `rel` ignores `root`. A failed working-directory lookup
/// leaves the path relative; such candidates simply never exist.
fn resolve_under(root: &Path, rel: &Path) -> PathBuf {
    let joined = root.join(rel);
    let absolute = if joined.is_absolute() {
        joined
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(joined),
            Err(_) => joined,
        }
    };
    clean(absolute)
}

fn has_stylesheet_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| STYLESHEET_EXTENSIONS.contains(&ext))
}

fn push_unique(out: &mut Vec<PathBuf>, candidate: PathBuf) {
    if !out.contains(&candidate) {
        out.push(candidate);
    }
}
