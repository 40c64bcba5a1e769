use crate::constants::EXTERNAL_PREFIXES;

/// How a specifier is interpreted, derived from its leading characters.
///
/// Classification is mutually exclusive: prefixes are checked in the order
/// the variants are declared and the first match wins, so `//cdn/x` is
/// [`External`](Self::External) rather than [`Absolute`](Self::Absolute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// Remote or CSS-native reference (`http://`, `https://`, `//`, `\\`,
    /// `url(`); passed through untouched
    External,
    /// Rooted at the filesystem root (`/...`)
    Absolute,
    /// Rooted at the dependency directory (`~pkg/...`)
    PackageAliased,
    /// Rooted at the importing file's directory (`./x`, `../x`)
    ParentRelative,
    /// Rooted at the importing file's directory, then each include path
    PlainRelative,
}

impl SpecifierKind {
    /// Classify a raw import specifier by its prefix.
    pub fn of(specifier: &str) -> Self {
        if EXTERNAL_PREFIXES.iter().any(|p| specifier.starts_with(p)) {
            SpecifierKind::External
        } else if specifier.starts_with('/') {
            SpecifierKind::Absolute
        } else if specifier.starts_with('~') {
            SpecifierKind::PackageAliased
        } else if specifier.starts_with('.') {
            SpecifierKind::ParentRelative
        } else {
            SpecifierKind::PlainRelative
        }
    }
}
