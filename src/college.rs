//! College Identity
//!
//! Resolves which college a page belongs to from its URL path.

use percent_encoding::percent_decode_str;

/// Known colleges: (slug, display name)
pub const COLLEGES: &[(&str, &str)] = &[
    ("uc", "University College"),
    ("trinity", "Trinity College"),
    ("victoria", "Victoria College"),
    ("stmikes", "St. Michael’s College"),
    ("woods", "Woodsworth College"),
    ("innis", "Innis College"),
    ("new", "New College"),
];

/// Last segment of a URL path, used verbatim as the college identifier.
///
/// `"/colleges/trinity"` gives `"trinity"`; a trailing slash gives `""`.
pub fn slug_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// Heading for a college page. Unknown slugs fall back to the decoded slug.
pub fn display_name(slug: &str) -> String {
    let lookup = slug.to_lowercase();
    COLLEGES
        .iter()
        .find(|(key, _)| *key == lookup)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| percent_decode_str(slug).decode_utf8_lossy().into_owned())
}
