//! # Asset Path Normalization
//!
//! Engine paths arrive in several spellings (`res://a/b.png`, `/a/./b.png`,
//! `a\b.png`). The asset manager wants a bare relative key (`a/b.png`).
//!
//! - [`simplify`] is purely lexical: separators are unified, `.` and empty
//!   components dropped, `..` folded into its parent. A leading scheme
//!   (`res://`, `user://`) or root `/` is kept and never popped.
//! - [`asset_key`] strips that leading root or scheme so the result can be
//!   handed to the native lookup.

/// Lexically simplify an engine path.
///
/// ```rust
/// assert_eq!(apkfs::path::simplify("res://a/./b/../c.txt"), "res://a/c.txt");
/// assert_eq!(apkfs::path::simplify("//textures\\ui//icon.png"), "/textures/ui/icon.png");
/// ```
pub fn simplify(path: &str) -> String {
    let unified = path.replace('\\', "/");

    let (drive, rest) = match unified.find("://") {
        Some(idx) => unified.split_at(idx + 3),
        None if unified.starts_with('/') => ("/", unified.trim_start_matches('/')),
        None => ("", unified.as_str()),
    };

    let mut parts: Vec<&str> = Vec::new();
    for component in rest.split('/') {
        match component {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // Relative paths keep leading `..`; rooted paths clamp at the root.
                _ if drive.is_empty() => parts.push(".."),
                _ => {}
            },
            name => parts.push(name),
        }
    }

    let mut simplified = String::with_capacity(unified.len());
    simplified.push_str(drive);
    simplified.push_str(&parts.join("/"));
    simplified
}

/// Turn an already simplified path into the key the asset manager expects.
///
/// One leading `/` is removed, otherwise the `scheme` prefix is removed.
/// Anything else is returned unchanged.
pub fn asset_key<'a>(simplified: &'a str, scheme: &str) -> &'a str {
    if let Some(stripped) = simplified.strip_prefix('/') {
        stripped
    } else if let Some(stripped) = simplified.strip_prefix(scheme) {
        stripped
    } else {
        simplified
    }
}

/// Simplify and strip in one step.
pub fn normalize(path: &str, scheme: &str) -> String {
    asset_key(&simplify(path), scheme).to_string()
}
