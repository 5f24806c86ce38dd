//! Path normalization

use std::path::{Component, Path};

/// Render a relative path with `/` between components on every platform.
///
/// Only real separators are rewritten, so a `\` inside a Unix file name
/// survives. Returns `None` when a component is not valid UTF-8 or the path
/// is not a plain relative path.
pub fn normalize_path(path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(parts.join("/"))
}
