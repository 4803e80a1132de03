use std::path::Path;

#[must_use]
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            // Convert to lowercase and then match against known extensions.
            let ext_lower = ext.to_ascii_lowercase();
            matches!(ext_lower.as_str(), "jpg" | "jpeg" | "png" | "gif" | "webp")
        })
}

/// Reduces an uploaded filename to a safe basename: path components are
/// stripped and anything outside `[A-Za-z0-9._-]` is replaced.
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}
