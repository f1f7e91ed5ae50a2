use std::path::Path;

/// The Unicode version whose files are linked when none is given.
pub const DEFAULT_UNICODE_VERSION: &str = "15.0.0";

/// Return the download URL of a UCD file for the given Unicode version.
pub fn ucd_file_url(version: &str, relative_file_path: &Path) -> String {
    let parts: Vec<_> = relative_file_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    format!(
        "https://www.unicode.org/Public/{}/ucd/{}",
        version,
        parts.join("/")
    )
}

/// Returns true if and only if the given string looks like a Unicode
/// version, e.g., `15.0.0`.
pub fn is_unicode_version(version: &str) -> bool {
    version
        .split('.')
        .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}
