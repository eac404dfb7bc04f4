//! The embedded UI bundle and content-type resolution.

use std::borrow::Cow;

use rust_embed::RustEmbed;

/// The UI files shipped with this crate, embedded at build time.
#[derive(RustEmbed)]
#[folder = "wwwroot"]
pub(crate) struct UiAssets;

/// Returns `true` if `path` names a file in the bundle.
pub(crate) fn exists<E: RustEmbed>(path: &str) -> bool {
    E::get(path).is_some()
}

/// Returns `true` if `path` names a directory in the bundle.
///
/// `rust-embed` stores files only, so a directory is any path with at least
/// one entry below it.
pub(crate) fn is_directory<E: RustEmbed>(path: &str) -> bool {
    let prefix = format!("{path}/");
    E::iter().any(|file| file.starts_with(&prefix))
}

/// Opens a bundled file and returns its contents.
pub(crate) fn open<E: RustEmbed>(path: &str) -> Option<Cow<'static, [u8]>> {
    E::get(path).map(|file| file.data)
}

/// Cleans up a bundle-relative path: empty and `.` segments are dropped,
/// parent-directory segments are rejected outright.
pub(crate) fn normalize(path: &str) -> Option<String> {
    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            _ => segments.push(segment),
        }
    }
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Resolves the content type for a bundled file from its extension.
pub(crate) fn content_type(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_lookup() {
        assert!(exists::<UiAssets>("index.html"));
        assert!(exists::<UiAssets>("swagger-sloop.css"));
        assert!(exists::<UiAssets>("img/logo.svg"));
        assert!(!exists::<UiAssets>("img"));
        assert!(!exists::<UiAssets>("missing.txt"));

        assert!(is_directory::<UiAssets>("img"));
        assert!(!is_directory::<UiAssets>("index.html"));
        assert!(!is_directory::<UiAssets>("missing"));
    }

    #[test]
    fn open_reads_file_contents() {
        let index = open::<UiAssets>("index.html").expect("index.html is bundled");
        assert!(!index.is_empty());
        assert!(open::<UiAssets>("missing.txt").is_none());
    }

    #[test]
    fn normalize_paths() {
        assert_eq!(normalize("app.css").as_deref(), Some("app.css"));
        assert_eq!(normalize("img//logo.svg").as_deref(), Some("img/logo.svg"));
        assert_eq!(normalize("./img/./logo.svg").as_deref(), Some("img/logo.svg"));
        assert_eq!(normalize("img/logo.svg/").as_deref(), Some("img/logo.svg"));
        assert_eq!(normalize("../etc/passwd"), None);
        assert_eq!(normalize("img/../index.html"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("."), None);
    }

    #[test]
    fn content_type_from_extension() {
        assert_eq!(content_type("swagger-sloop.css"), "text/css");
        assert_eq!(content_type("index.html"), "text/html");
        assert_eq!(content_type("img/logo.svg"), "image/svg+xml");
        assert_eq!(content_type("data.json"), "application/json");
        assert_eq!(content_type("unknown.xyz"), "application/octet-stream");
    }
}
