//! Request classification for the documentation UI.

use rust_embed::RustEmbed;

use crate::assets;

pub(crate) const INDEX_FILE: &str = "index.html";

/// How an inbound request path should be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RouteMatch {
    /// Permanent redirect to the given location.
    Redirect(String),
    /// Render the index document.
    Index,
    /// Serve the bundled file at this normalized relative path.
    Asset(String),
    /// Not a documentation request; hand it to the next endpoint.
    NotHandled,
}

/// Classifies `path` against the mount `prefix` (already trimmed of slashes)
/// and the bundle `E`.
///
/// A request for the bare prefix redirects to the slash-terminated form so
/// that relative asset links inside the rendered page resolve correctly.
pub(crate) fn match_request<E: RustEmbed>(prefix: &str, path: &str) -> RouteMatch {
    let rest = path.strip_prefix('/').unwrap_or(path);

    if prefix.is_empty() {
        return classify::<E>(rest);
    }
    if rest.len() == prefix.len() && rest.eq_ignore_ascii_case(prefix) {
        return RouteMatch::Redirect(format!("/{prefix}/"));
    }
    if rest.len() > prefix.len()
        && rest.as_bytes()[prefix.len()] == b'/'
        && rest.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    {
        return classify::<E>(&rest[prefix.len() + 1..]);
    }
    RouteMatch::NotHandled
}

fn classify<E: RustEmbed>(rel: &str) -> RouteMatch {
    if rel.is_empty() || rel == INDEX_FILE {
        return RouteMatch::Index;
    }
    match assets::normalize(rel) {
        Some(rel) if assets::exists::<E>(&rel) && !assets::is_directory::<E>(&rel) => {
            RouteMatch::Asset(rel)
        }
        _ => RouteMatch::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::UiAssets;

    fn dispatch(prefix: &str, path: &str) -> RouteMatch {
        match_request::<UiAssets>(prefix, path)
    }

    #[test]
    fn bare_prefix_redirects() {
        assert_eq!(
            dispatch("swagger", "/swagger"),
            RouteMatch::Redirect("/swagger/".to_string())
        );
        assert_eq!(
            dispatch("swagger", "/SWAGGER"),
            RouteMatch::Redirect("/swagger/".to_string())
        );
        assert_eq!(
            dispatch("api-docs", "/Api-Docs"),
            RouteMatch::Redirect("/api-docs/".to_string())
        );
    }

    #[test]
    fn index_paths() {
        assert_eq!(dispatch("swagger", "/swagger/"), RouteMatch::Index);
        assert_eq!(dispatch("swagger", "/swagger/index.html"), RouteMatch::Index);
        assert_eq!(dispatch("swagger", "/SwAgGeR/index.html"), RouteMatch::Index);
    }

    #[test]
    fn bundled_assets() {
        assert_eq!(
            dispatch("swagger", "/swagger/swagger-sloop.css"),
            RouteMatch::Asset("swagger-sloop.css".to_string())
        );
        assert_eq!(
            dispatch("swagger", "/swagger/img/logo.svg"),
            RouteMatch::Asset("img/logo.svg".to_string())
        );
    }

    #[test]
    fn everything_else_falls_through() {
        // unknown asset
        assert_eq!(
            dispatch("swagger", "/swagger/does-not-exist.xyz"),
            RouteMatch::NotHandled
        );
        // asset paths are matched case-sensitively
        assert_eq!(
            dispatch("swagger", "/swagger/Swagger-Sloop.css"),
            RouteMatch::NotHandled
        );
        // directory
        assert_eq!(dispatch("swagger", "/swagger/img"), RouteMatch::NotHandled);
        // outside the prefix
        assert_eq!(dispatch("swagger", "/api/users"), RouteMatch::NotHandled);
        assert_eq!(dispatch("swagger", "/"), RouteMatch::NotHandled);
        // prefix must match a whole segment
        assert_eq!(dispatch("swagger", "/swaggerx"), RouteMatch::NotHandled);
        assert_eq!(
            dispatch("swagger", "/swaggerx/index.html"),
            RouteMatch::NotHandled
        );
    }

    #[test]
    fn traversal_is_rejected() {
        assert_eq!(
            dispatch("swagger", "/swagger/../Cargo.toml"),
            RouteMatch::NotHandled
        );
        assert_eq!(
            dispatch("swagger", "/swagger/img/../../secret"),
            RouteMatch::NotHandled
        );
    }

    #[test]
    fn empty_prefix_mounts_at_root() {
        assert_eq!(dispatch("", "/"), RouteMatch::Index);
        assert_eq!(dispatch("", "/index.html"), RouteMatch::Index);
        assert_eq!(
            dispatch("", "/swagger-sloop.css"),
            RouteMatch::Asset("swagger-sloop.css".to_string())
        );
        assert_eq!(dispatch("", "/nope.xyz"), RouteMatch::NotHandled);
    }
}
