//! Index-document rendering.
//!
//! The index template is not a general template: it carries a fixed, closed
//! set of `%(..)` tokens which are substituted literally on every render.

use std::{
    fmt::Write,
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    assets::{self, UiAssets},
    middleware::SwaggerSloop,
};

/// The tags `index.html` uses to load its own bundled resources. Inline mode
/// swaps these for the file contents.
const BUNDLED_STYLESHEET_TAG: &str =
    r#"<link rel="stylesheet" href="./swagger-sloop.css?v=%(Version)">"#;
const BUNDLED_SCRIPT_TAG: &str = r#"<script src="./swagger-sloop.js?v=%(Version)"></script>"#;

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Produces the cache-busting token for one render.
///
/// Time-derived, with a process-wide counter so two renders never share a
/// token even within the same millisecond.
pub(crate) fn next_version() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    let seq = VERSION_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{millis}.{seq}")
}

/// Renders the index document from its template source and the
/// configuration snapshot.
pub(crate) fn render_index(template: &str, config: &SwaggerSloop) -> String {
    render_with_version(template, config, &next_version())
}

pub(crate) fn render_with_version(template: &str, config: &SwaggerSloop, version: &str) -> String {
    let urls = serde_json::to_string(&config.endpoints).unwrap_or_else(|_| "[]".to_string());

    let mut html = if config.inline_resources {
        inline_bundled_resources(template)
    } else {
        template.to_string()
    };

    html = html
        .replace("%(DocumentTitle)", &html_escape(&config.document_title))
        .replace("%(PrimaryColor)", &html_escape(&config.primary_color))
        .replace("%(DefaultTheme)", config.default_theme.as_str())
        .replace("%(EnableSearch)", bool_str(config.enable_search))
        .replace("%(EnableCodeCopy)", bool_str(config.enable_code_copy))
        .replace("%(Version)", version)
        .replace("%(Urls)", &urls);

    if !config.stylesheets.is_empty() {
        let mut tags = String::new();
        for stylesheet in &config.stylesheets {
            let _ = writeln!(
                tags,
                r#"    <link rel="stylesheet" href="{}">"#,
                html_escape(stylesheet)
            );
        }
        html = html.replace("</head>", &format!("{tags}</head>"));
    }

    if !config.scripts.is_empty() {
        let mut tags = String::new();
        for script in &config.scripts {
            let _ = writeln!(tags, r#"    <script src="{}"></script>"#, html_escape(script));
        }
        html = html.replace("</body>", &format!("{tags}</body>"));
    }

    html
}

/// Replaces the template's own stylesheet/script tags with the bundled file
/// contents, so the whole UI is delivered in a single response.
fn inline_bundled_resources(template: &str) -> String {
    let mut html = template.to_string();
    match assets::open::<UiAssets>("swagger-sloop.css") {
        Some(css) => {
            let css = String::from_utf8_lossy(&css);
            html = html.replace(BUNDLED_STYLESHEET_TAG, &format!("<style>\n{css}\n</style>"));
        }
        None => tracing::warn!("bundled stylesheet missing, keeping external reference"),
    }
    match assets::open::<UiAssets>("swagger-sloop.js") {
        Some(js) => {
            let js = String::from_utf8_lossy(&js);
            html = html.replace(BUNDLED_SCRIPT_TAG, &format!("<script>\n{js}\n</script>"));
        }
        None => tracing::warn!("bundled script missing, keeping external reference"),
    }
    html
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
