//! The SwaggerSloop middleware and its configuration.

use poem::{
    http::{header, Method, StatusCode},
    web::Redirect,
    Endpoint, IntoResponse, Middleware, Request, Response, Result,
};
use serde::Serialize;

use crate::{
    assets::{self, UiAssets},
    dispatch::{self, RouteMatch, INDEX_FILE},
    render,
};

const DEFAULT_ENDPOINT_URL: &str = "/swagger/v1/swagger.json";
const DEFAULT_ENDPOINT_NAME: &str = "API V1";

/// Color scheme the UI starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
    /// Follow the system preference.
    #[default]
    Auto,
}

impl Theme {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }
}

/// One OpenAPI document listed in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwaggerEndpoint {
    /// Location of the document, referenced by the UI as-is.
    pub url: String,
    /// Display name.
    pub name: String,
}

/// Middleware serving the SwaggerSloop documentation UI under a route
/// prefix.
///
/// Requests for the prefix itself are redirected to the slash-terminated
/// form, the index document is rendered from the bundled template, bundled
/// static assets are served directly, and every other request is handed to
/// the wrapped endpoint untouched.
///
/// # Example
///
/// ```
/// use poem::{get, handler, http::StatusCode, test::TestClient, EndpointExt, Route};
/// use swagger_sloop::SwaggerSloop;
///
/// #[handler]
/// fn hello() -> &'static str {
///     "hello"
/// }
///
/// let app = Route::new().at("/hello", get(hello)).with(
///     SwaggerSloop::new()
///         .document_title("My API")
///         .endpoint("/swagger/v1/swagger.json", "API V1"),
/// );
/// let cli = TestClient::new(app);
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let resp = cli.get("/swagger").send().await;
/// resp.assert_status(StatusCode::MOVED_PERMANENTLY);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct SwaggerSloop {
    pub(crate) document_title: String,
    pub(crate) route_prefix: String,
    pub(crate) primary_color: String,
    pub(crate) default_theme: Theme,
    pub(crate) enable_search: bool,
    pub(crate) enable_code_copy: bool,
    pub(crate) inline_resources: bool,
    pub(crate) endpoints: Vec<SwaggerEndpoint>,
    pub(crate) stylesheets: Vec<String>,
    pub(crate) scripts: Vec<String>,
    pub(crate) oauth_client_id: Option<String>,
    pub(crate) oauth_client_secret: Option<String>,
}

impl Default for SwaggerSloop {
    fn default() -> Self {
        Self {
            document_title: "API Documentation".to_string(),
            route_prefix: "swagger".to_string(),
            primary_color: "#5D87FF".to_string(),
            default_theme: Theme::default(),
            enable_search: true,
            enable_code_copy: true,
            inline_resources: false,
            endpoints: Vec::new(),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            oauth_client_id: None,
            oauth_client_secret: None,
        }
    }
}

impl SwaggerSloop {
    /// Create the middleware with default options.
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the title of the documentation page.
    #[must_use]
    pub fn document_title(self, title: impl Into<String>) -> Self {
        Self {
            document_title: title.into(),
            ..self
        }
    }

    /// Set the path segment the UI is mounted under.
    ///
    /// Leading and trailing slashes are ignored; an empty prefix mounts the
    /// UI at the root.
    #[must_use]
    pub fn route_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            route_prefix: prefix.into(),
            ..self
        }
    }

    /// Set the primary color of the UI theme.
    ///
    /// Any CSS color value is accepted as-is.
    #[must_use]
    pub fn primary_color(self, color: impl Into<String>) -> Self {
        Self {
            primary_color: color.into(),
            ..self
        }
    }

    /// Set the theme the UI starts in.
    #[must_use]
    pub fn default_theme(self, theme: Theme) -> Self {
        Self {
            default_theme: theme,
            ..self
        }
    }

    /// Enable or disable the global search feature.
    ///
    /// Enabled by default.
    #[must_use]
    pub fn enable_search(self, enabled: bool) -> Self {
        Self {
            enable_search: enabled,
            ..self
        }
    }

    /// Enable or disable copy buttons on code samples.
    ///
    /// Enabled by default.
    #[must_use]
    pub fn enable_code_copy(self, enabled: bool) -> Self {
        Self {
            enable_code_copy: enabled,
            ..self
        }
    }

    /// Inline the bundled stylesheet and script into the rendered page, so
    /// the whole UI is delivered by the index response alone.
    ///
    /// Disabled by default.
    #[must_use]
    pub fn inline_resources(self, enabled: bool) -> Self {
        Self {
            inline_resources: enabled,
            ..self
        }
    }

    /// List an OpenAPI document in the UI.
    ///
    /// May be called multiple times; documents are listed in registration
    /// order. If no endpoint is registered, `/swagger/v1/swagger.json` is
    /// listed as `API V1`.
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>, name: impl Into<String>) -> Self {
        self.endpoints.push(SwaggerEndpoint {
            url: url.into(),
            name: name.into(),
        });
        self
    }

    /// Inject an extra stylesheet into the rendered page, before the closing
    /// head tag.
    #[must_use]
    pub fn inject_stylesheet(mut self, path: impl Into<String>) -> Self {
        self.stylesheets.push(path.into());
        self
    }

    /// Inject an extra script into the rendered page, before the closing
    /// body tag.
    #[must_use]
    pub fn inject_javascript(mut self, path: impl Into<String>) -> Self {
        self.scripts.push(path.into());
        self
    }

    /// Set the OAuth2 client id handed to the UI.
    #[must_use]
    pub fn oauth_client_id(self, client_id: impl Into<String>) -> Self {
        Self {
            oauth_client_id: Some(client_id.into()),
            ..self
        }
    }

    /// Set the OAuth2 client secret handed to the UI.
    #[must_use]
    pub fn oauth_client_secret(self, client_secret: impl Into<String>) -> Self {
        Self {
            oauth_client_secret: Some(client_secret.into()),
            ..self
        }
    }
}

impl<E: Endpoint> Middleware<E> for SwaggerSloop {
    type Output = SwaggerSloopEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        let mut config = self.clone();
        if config.endpoints.is_empty() {
            config.endpoints.push(SwaggerEndpoint {
                url: DEFAULT_ENDPOINT_URL.to_string(),
                name: DEFAULT_ENDPOINT_NAME.to_string(),
            });
        }
        let prefix = config.route_prefix.trim_matches('/').to_string();
        SwaggerSloopEndpoint {
            inner: ep,
            prefix,
            config,
        }
    }
}

/// Endpoint for SwaggerSloop middleware.
pub struct SwaggerSloopEndpoint<E> {
    inner: E,
    prefix: String,
    config: SwaggerSloop,
}

impl<E> SwaggerSloopEndpoint<E> {
    fn render_index(&self) -> Result<Response> {
        let Some(template) = assets::open::<UiAssets>(INDEX_FILE) else {
            tracing::warn!(file = INDEX_FILE, "documentation template missing from bundle");
            return Err(StatusCode::NOT_FOUND.into());
        };
        let template = String::from_utf8_lossy(&template);
        let html = render::render_index(&template, &self.config);
        Ok(Response::builder()
            .content_type("text/html; charset=utf-8")
            .body(html))
    }
}

impl<E: Endpoint> Endpoint for SwaggerSloopEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        if req.method() == Method::GET {
            match dispatch::match_request::<UiAssets>(&self.prefix, req.uri().path()) {
                RouteMatch::Redirect(location) => {
                    return Ok(Redirect::moved_permanent(location).into_response());
                }
                RouteMatch::Index => return self.render_index(),
                RouteMatch::Asset(path) => return serve_asset(&path),
                RouteMatch::NotHandled => {}
            }
        }
        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}

fn serve_asset(path: &str) -> Result<Response> {
    // match_request only yields paths it found in the bundle
    let Some(data) = assets::open::<UiAssets>(path) else {
        return Err(StatusCode::NOT_FOUND.into());
    };
    let body: Vec<u8> = data.into_owned();
    Ok(Response::builder()
        .header(header::CONTENT_TYPE, assets::content_type(path))
        .header(header::CACHE_CONTROL, "no-cache, no-store, must-revalidate")
        .header(header::PRAGMA, "no-cache")
        .body(body))
}
