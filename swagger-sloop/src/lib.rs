//! SwaggerSloop is an embeddable API-documentation UI for Poem.
//!
//! The middleware intercepts requests under a configurable route prefix
//! (`/swagger` by default): the prefix itself redirects to the
//! slash-terminated form, `/swagger/` and `/swagger/index.html` render the
//! documentation page, and the UI's stylesheet/script assets are served from
//! a bundle embedded in the binary. Every other request — including the
//! OpenAPI documents the page lists — passes through to the wrapped
//! endpoint untouched.
//!
//! # Example
//!
//! ```
//! use poem::{get, handler, EndpointExt, Route};
//! use swagger_sloop::{SwaggerSloop, Theme};
//!
//! #[handler]
//! fn hello() -> &'static str {
//!     "hello"
//! }
//!
//! let app = Route::new().at("/hello", get(hello)).with(
//!     SwaggerSloop::new()
//!         .document_title("My API")
//!         .endpoint("/swagger/v1/swagger.json", "API V1")
//!         .endpoint("/swagger/v2/swagger.json", "API V2")
//!         .default_theme(Theme::Auto),
//! );
//! ```

#![forbid(unsafe_code)]
#![deny(unreachable_pub)]
#![warn(missing_docs)]

mod assets;
mod dispatch;
mod middleware;
mod render;

pub use middleware::{SwaggerEndpoint, SwaggerSloop, SwaggerSloopEndpoint, Theme};
