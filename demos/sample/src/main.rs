use poem::{listener::TcpListener, EndpointExt, Route, Server};
use poem_openapi::{payload::Json, Object, OpenApi, OpenApiService, Tags};
use swagger_sloop::{SwaggerSloop, Theme};

#[derive(Tags)]
enum ApiTags {
    /// Weather forecast operations.
    Weather,
    /// User management operations.
    Users,
}

#[derive(Object)]
struct WeatherForecast {
    day: u8,
    temperature_c: i32,
    summary: String,
}

#[derive(Object)]
struct User {
    id: i64,
    name: String,
    email: String,
}

#[derive(Object)]
struct CreateUser {
    name: String,
    email: String,
}

struct Api;

#[OpenApi]
impl Api {
    /// Five-day weather forecast.
    #[oai(path = "/weatherforecast", method = "get", tag = "ApiTags::Weather")]
    async fn weather_forecast(&self) -> Json<Vec<WeatherForecast>> {
        const SUMMARIES: [&str; 5] = ["Freezing", "Chilly", "Mild", "Warm", "Scorching"];
        let forecast = (0..5u8)
            .map(|day| WeatherForecast {
                day: day + 1,
                temperature_c: i32::from(day) * 12 - 10,
                summary: SUMMARIES[usize::from(day)].to_string(),
            })
            .collect();
        Json(forecast)
    }

    /// List registered users.
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn users(&self) -> Json<Vec<User>> {
        Json(vec![
            User {
                id: 1,
                name: "John".to_string(),
                email: "john@example.com".to_string(),
            },
            User {
                id: 2,
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
            },
        ])
    }

    /// Register a user.
    #[oai(path = "/users", method = "post", tag = "ApiTags::Users")]
    async fn create_user(&self, user: Json<CreateUser>) -> Json<User> {
        Json(User {
            id: 3,
            name: user.0.name,
            email: user.0.email,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "poem=debug");
    }
    tracing_subscriber::fmt::init();

    let api_service =
        OpenApiService::new(Api, "Sample API", "1.0").server("http://localhost:3000/api/v1");
    let spec = api_service.spec_endpoint();

    // The generated document is mounted under the UI's prefix; the
    // middleware passes it through to the route below.
    let app = Route::new()
        .nest("/api/v1", api_service)
        .at("/swagger/v1/swagger.json", spec)
        .with(
            SwaggerSloop::new()
                .document_title("Sample API Documentation")
                .endpoint("/swagger/v1/swagger.json", "API V1")
                .default_theme(Theme::Auto)
                .primary_color("#5D87FF"),
        );

    Server::new(TcpListener::bind("127.0.0.1:3000")).run(app).await
}
