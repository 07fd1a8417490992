use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use quoter::{SessionRepository, TextGenerator};

mod adapters;
mod application;
mod auth;
mod error;
mod models;
mod routes;

use adapters::{GeminiTextGenerator, PgProfileRepository, PgQuoteRepository, PgSessionRepository};
use application::{GenerationService, ProfileService, QuoteService};

/// Type aliases for application services with concrete repository implementations
pub type AppQuoteService = QuoteService<PgQuoteRepository>;
pub type AppProfileService = ProfileService<PgProfileRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub quote_service: Arc<AppQuoteService>,
    pub profile_service: Arc<AppProfileService>,
    pub session_repo: Arc<dyn SessionRepository>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Quoter API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Quoter API initializing...");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Provider credential is read once here and injected into the
    // generator; a missing key leaves the generator absent and generate
    // calls report a configuration error without going outbound.
    let gemini_api_key = secrets
        .get("GEMINI_API_KEY")
        .or_else(|| secrets.get("GOOGLE_GENERATIVE_AI_API_KEY"));

    let generator: Option<Arc<dyn TextGenerator>> = match gemini_api_key {
        Some(key) => {
            let mut gemini = GeminiTextGenerator::new(key);
            if let Some(model) = secrets.get("GEMINI_MODEL") {
                gemini = gemini.with_model(model);
            }
            tracing::info!("Gemini generator initialized ({})", gemini.model_id());
            Some(Arc::new(gemini))
        }
        None => {
            tracing::warn!("No GEMINI_API_KEY set - quote generation disabled");
            None
        }
    };

    // Initialize application services
    let quote_repo = Arc::new(PgQuoteRepository::new(pool.clone()));
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let session_repo = Arc::new(PgSessionRepository::new(pool.clone()));
    let generation_service = Arc::new(GenerationService::new(generator));
    let quote_service = Arc::new(QuoteService::new(quote_repo));
    let profile_service = Arc::new(ProfileService::new(profile_repo));

    // Create application state
    let state = AppState {
        generation_service,
        quote_service,
        profile_service,
        session_repo,
    };

    // Authenticated routes resolve the caller via the AuthUser extractor
    let api_routes = Router::new()
        .merge(routes::generate::router())
        .merge(routes::quote::router())
        .merge(routes::feed::router())
        .merge(routes::profile::router());

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(api_routes)
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Quoter API ready");

    Ok(router.into())
}
