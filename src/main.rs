use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use casting_match::config::Settings;
use casting_match::core::Matcher;
use casting_match::routes::{self, AppState};
use casting_match::services::{seed, BriefSessions, GeminiClient, InMemoryRegistry};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle path segment errors, e.g. a non-numeric role index
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_path".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    // LOG_LEVEL / LOG_FORMAT win over the config file
    let (level, format) = match &settings {
        Ok(s) => (s.logging.level.clone(), s.logging.format.clone()),
        Err(_) => ("info".to_string(), "json".to_string()),
    };
    let level = std::env::var("LOG_LEVEL").unwrap_or(level);
    let format = std::env::var("LOG_FORMAT").unwrap_or(format);
    init_logging(&level, &format);

    info!("Starting casting match service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    info!("Configuration loaded successfully");

    // Seed the in-memory catalogue
    let talents = seed::mock_talents_seeded(settings.seed.talent_count, settings.seed.rng_seed);
    let projects = if settings.seed.sample_projects {
        seed::mock_projects()
    } else {
        Vec::new()
    };

    info!(
        "Registry seeded with {} talents and {} projects (seed {})",
        talents.len(),
        projects.len(),
        settings.seed.rng_seed
    );

    let registry = Arc::new(InMemoryRegistry::new(talents, projects));

    // Initialize brief generation client
    let gemini = GeminiClient::new(
        settings.brief.endpoint.clone(),
        settings.brief.api_key.clone(),
        settings.brief.model.clone(),
        settings.brief.timeout_secs,
    )
    .map_err(|e| {
        error!("Failed to build brief client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    if gemini.has_credentials() {
        info!("Brief client initialized (model: {})", settings.brief.model);
    } else {
        warn!("No brief API key configured, analysis requests will fail");
    }

    let matcher = Matcher::new(settings.matching.max_results);

    info!("Matcher initialized (max results: {})", matcher.max_results());

    let sessions = BriefSessions::new(
        settings.sessions.max_sessions,
        Duration::from_secs(settings.sessions.idle_timeout_secs),
    );

    info!(
        "Brief sessions: up to {}, dropped after {}s idle",
        settings.sessions.max_sessions, settings.sessions.idle_timeout_secs
    );

    // Build application state
    let app_state = AppState {
        talents: registry.clone(),
        projects: registry,
        briefs: Arc::new(gemini),
        sessions: Arc::new(sessions),
        matcher,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
