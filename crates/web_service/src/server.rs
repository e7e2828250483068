use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use llm_gateway::{CompletionClient, GroqClient, DEFAULT_MODEL};
use tracing::{info, warn};

use crate::controllers::{comment_controller, voice_profile_controller};
use crate::error::ApiError;
use crate::services::comment_service::CommentService;

/// Process-wide state: read-only after startup, shared by every request.
pub struct AppState {
    pub comment_service: CommentService,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            comment_service: CommentService::new(client, model),
        }
    }
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .configure(comment_controller::config)
            .configure(voice_profile_controller::config),
    );
}

/// Malformed JSON bodies get the same `{"error": ...}` shape as every other
/// failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}

pub async fn run(port: u16) -> std::io::Result<()> {
    let client = GroqClient::from_env();
    if !client.is_configured() {
        // Keep serving: every generation call will fail fast with a
        // configuration error instead of attempting network I/O.
        warn!("GROQ_API_KEY is not set");
    }

    let app_state = web::Data::new(AppState::new(Arc::new(client), DEFAULT_MODEL));

    info!("Starting web service on http://127.0.0.1:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
