use actix_web::{web, HttpResponse, Responder};
use comment_core::types::CommentRequest;
use tracing::warn;

use crate::error::ApiError;
use crate::server::AppState;
use crate::validate::parse_comment_request;

async fn post_comment(
    state: web::Data<AppState>,
    body: web::Json<CommentRequest>,
) -> Result<HttpResponse, ApiError> {
    let task = parse_comment_request(body.into_inner()).inspect_err(|e| {
        warn!(error = %e, "rejected comment request");
    })?;

    let response = state.comment_service.handle_comment(task).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/comment").route(web::post().to(post_comment)))
        .service(web::resource("/health").route(web::get().to(health_check)));
}
