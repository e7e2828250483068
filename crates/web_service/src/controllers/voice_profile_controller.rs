use actix_web::{web, HttpResponse};
use comment_core::types::{VoiceProfileRequest, VoiceProfileResponse};
use tracing::warn;

use crate::error::ApiError;
use crate::server::AppState;
use crate::validate::parse_voice_profile_request;

async fn post_voice_profile(
    state: web::Data<AppState>,
    body: web::Json<VoiceProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = parse_voice_profile_request(body.into_inner()).inspect_err(|e| {
        warn!(error = %e, "rejected voice-profile request");
    })?;

    let voice_profile = state.comment_service.derive_voice_profile(input).await?;
    Ok(HttpResponse::Ok().json(VoiceProfileResponse { voice_profile }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/voice-profile").route(web::post().to(post_voice_profile)));
}
