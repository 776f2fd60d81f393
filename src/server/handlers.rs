use super::types::{ErrorResponse, GenerateResponse, RenderResponse};
use crate::relay::Relay;
use crate::session::SessionRequest;
use crate::{Error, curriculum, template};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

/// `POST /api/openai` — relay one generation request upstream.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();
    info!("Received generation request {}", request_id);

    match state.relay.generate(&request).await {
        Ok(session) => {
            info!("Successfully generated session for request {}", request_id);
            Ok(Json(GenerateResponse {
                text: session.text,
                raw: session.raw,
            }))
        }
        Err(e) => {
            error!("Failed to generate session for request {}: {}", request_id, e);
            Err(error_response(e))
        }
    }
}

/// `POST /api/sesion` — render the document locally, no upstream involved.
pub async fn render_local(Json(request): Json<SessionRequest>) -> Json<RenderResponse> {
    let details = request.details();
    Json(RenderResponse {
        text: template::render(&details),
    })
}

/// `GET /api/competencias/{grado}` — static curriculum lookup.
pub async fn competencias(
    Path(grado): Path<String>,
) -> Result<Json<&'static curriculum::GradeEntry>, (StatusCode, Json<ErrorResponse>)> {
    match curriculum::for_grade(&grado) {
        Some(entry) => Ok(Json(entry)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Grado desconocido: {}", grado),
                detail: None,
            }),
        )),
    }
}

/// Maps the error taxonomy onto the downstream contract: configuration and
/// internal faults are 500 `{error}`, upstream faults are 502
/// `{error, detail}` with the raw upstream body as detail.
fn error_response(error: Error) -> (StatusCode, Json<ErrorResponse>) {
    match error {
        Error::Config(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: message,
                detail: None,
            }),
        ),
        Error::UpstreamGateway { detail, .. } => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: "Error desde OpenAI".to_string(),
                detail: Some(detail),
            }),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: other.to_string(),
                detail: None,
            }),
        ),
    }
}
