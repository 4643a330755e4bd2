//! Relay HTTP Handlers
//!
//! The inbound `/hacknplan` endpoint and the health check.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::error::RelayError;
use super::event::{EventFields, EventType};
use super::message;
use crate::api::AppState;

/// Header HacknPlan sets to the event-type string.
const EVENT_HEADER: &str = "x-hacknplan-event";

/// Query parameters for the relay endpoint.
#[derive(Debug, Deserialize)]
pub struct RelayQuery {
    token: Option<String>,
}

/// POST /hacknplan?token=...
///
/// Validates the shared-secret token, parses the event payload, composes the
/// notification and forwards it to Discord. The outbound call is awaited, so
/// a failed forward answers 502 here.
#[instrument(skip_all)]
pub async fn hacknplan(
    State(state): State<AppState>,
    Query(query): Query<RelayQuery>,
    headers: HeaderMap,
    body: String,
) -> Result<StatusCode, RelayError> {
    if query.token.as_deref() != Some(state.config.token.as_str()) {
        warn!("Rejected request with missing or invalid token");
        return Err(RelayError::InvalidToken);
    }

    let payload: Value = serde_json::from_str(&body).map_err(|e| {
        warn!(error = %e, "Rejected unparseable event payload");
        RelayError::InvalidPayload(e.to_string())
    })?;

    // The event type comes in a header (official) or an Event/Type body field.
    let raw_type = headers
        .get(EVENT_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| body_event_type(&payload))
        .ok_or_else(|| {
            warn!("Event payload carried no event type");
            RelayError::MissingEventType
        })?;

    let event = EventType::parse(&raw_type).with_action_fallback(&payload);
    let fields = EventFields::extract(&payload, state.config.hnp_url_template.as_deref());

    info!(
        event_type = %event.canonical(),
        actor = fields.actor.as_deref().unwrap_or("-"),
        "Forwarding HacknPlan event"
    );

    let message = message::compose(&event, &fields, state.config.locale);
    state.discord.send(&message).await?;

    Ok(StatusCode::OK)
}

/// Event type fallback from the payload itself.
fn body_event_type(payload: &Value) -> Option<String> {
    payload
        .get("Event")
        .or_else(|| payload.get("Type"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// GET /healthz
pub async fn healthz() -> Json<Value> {
    Json(serde_json::json!({ "ok": true }))
}
