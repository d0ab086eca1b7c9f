use alexa::{build_response, Directive, Envelope, Namespace};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use crate::{Bridge, Endpoint, Result};

use super::log_request;

fn started_payload() -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("cause".to_string(), json!({"type": "VOICE_INTERACTION"}));
    payload.insert(
        "timestamp".to_string(),
        json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    payload
}

pub async fn activate(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    log_request(directive);

    let endpoint = Endpoint::from_directive(directive)?;
    endpoint.activate(bridge.backend()).await?;

    Ok(build_response(
        directive,
        Namespace::SceneController,
        "ActivationStarted",
        started_payload(),
        None,
    ))
}

pub async fn deactivate(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    log_request(directive);

    let endpoint = Endpoint::from_directive(directive)?;
    endpoint.deactivate(bridge.backend()).await?;

    Ok(build_response(
        directive,
        Namespace::SceneController,
        "DeactivationStarted",
        started_payload(),
        None,
    ))
}
