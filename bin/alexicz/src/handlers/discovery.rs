use alexa::{build_response, Directive, Envelope, Namespace};
use log::debug;
use serde_json::{Map, Value};

use crate::{Bridge, Result};

use super::log_request;

pub async fn discover(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    log_request(directive);

    let endpoints = bridge.endpoints().await?;
    let mut discovered = Vec::with_capacity(endpoints.len());

    for endpoint in &endpoints {
        if endpoint.capabilities().is_empty() {
            debug!(
                "Not exposing {} because it has no capabilities",
                endpoint.id()
            );
            continue;
        }

        discovered.push(serde_json::to_value(endpoint.discovery())?);
    }

    debug!("Discovered {} endpoints", discovered.len());

    let mut payload = Map::new();
    payload.insert("endpoints".to_string(), Value::Array(discovered));

    Ok(build_response(
        directive,
        Namespace::Discovery,
        "Discover.Response",
        payload,
        None,
    ))
}
