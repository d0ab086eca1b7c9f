use alexa::{build_response, Directive, Envelope, Namespace};
use log::debug;
use serde_json::Map;

use crate::{Bridge, Endpoint, Result};

pub async fn report_state(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    let endpoint = Endpoint::from_directive(directive)?;

    let properties = if endpoint.has_properties() {
        let device = bridge.device(&endpoint).await?;
        endpoint.properties(&device)
    } else {
        vec![]
    };

    debug!(
        "Request {}/{} properties {:?}",
        directive.header.namespace, directive.header.name, properties
    );

    Ok(build_response(
        directive,
        Namespace::Alexa,
        "StateReport",
        Map::new(),
        Some(properties.into()),
    ))
}
