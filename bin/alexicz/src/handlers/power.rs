use alexa::{response, Directive, Envelope};

use crate::{Bridge, Endpoint, Result};

use super::log_request;

pub async fn turn_on(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    log_request(directive);

    let endpoint = Endpoint::from_directive(directive)?;
    endpoint.turn_on(bridge.backend()).await?;

    Ok(response(directive))
}

pub async fn turn_off(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    log_request(directive);

    let endpoint = Endpoint::from_directive(directive)?;
    endpoint.turn_off(bridge.backend()).await?;

    Ok(response(directive))
}
