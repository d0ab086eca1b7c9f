use alexa::{response, Directive, Envelope, PropertyName};
use log::debug;

use crate::{Bridge, Endpoint, Error, Result};

use super::integer;

pub async fn set_percentage(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    let percentage = integer(directive, "percentage")?;
    debug!(
        "Request {}/{} percentage {percentage}",
        directive.header.namespace, directive.header.name
    );

    let endpoint = Endpoint::from_directive(directive)?;
    endpoint
        .set_percentage(bridge.backend(), percentage.clamp(0, 100))
        .await?;

    Ok(response(directive))
}

pub async fn adjust_percentage(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    let delta = integer(directive, "percentageDelta")?;
    debug!(
        "Request {}/{} percentage_delta {delta}",
        directive.header.namespace, directive.header.name
    );

    let endpoint = Endpoint::from_directive(directive)?;
    let current = bridge
        .current(&endpoint, PropertyName::Percentage)
        .await?
        .as_i64()
        .ok_or_else(|| Error::Unavailable {
            endpoint: endpoint.id().to_string(),
            property: PropertyName::Percentage,
        })?;

    endpoint
        .set_percentage(bridge.backend(), current.saturating_add(delta).clamp(0, 100))
        .await?;

    Ok(response(directive))
}
