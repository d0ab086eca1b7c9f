use alexa::{response, Directive, Envelope, PropertyName};
use log::debug;

use crate::endpoint::{MAX_KELVIN, MIN_KELVIN};
use crate::{Bridge, Endpoint, Error, Result};

use super::{integer, log_request};

const KELVIN_STEP: i64 = 500;

pub async fn set_color_temperature(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    let kelvin = integer(directive, "colorTemperatureInKelvin")?;
    debug!(
        "Request {}/{} kelvin {kelvin}",
        directive.header.namespace, directive.header.name
    );

    let endpoint = Endpoint::from_directive(directive)?;
    endpoint.set_color_temperature(bridge.backend(), kelvin).await?;

    Ok(response(directive))
}

async fn step(bridge: &Bridge, directive: &Directive, delta: i64) -> Result<Envelope> {
    log_request(directive);

    let endpoint = Endpoint::from_directive(directive)?;
    let current = bridge
        .current(&endpoint, PropertyName::ColorTemperature)
        .await?
        .as_i64()
        .ok_or_else(|| Error::Unavailable {
            endpoint: endpoint.id().to_string(),
            property: PropertyName::ColorTemperature,
        })?;

    let kelvin = current.saturating_add(delta).clamp(MIN_KELVIN, MAX_KELVIN);
    endpoint.set_color_temperature(bridge.backend(), kelvin).await?;

    Ok(response(directive))
}

pub async fn increase_color_temperature(
    bridge: &Bridge,
    directive: &Directive,
) -> Result<Envelope> {
    step(bridge, directive, KELVIN_STEP).await
}

pub async fn decrease_color_temperature(
    bridge: &Bridge,
    directive: &Directive,
) -> Result<Envelope> {
    step(bridge, directive, -KELVIN_STEP).await
}
