use alexa::{response_with_properties, Directive, Envelope, Namespace, PropertyName, PropertyState};
use log::debug;

use crate::{Bridge, Endpoint, Error, Result};

use super::integer;

async fn set(
    bridge: &Bridge,
    directive: &Directive,
    endpoint: &Endpoint,
    brightness: i64,
) -> Result<Envelope> {
    endpoint.set_brightness(bridge.backend(), brightness).await?;

    Ok(response_with_properties(
        directive,
        vec![PropertyState::new(
            Namespace::BrightnessController,
            PropertyName::Brightness,
            brightness,
        )],
    ))
}

pub async fn set_brightness(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    let brightness = integer(directive, "brightness")?;
    debug!(
        "Request {}/{} brightness {brightness}",
        directive.header.namespace, directive.header.name
    );

    let endpoint = Endpoint::from_directive(directive)?;
    set(bridge, directive, &endpoint, brightness.clamp(0, 100)).await
}

pub async fn adjust_brightness(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    let delta = integer(directive, "brightnessDelta")?;
    debug!(
        "Request {}/{} brightness_delta {delta}",
        directive.header.namespace, directive.header.name
    );

    let endpoint = Endpoint::from_directive(directive)?;
    let current = bridge
        .current(&endpoint, PropertyName::Brightness)
        .await?
        .as_i64()
        .ok_or_else(|| Error::Unavailable {
            endpoint: endpoint.id().to_string(),
            property: PropertyName::Brightness,
        })?;

    set(bridge, directive, &endpoint, current.saturating_add(delta).clamp(0, 100)).await
}
