use alexa::{
    response_with_properties, Directive, Envelope, Namespace, PropertyName, PropertyState,
    Temperature,
};
use log::debug;
use serde_json::Value;

use crate::{Bridge, Endpoint, Error, Result};

use super::{field, temperature};

fn target_setpoint(directive: &Directive, celsius: f64) -> Envelope {
    response_with_properties(
        directive,
        vec![PropertyState::new(
            Namespace::ThermostatController,
            PropertyName::TargetSetpoint,
            Temperature::celsius(celsius),
        )],
    )
}

pub async fn set_target_temperature(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    let celsius = temperature(directive, "targetSetpoint")?.to_celsius();
    debug!(
        "Request {}/{} targetSetpoint {celsius:.2}",
        directive.header.namespace, directive.header.name
    );

    let endpoint = Endpoint::from_directive(directive)?;
    endpoint
        .set_target_setpoint(bridge.backend(), celsius)
        .await?;

    Ok(target_setpoint(directive, celsius))
}

pub async fn adjust_target_temperature(
    bridge: &Bridge,
    directive: &Directive,
) -> Result<Envelope> {
    let delta = temperature(directive, "targetSetpointDelta")?.interval_to_celsius();
    debug!(
        "Request {}/{} targetSetpoint delta {delta:.2}",
        directive.header.namespace, directive.header.name
    );

    let endpoint = Endpoint::from_directive(directive)?;
    let current = bridge
        .current(&endpoint, PropertyName::TargetSetpoint)
        .await?;
    let current = current
        .get("value")
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::Unavailable {
            endpoint: endpoint.id().to_string(),
            property: PropertyName::TargetSetpoint,
        })?;

    let target = current + delta;
    endpoint.set_target_setpoint(bridge.backend(), target).await?;

    Ok(target_setpoint(directive, target))
}

pub async fn set_thermostat_mode(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    let value = field(directive, "thermostatMode")?;
    let mode = value
        .as_str()
        .or_else(|| value.get("value").and_then(Value::as_str))
        .ok_or(Error::Payload {
            field: "thermostatMode",
            expected: "a mode name",
        })?;

    debug!(
        "Request {}/{} thermostatMode {mode}",
        directive.header.namespace, directive.header.name
    );

    let endpoint = Endpoint::from_directive(directive)?;
    endpoint.set_thermostat_mode(bridge.backend(), mode).await?;

    Ok(response_with_properties(
        directive,
        vec![PropertyState::new(
            Namespace::ThermostatController,
            PropertyName::ThermostatMode,
            mode,
        )],
    ))
}
