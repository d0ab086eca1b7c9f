//! Media directives are acknowledged without reaching the backend.

use alexa::{response, Directive, Envelope};
use log::debug;

use crate::{Bridge, Result};

use super::{boolean, integer, log_request, string};

pub async fn set_volume(_: &Bridge, directive: &Directive) -> Result<Envelope> {
    let volume = integer(directive, "volume")?;
    debug!(
        "Request {}/{} volume {volume}",
        directive.header.namespace, directive.header.name
    );

    Ok(response(directive))
}

pub async fn adjust_volume(_: &Bridge, directive: &Directive) -> Result<Envelope> {
    let delta = integer(directive, "volume")?;
    debug!(
        "Request {}/{} volume_delta {delta}",
        directive.header.namespace, directive.header.name
    );

    Ok(response(directive))
}

pub async fn adjust_volume_steps(_: &Bridge, directive: &Directive) -> Result<Envelope> {
    let steps = integer(directive, "volumeSteps")?;
    debug!(
        "Request {}/{} volume_steps {steps}",
        directive.header.namespace, directive.header.name
    );

    Ok(response(directive))
}

pub async fn set_mute(_: &Bridge, directive: &Directive) -> Result<Envelope> {
    let mute = boolean(directive, "mute")?;
    debug!(
        "Request {}/{} mute {mute}",
        directive.header.namespace, directive.header.name
    );

    Ok(response(directive))
}

pub async fn select_input(_: &Bridge, directive: &Directive) -> Result<Envelope> {
    let input = string(directive, "input")?;
    debug!(
        "Request {}/{} input {input}",
        directive.header.namespace, directive.header.name
    );

    Ok(response(directive))
}

/// Play, Pause, Stop, Next and Previous.
pub async fn playback(_: &Bridge, directive: &Directive) -> Result<Envelope> {
    log_request(directive);

    Ok(response(directive))
}
