use alexa::{response, Directive, Envelope};
use log::debug;

use crate::{Bridge, Endpoint, Error, Result};

use super::{field, number};

pub async fn set_color(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    let color = field(directive, "color")?;
    if !color.is_object() {
        return Err(Error::Payload {
            field: "color",
            expected: "an object",
        });
    }

    let hue = number(&color["hue"], "color.hue")?;
    let saturation = number(&color["saturation"], "color.saturation")?;
    let brightness = number(&color["brightness"], "color.brightness")?;

    debug!(
        "Request {}/{} hue {hue} saturation {saturation} brightness {brightness}",
        directive.header.namespace, directive.header.name
    );

    let endpoint = Endpoint::from_directive(directive)?;
    endpoint
        .set_color(bridge.backend(), hue, saturation, brightness)
        .await?;

    Ok(response(directive))
}
