pub mod brightness;
pub mod color;
pub mod color_temperature;
pub mod discovery;
pub mod lock;
pub mod media;
pub mod percentage;
pub mod power;
pub mod report_state;
pub mod scene;
pub mod thermostat;

use alexa::{Directive, Temperature};
use log::debug;
use serde_json::Value;

use crate::{Error, Result};

fn field<'a>(directive: &'a Directive, name: &'static str) -> Result<&'a Value> {
    directive.payload_value(name).ok_or(Error::Payload {
        field: name,
        expected: "present",
    })
}

fn integer(directive: &Directive, name: &'static str) -> Result<i64> {
    let value = field(directive, name)?;

    value
        .as_i64()
        .or_else(|| value.as_f64().map(|value| value as i64))
        .ok_or(Error::Payload {
            field: name,
            expected: "an integer",
        })
}

fn number(value: &Value, name: &'static str) -> Result<f64> {
    value.as_f64().ok_or(Error::Payload {
        field: name,
        expected: "a number",
    })
}

fn string<'a>(directive: &'a Directive, name: &'static str) -> Result<&'a str> {
    field(directive, name)?.as_str().ok_or(Error::Payload {
        field: name,
        expected: "a string",
    })
}

fn boolean(directive: &Directive, name: &'static str) -> Result<bool> {
    field(directive, name)?.as_bool().ok_or(Error::Payload {
        field: name,
        expected: "a boolean",
    })
}

fn temperature(directive: &Directive, name: &'static str) -> Result<Temperature> {
    serde_json::from_value(field(directive, name)?.clone()).map_err(|_| Error::Payload {
        field: name,
        expected: "a temperature",
    })
}

fn log_request(directive: &Directive) {
    debug!(
        "Request {}/{}",
        directive.header.namespace, directive.header.name
    );
}
