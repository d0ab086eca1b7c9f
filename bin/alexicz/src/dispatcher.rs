use std::panic::AssertUnwindSafe;

use alexa::{build_error, Directive, Envelope, ErrorType, Namespace};
use futures::future::BoxFuture;
use futures::FutureExt;
use log::error;
use serde_json::Map;

use crate::handlers::{
    brightness, color, color_temperature, discovery, lock, media, percentage, power,
    report_state, scene, thermostat,
};
use crate::{Bridge, Result};

pub type Handler =
    for<'a> fn(&'a Bridge, &'a Directive) -> BoxFuture<'a, Result<Envelope>>;

macro_rules! handlers {
    ($($namespace:ident / $name:literal => $handler:path,)*) => {
        /// Second-level lookup: the handler for `name` within a namespace.
        pub fn handler(namespace: Namespace, name: &str) -> Option<Handler> {
            match (namespace, name) {
                $((Namespace::$namespace, $name) => {
                    fn boxed<'a>(
                        bridge: &'a Bridge,
                        directive: &'a Directive,
                    ) -> BoxFuture<'a, Result<Envelope>> {
                        $handler(bridge, directive).boxed()
                    }

                    Some(boxed as Handler)
                })*
                _ => None,
            }
        }
    };
}

handlers! {
    Discovery / "Discover" => discovery::discover,
    PowerController / "TurnOn" => power::turn_on,
    PowerController / "TurnOff" => power::turn_off,
    BrightnessController / "SetBrightness" => brightness::set_brightness,
    BrightnessController / "AdjustBrightness" => brightness::adjust_brightness,
    ColorController / "SetColor" => color::set_color,
    ColorTemperatureController / "SetColorTemperature" => color_temperature::set_color_temperature,
    ColorTemperatureController / "IncreaseColorTemperature" => color_temperature::increase_color_temperature,
    ColorTemperatureController / "DecreaseColorTemperature" => color_temperature::decrease_color_temperature,
    PercentageController / "SetPercentage" => percentage::set_percentage,
    PercentageController / "AdjustPercentage" => percentage::adjust_percentage,
    SceneController / "Activate" => scene::activate,
    SceneController / "Deactivate" => scene::deactivate,
    LockController / "Lock" => lock::lock,
    LockController / "Unlock" => lock::unlock,
    ThermostatController / "SetTargetTemperature" => thermostat::set_target_temperature,
    ThermostatController / "AdjustTargetTemperature" => thermostat::adjust_target_temperature,
    ThermostatController / "SetThermostatMode" => thermostat::set_thermostat_mode,
    Speaker / "SetVolume" => media::set_volume,
    Speaker / "AdjustVolume" => media::adjust_volume,
    StepSpeaker / "AdjustVolume" => media::adjust_volume_steps,
    StepSpeaker / "SetMute" => media::set_mute,
    PlaybackController / "Play" => media::playback,
    PlaybackController / "Pause" => media::playback,
    PlaybackController / "Stop" => media::playback,
    PlaybackController / "Next" => media::playback,
    PlaybackController / "Previous" => media::playback,
    InputController / "SelectInput" => media::select_input,
    ReportState / "ReportState" => report_state::report_state,
}

pub fn resolve(namespace: &str, name: &str) -> Option<Handler> {
    handler(Namespace::resolve(namespace, name)?, name)
}

pub(crate) fn internal_error(directive: &Directive, message: &str) -> Envelope {
    build_error(
        directive,
        Namespace::Alexa,
        ErrorType::InternalError,
        message,
        Map::new(),
    )
}

async fn invoke(handler: Handler, bridge: &Bridge, directive: &Directive) -> Envelope {
    match handler(bridge, directive).await {
        Ok(envelope) => envelope,
        Err(err) => {
            error!(
                "Request {}/{} failed: {err}",
                directive.header.namespace, directive.header.name
            );
            internal_error(directive, &err.to_string())
        }
    }
}

/// Routes `directive` to its handler. Always yields an envelope.
pub async fn dispatch(bridge: &Bridge, directive: &Directive) -> Envelope {
    let header = &directive.header;

    let Some(handler) = resolve(&header.namespace, &header.name) else {
        error!("Can't process {}/{}", header.namespace, header.name);
        return internal_error(directive, "unsupported directive");
    };

    guarded(handler, bridge, directive).await
}

/// Runs `handler`, turning a panic into an error envelope.
async fn guarded(handler: Handler, bridge: &Bridge, directive: &Directive) -> Envelope {
    match AssertUnwindSafe(invoke(handler, bridge, directive))
        .catch_unwind()
        .await
    {
        Ok(envelope) => envelope,
        Err(_) => {
            error!(
                "Request {}/{} panicked",
                directive.header.namespace, directive.header.name
            );
            internal_error(directive, "internal error")
        }
    }
}
