use serde::{Deserialize, Serialize};
use str_derive::Str;

/// Interface namespaces carried in directive and event headers.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
pub enum Namespace {
    #[serde(rename = "Alexa")]
    Alexa,
    /// Never sent on the wire: `Alexa`/`ReportState` is routed here so that
    /// state reports resolve like any other capability.
    #[serde(rename = "Alexa.ReportState")]
    ReportState,
    #[serde(rename = "Alexa.Discovery")]
    Discovery,
    #[serde(rename = "Alexa.PowerController")]
    PowerController,
    #[serde(rename = "Alexa.BrightnessController")]
    BrightnessController,
    #[serde(rename = "Alexa.ColorController")]
    ColorController,
    #[serde(rename = "Alexa.ColorTemperatureController")]
    ColorTemperatureController,
    #[serde(rename = "Alexa.PercentageController")]
    PercentageController,
    #[serde(rename = "Alexa.SceneController")]
    SceneController,
    #[serde(rename = "Alexa.LockController")]
    LockController,
    #[serde(rename = "Alexa.ThermostatController")]
    ThermostatController,
    #[serde(rename = "Alexa.TemperatureSensor")]
    TemperatureSensor,
    #[serde(rename = "Alexa.ContactSensor")]
    ContactSensor,
    #[serde(rename = "Alexa.Speaker")]
    Speaker,
    #[serde(rename = "Alexa.StepSpeaker")]
    StepSpeaker,
    #[serde(rename = "Alexa.PlaybackController")]
    PlaybackController,
    #[serde(rename = "Alexa.InputController")]
    InputController,
}

impl Namespace {
    /// Resolves the dispatch group for a directive header.
    pub fn resolve(namespace: &str, name: &str) -> Option<Namespace> {
        if namespace == "Alexa" && name == "ReportState" {
            return Some(Namespace::ReportState);
        }

        namespace.parse().ok()
    }
}
