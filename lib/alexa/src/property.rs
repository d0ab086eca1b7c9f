use serde::{Deserialize, Serialize};
use serde_json::Value;
use str_derive::Str;

use crate::Namespace;

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PropertyName {
    PowerState,
    LockState,
    Brightness,
    Percentage,
    ColorTemperature,
    Temperature,
    TargetSetpoint,
    ThermostatMode,
    DetectionState,
}

/// One `context.properties` entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertyState {
    pub name: PropertyName,
    pub namespace: Namespace,
    pub value: Value,
}

impl PropertyState {
    pub fn new(namespace: Namespace, name: PropertyName, value: impl Into<Value>) -> PropertyState {
        PropertyState {
            name,
            namespace,
            value: value.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Temperature {
    pub value: f64,
    pub scale: TemperatureScale,
}

impl Temperature {
    pub fn celsius(value: f64) -> Temperature {
        Temperature {
            value,
            scale: TemperatureScale::Celsius,
        }
    }

    /// Absolute temperature in degrees Celsius.
    pub fn to_celsius(self) -> f64 {
        match self.scale {
            TemperatureScale::Celsius => self.value,
            TemperatureScale::Fahrenheit => (self.value - 32.0) / 1.8,
            TemperatureScale::Kelvin => self.value - 273.15,
        }
    }

    /// Temperature difference in Celsius degrees.
    pub fn interval_to_celsius(self) -> f64 {
        match self.scale {
            TemperatureScale::Celsius | TemperatureScale::Kelvin => self.value,
            TemperatureScale::Fahrenheit => self.value / 1.8,
        }
    }
}

impl From<Temperature> for Value {
    fn from(temperature: Temperature) -> Value {
        serde_json::json!({
            "value": temperature.value,
            "scale": temperature.scale,
        })
    }
}
