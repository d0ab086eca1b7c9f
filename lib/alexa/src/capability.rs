use serde::ser::SerializeMap;
use serde::Serialize;
use serde_json::Value;

use crate::{Namespace, PropertyName, PropertyState};

const INTERFACE_VERSION: &str = "3";

/// Supplies current property values for state reports.
///
/// Implemented by whatever owns the capabilities; capabilities only ever
/// read through it.
pub trait PropertySource {
    fn property(&self, name: PropertyName) -> Option<Value>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Interface {
    PowerController,
    LockController,
    SceneController { supports_deactivation: bool },
    BrightnessController,
    ColorController,
    ColorTemperatureController,
    PercentageController,
    TemperatureSensor,
    ThermostatController { modes: Option<Vec<String>> },
    ContactSensor,
}

impl Interface {
    pub fn namespace(&self) -> Namespace {
        match self {
            Interface::PowerController => Namespace::PowerController,
            Interface::LockController => Namespace::LockController,
            Interface::SceneController { .. } => Namespace::SceneController,
            Interface::BrightnessController => Namespace::BrightnessController,
            Interface::ColorController => Namespace::ColorController,
            Interface::ColorTemperatureController => Namespace::ColorTemperatureController,
            Interface::PercentageController => Namespace::PercentageController,
            Interface::TemperatureSensor => Namespace::TemperatureSensor,
            Interface::ThermostatController { .. } => Namespace::ThermostatController,
            Interface::ContactSensor => Namespace::ContactSensor,
        }
    }

    pub fn properties_supported(&self) -> &'static [PropertyName] {
        match self {
            Interface::PowerController => &[PropertyName::PowerState],
            Interface::LockController => &[PropertyName::LockState],
            Interface::BrightnessController => &[PropertyName::Brightness],
            Interface::PercentageController => &[PropertyName::Percentage],
            Interface::TemperatureSensor => &[PropertyName::Temperature],
            Interface::ThermostatController { .. } => {
                &[PropertyName::TargetSetpoint, PropertyName::ThermostatMode]
            }
            Interface::ContactSensor => &[PropertyName::DetectionState],
            Interface::SceneController { .. }
            | Interface::ColorController
            | Interface::ColorTemperatureController => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Capability {
    interface: Interface,
}

impl Capability {
    pub fn new(interface: Interface) -> Capability {
        Capability { interface }
    }

    pub fn power_controller() -> Capability {
        Capability::new(Interface::PowerController)
    }

    pub fn lock_controller() -> Capability {
        Capability::new(Interface::LockController)
    }

    pub fn scene_controller(supports_deactivation: bool) -> Capability {
        Capability::new(Interface::SceneController {
            supports_deactivation,
        })
    }

    pub fn brightness_controller() -> Capability {
        Capability::new(Interface::BrightnessController)
    }

    pub fn color_controller() -> Capability {
        Capability::new(Interface::ColorController)
    }

    pub fn color_temperature_controller() -> Capability {
        Capability::new(Interface::ColorTemperatureController)
    }

    pub fn percentage_controller() -> Capability {
        Capability::new(Interface::PercentageController)
    }

    pub fn temperature_sensor() -> Capability {
        Capability::new(Interface::TemperatureSensor)
    }

    pub fn thermostat_controller() -> Capability {
        Capability::new(Interface::ThermostatController { modes: None })
    }

    pub fn contact_sensor() -> Capability {
        Capability::new(Interface::ContactSensor)
    }

    /// Attaches the thermostat mode list; ignored by other interfaces.
    pub fn with_modes<I, S>(self, modes: I) -> Capability
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut value = self;

        if let Interface::ThermostatController {
            modes: ref mut attached,
        } = value.interface
        {
            *attached = Some(modes.into_iter().map(Into::into).collect());
        }

        value
    }

    pub fn interface(&self) -> &Interface {
        &self.interface
    }

    pub fn name(&self) -> Namespace {
        self.interface.namespace()
    }

    pub fn version(&self) -> &'static str {
        INTERFACE_VERSION
    }

    pub fn properties_supported(&self) -> &'static [PropertyName] {
        self.interface.properties_supported()
    }

    pub fn supports_deactivation(&self) -> Option<bool> {
        match self.interface {
            Interface::SceneController {
                supports_deactivation,
            } => Some(supports_deactivation),
            _ => None,
        }
    }

    pub fn configuration(&self) -> Option<Value> {
        match &self.interface {
            Interface::ThermostatController { modes: Some(modes) } => Some(serde_json::json!({
                "supportsScheduling": false,
                "supportedModes": modes,
            })),
            _ => None,
        }
    }

    /// Current values of the supported properties, skipping any the source
    /// cannot provide right now.
    pub fn serialize_properties<'a, S>(
        &'a self,
        source: &'a S,
    ) -> impl Iterator<Item = PropertyState> + 'a
    where
        S: PropertySource + ?Sized,
    {
        let namespace = self.name();

        self.properties_supported().iter().filter_map(move |&name| {
            source
                .property(name)
                .map(|value| PropertyState::new(namespace, name, value))
        })
    }
}

#[derive(Serialize)]
struct SupportedProperty {
    name: PropertyName,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Properties {
    supported: Vec<SupportedProperty>,
    proactively_reported: bool,
    retrievable: bool,
}

/// Discovery representation.
impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry("type", "AlexaInterface")?;
        map.serialize_entry("interface", &self.name())?;
        map.serialize_entry("version", self.version())?;

        if let Interface::SceneController {
            supports_deactivation,
        } = self.interface
        {
            map.serialize_entry("proactivelyReported", &true)?;
            map.serialize_entry("supportsDeactivation", &supports_deactivation)?;
            return map.end();
        }

        map.serialize_entry(
            "properties",
            &Properties {
                supported: self
                    .properties_supported()
                    .iter()
                    .map(|&name| SupportedProperty { name })
                    .collect(),
                proactively_reported: true,
                retrievable: true,
            },
        )?;

        if let Some(configuration) = self.configuration() {
            map.serialize_entry("configuration", &configuration)?;
        }

        if let Some(supports_deactivation) = self.supports_deactivation() {
            map.serialize_entry("supportsDeactivation", &supports_deactivation)?;
        }

        map.end()
    }
}
