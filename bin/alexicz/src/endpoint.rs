use std::collections::BTreeMap;
use std::str::FromStr;

use alexa::{
    Capability, Directive, DiscoveryEndpoint, DisplayCategory, PropertyName, PropertySource,
    PropertyState, Temperature,
};
use domoticz::{Backend, Device, SwitchCommand};
use serde_json::{Map, Value};

use crate::color::hsb_to_rgb;
use crate::{AdapterKind, EndpointId, Error, Result};

pub const THERMOSTAT_MODES: [&str; 5] = ["HEAT", "COOL", "AUTO", "ECO", "OFF"];

pub const MIN_KELVIN: i64 = 1000;
pub const MAX_KELVIN: i64 = 10000;

/// One controllable device as the assistant sees it.
#[derive(Debug, Clone)]
pub struct Endpoint {
    id: EndpointId,
    friendly_name: String,
    description: String,
    manufacturer_name: String,
    capabilities: Vec<Capability>,
    display_categories: Vec<DisplayCategory>,
    cookies: BTreeMap<String, String>,
}

fn adapter_capabilities(kind: AdapterKind) -> Vec<Capability> {
    match kind {
        AdapterKind::SwitchLight | AdapterKind::Blind | AdapterKind::Rfy => {
            vec![Capability::power_controller()]
        }
        AdapterKind::Lock => vec![Capability::lock_controller()],
        AdapterKind::Contact => vec![Capability::contact_sensor()],
        AdapterKind::TemperatureSensor => vec![Capability::temperature_sensor()],
        AdapterKind::Thermostat => vec![
            Capability::temperature_sensor(),
            Capability::thermostat_controller().with_modes(THERMOSTAT_MODES),
        ],
        AdapterKind::SelectorThermostat => vec![Capability::thermostat_controller()],
        AdapterKind::Scene => vec![Capability::scene_controller(false)],
        AdapterKind::Group => vec![Capability::scene_controller(true)],
    }
}

impl Endpoint {
    /// Adapter of `id.kind` with the capabilities every such adapter carries.
    pub fn new(id: EndpointId) -> Endpoint {
        Endpoint {
            capabilities: adapter_capabilities(id.kind),
            id,
            friendly_name: String::new(),
            description: String::new(),
            manufacturer_name: String::new(),
            display_categories: vec![],
            cookies: BTreeMap::new(),
        }
    }

    /// Endpoint targeted by a directive, with the full capability set of its
    /// kind and the cookies the directive carried.
    pub fn from_directive(directive: &Directive) -> Result<Endpoint> {
        let target = directive.endpoint.as_ref().ok_or(Error::MissingEndpoint)?;
        let id = EndpointId::from_str(&target.endpoint_id)
            .map_err(|err| Error::EndpointId(err.to_string()))?;

        let mut endpoint = Endpoint::new(id);

        match endpoint.kind() {
            AdapterKind::SwitchLight => {
                endpoint.add_capability(Capability::percentage_controller());
                endpoint.add_capability(Capability::brightness_controller());
                endpoint.add_capability(Capability::color_controller());
                endpoint.add_capability(Capability::color_temperature_controller());
            }
            AdapterKind::Blind | AdapterKind::Rfy => {
                endpoint.add_capability(Capability::percentage_controller());
            }
            _ => (),
        }

        if let Some(cookie) = &target.cookie {
            endpoint.add_cookies(cookie.clone());
        }

        Ok(endpoint)
    }

    pub fn with_identity(
        self,
        friendly_name: impl Into<String>,
        description: impl Into<String>,
        manufacturer_name: impl Into<String>,
    ) -> Endpoint {
        Endpoint {
            friendly_name: friendly_name.into(),
            description: description.into(),
            manufacturer_name: manufacturer_name.into(),
            ..self
        }
    }

    pub fn id(&self) -> &EndpointId {
        &self.id
    }

    pub fn kind(&self) -> AdapterKind {
        self.id.kind
    }

    pub fn idx(&self) -> &str {
        &self.id.idx
    }

    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn manufacturer_name(&self) -> &str {
        &self.manufacturer_name
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn display_categories(&self) -> &[DisplayCategory] {
        &self.display_categories
    }

    pub fn cookies(&self) -> &BTreeMap<String, String> {
        &self.cookies
    }

    pub fn add_capability(&mut self, capability: Capability) {
        self.capabilities.push(capability);
    }

    pub fn add_display_category(&mut self, category: DisplayCategory) {
        if !self.display_categories.contains(&category) {
            self.display_categories.push(category);
        }
    }

    pub fn add_cookies(&mut self, cookies: impl IntoIterator<Item = (String, String)>) {
        self.cookies.extend(cookies);
    }

    /// Replaces the supported mode list of any thermostat capability.
    pub fn set_thermostat_modes(&mut self, modes: &[String]) {
        self.capabilities = std::mem::take(&mut self.capabilities)
            .into_iter()
            .map(|capability| capability.with_modes(modes.iter().cloned()))
            .collect();
    }

    pub fn discovery(&self) -> DiscoveryEndpoint<'_> {
        DiscoveryEndpoint {
            endpoint_id: self.id.to_string(),
            friendly_name: &self.friendly_name,
            description: &self.description,
            manufacturer_name: &self.manufacturer_name,
            display_categories: &self.display_categories,
            additional_appliance_details: Map::new(),
            capabilities: &self.capabilities,
            cookie: &self.cookies,
        }
    }

    /// Whether any capability reports properties at all.
    pub fn has_properties(&self) -> bool {
        self.capabilities
            .iter()
            .any(|capability| !capability.properties_supported().is_empty())
    }

    /// Normalized value of `name` read from the raw backend record.
    pub fn property(&self, name: PropertyName, device: &Device) -> Option<Value> {
        let temperature = |value: Option<f64>| value.map(|v| Value::from(Temperature::celsius(v)));

        match name {
            PropertyName::PowerState => {
                Some(if device.is_on() { "ON" } else { "OFF" }.into())
            }
            PropertyName::LockState => {
                Some(if device.is_on() { "LOCKED" } else { "UNLOCKED" }.into())
            }
            PropertyName::DetectionState => Some(
                if device.status == "Closed" {
                    "NOT_DETECTED"
                } else {
                    "DETECTED"
                }
                .into(),
            ),
            PropertyName::Brightness | PropertyName::Percentage => {
                level_fraction(device).map(|fraction| Value::from((fraction * 100.0).round() as i64))
            }
            PropertyName::ColorTemperature => level_fraction(device).map(|fraction| {
                let span = (MAX_KELVIN - MIN_KELVIN) as f64;
                Value::from((MIN_KELVIN as f64 + span * fraction).round() as i64)
            }),
            PropertyName::Temperature => match self.kind() {
                AdapterKind::Thermostat => temperature(device.set_point),
                _ => temperature(device.temp),
            },
            PropertyName::TargetSetpoint => temperature(device.set_point),
            PropertyName::ThermostatMode => match self.kind() {
                AdapterKind::SelectorThermostat => device
                    .level_name()
                    .map(|mode| Value::from(mode.to_uppercase())),
                _ => None,
            },
        }
    }

    pub fn state<'a>(&'a self, device: &'a Device) -> EndpointState<'a> {
        EndpointState {
            endpoint: self,
            device,
        }
    }

    /// Every currently available property, in capability order.
    pub fn properties(&self, device: &Device) -> Vec<PropertyState> {
        let state = self.state(device);

        self.capabilities
            .iter()
            .flat_map(|capability| capability.serialize_properties(&state))
            .collect()
    }

    fn unsupported(&self, operation: &'static str) -> Error {
        Error::Unsupported {
            kind: self.kind(),
            operation,
        }
    }

    pub async fn turn_on(&self, backend: &dyn Backend) -> Result<()> {
        let command = match self.kind() {
            AdapterKind::SwitchLight => SwitchCommand::On,
            // blinds go up on "Off"
            AdapterKind::Blind | AdapterKind::Rfy => SwitchCommand::Off,
            _ => return Err(self.unsupported("turnOn")),
        };

        Ok(backend.set_switch(self.idx(), command).await?)
    }

    pub async fn turn_off(&self, backend: &dyn Backend) -> Result<()> {
        let command = match self.kind() {
            AdapterKind::SwitchLight => SwitchCommand::Off,
            AdapterKind::Blind | AdapterKind::Rfy => SwitchCommand::On,
            _ => return Err(self.unsupported("turnOff")),
        };

        Ok(backend.set_switch(self.idx(), command).await?)
    }

    pub async fn set_brightness(&self, backend: &dyn Backend, brightness: i64) -> Result<()> {
        match self.kind() {
            AdapterKind::SwitchLight => Ok(backend.set_level(self.idx(), brightness).await?),
            _ => Err(self.unsupported("setBrightness")),
        }
    }

    pub async fn set_percentage(&self, backend: &dyn Backend, percentage: i64) -> Result<()> {
        match self.kind() {
            AdapterKind::SwitchLight | AdapterKind::Blind | AdapterKind::Rfy => {
                Ok(backend.set_level(self.idx(), percentage).await?)
            }
            _ => Err(self.unsupported("setPercentage")),
        }
    }

    pub async fn set_color(
        &self,
        backend: &dyn Backend,
        hue: f64,
        saturation: f64,
        brightness: f64,
    ) -> Result<()> {
        match self.kind() {
            AdapterKind::SwitchLight => {
                let rgb = hsb_to_rgb(hue, saturation, brightness);
                let level = (100.0 * brightness).clamp(0.0, 100.0) as u8;

                Ok(backend.set_color(self.idx(), rgb, level).await?)
            }
            _ => Err(self.unsupported("setColor")),
        }
    }

    pub async fn set_color_temperature(&self, backend: &dyn Backend, kelvin: i64) -> Result<()> {
        match self.kind() {
            AdapterKind::SwitchLight => Ok(backend
                .set_kelvin_level(self.idx(), kelvin_level(kelvin))
                .await?),
            _ => Err(self.unsupported("setColorTemperature")),
        }
    }

    pub async fn activate(&self, backend: &dyn Backend) -> Result<()> {
        match self.kind() {
            AdapterKind::Scene | AdapterKind::Group => Ok(backend
                .set_scene_switch(self.idx(), SwitchCommand::On)
                .await?),
            _ => Err(self.unsupported("activate")),
        }
    }

    pub async fn deactivate(&self, backend: &dyn Backend) -> Result<()> {
        match self.kind() {
            AdapterKind::Scene | AdapterKind::Group => Ok(backend
                .set_scene_switch(self.idx(), SwitchCommand::Off)
                .await?),
            _ => Err(self.unsupported("deactivate")),
        }
    }

    pub async fn lock(&self, backend: &dyn Backend) -> Result<()> {
        match self.kind() {
            AdapterKind::Lock => Ok(backend.set_switch(self.idx(), SwitchCommand::On).await?),
            _ => Err(self.unsupported("lock")),
        }
    }

    pub async fn unlock(&self, backend: &dyn Backend) -> Result<()> {
        match self.kind() {
            AdapterKind::Lock => Ok(backend.set_switch(self.idx(), SwitchCommand::Off).await?),
            _ => Err(self.unsupported("unlock")),
        }
    }

    /// `celsius` is ignored by sensors and selector thermostats.
    pub async fn set_target_setpoint(&self, backend: &dyn Backend, celsius: f64) -> Result<()> {
        match self.kind() {
            AdapterKind::Thermostat => Ok(backend.set_temperature(self.idx(), celsius).await?),
            AdapterKind::TemperatureSensor | AdapterKind::SelectorThermostat => Ok(()),
            _ => Err(self.unsupported("setTargetSetpoint")),
        }
    }

    /// Only selector thermostats switch modes; other thermostats accept and
    /// ignore the request.
    pub async fn set_thermostat_mode(&self, backend: &dyn Backend, mode: &str) -> Result<()> {
        match self.kind() {
            AdapterKind::SelectorThermostat => {
                Ok(backend.set_level_by_name(self.idx(), mode).await?)
            }
            AdapterKind::Thermostat | AdapterKind::TemperatureSensor => Ok(()),
            _ => Err(self.unsupported("setThermostatMode")),
        }
    }
}

/// Raw level as a fraction of the dimmer range.
fn level_fraction(device: &Device) -> Option<f64> {
    if device.max_dim_level <= 0 {
        return None;
    }

    Some(device.level as f64 / device.max_dim_level as f64)
}

/// Kelvin in `[1000, 10000]` onto the backend's `[0, 100]` white level.
pub fn kelvin_level(kelvin: i64) -> f64 {
    let kelvin = kelvin.clamp(MIN_KELVIN, MAX_KELVIN);
    ((kelvin - MIN_KELVIN) as f64 * 100.0 / (MAX_KELVIN - MIN_KELVIN) as f64).round()
}

/// An endpoint paired with the record its property values are read from.
pub struct EndpointState<'a> {
    endpoint: &'a Endpoint,
    device: &'a Device,
}

impl PropertySource for EndpointState<'_> {
    fn property(&self, name: PropertyName) -> Option<Value> {
        self.endpoint.property(name, self.device)
    }
}
