use alexa::{Capability, DisplayCategory};
use domoticz::{Device, Scene};

use crate::pragma::Pragmas;
use crate::{AdapterKind, Endpoint, EndpointId};

/// Manufacturer reported for scenes and groups.
pub const SKILL_NAME: &str = "Alexicz";

/// Which backend records discovery exposes and how they are named.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryOptions {
    /// Only devices on this room plan.
    pub plan_id: Option<i64>,
    pub include_scenes_groups: bool,
    /// Prepended to every friendly name.
    pub prefix_name: Option<String>,
}

impl DiscoveryOptions {
    fn friendly_name(&self, name: String) -> String {
        match &self.prefix_name {
            Some(prefix) => format!("{prefix}{name}"),
            None => name,
        }
    }

    fn excludes(&self, device: &Device) -> bool {
        if device.plan_id.is_empty() || device.plan_id == "0" {
            return true;
        }

        match self.plan_id {
            Some(plan_id) => !device.plan_ids.contains(&plan_id),
            None => false,
        }
    }
}

fn add_dimmer(endpoint: &mut Endpoint, device: &Device) {
    if device.have_dimmer {
        endpoint.add_capability(Capability::percentage_controller());
        endpoint.add_capability(Capability::brightness_controller());
    }
}

fn add_color(endpoint: &mut Endpoint) {
    endpoint.add_capability(Capability::color_controller());
    endpoint.add_capability(Capability::color_temperature_controller());
}

/// Maps a raw device record onto an adapter, or `None` when the record is
/// filtered out or matches no rule.
pub fn classify_device(device: &Device, options: &DiscoveryOptions) -> Option<Endpoint> {
    if options.excludes(device) {
        return None;
    }

    let pragmas = Pragmas::parse(&device.description);
    let device_type = device.r#type.as_str();
    let switch_type = device.switch_type.as_str();
    let is_rgb = device.sub_type.starts_with("RGB");

    // (adapter, categories, colour capabilities)
    let (kind, categories, color): (AdapterKind, &[DisplayCategory], bool) =
        if device_type.starts_with("Lighting") || device_type.starts_with("Color Switch") {
            if switch_type == "On/Off" {
                (AdapterKind::SwitchLight, &[DisplayCategory::Switch], false)
            } else {
                (AdapterKind::SwitchLight, &[DisplayCategory::Light], is_rgb)
            }
        } else if device_type.starts_with("Light/Switch") {
            if switch_type == "Selector" && pragmas.extra.is_some() {
                (
                    AdapterKind::SelectorThermostat,
                    &[DisplayCategory::Thermostat],
                    false,
                )
            } else if switch_type.starts_with("Door") {
                (AdapterKind::Lock, &[DisplayCategory::Switch], false)
            } else if switch_type.starts_with("Contact") {
                (AdapterKind::Contact, &[DisplayCategory::ContactSensor], false)
            } else if is_rgb {
                (
                    AdapterKind::SwitchLight,
                    &[DisplayCategory::Switch, DisplayCategory::Light],
                    true,
                )
            } else {
                (AdapterKind::SwitchLight, &[DisplayCategory::Switch], false)
            }
        } else if device_type.starts_with("Blind") {
            (AdapterKind::Blind, &[DisplayCategory::Switch], false)
        } else if device_type.starts_with("RFY") {
            (AdapterKind::Rfy, &[DisplayCategory::Switch], false)
        } else if device_type.starts_with("Lock") {
            (AdapterKind::Lock, &[DisplayCategory::Switch], false)
        } else if device_type.starts_with("Contact") {
            (AdapterKind::Contact, &[DisplayCategory::ContactSensor], false)
        } else if device_type.starts_with("Temp") {
            (
                AdapterKind::TemperatureSensor,
                &[DisplayCategory::TemperatureSensor],
                false,
            )
        } else if device_type.starts_with("Therm") {
            (
                AdapterKind::Thermostat,
                &[DisplayCategory::Thermostat, DisplayCategory::TemperatureSensor],
                false,
            )
        } else {
            return None;
        };

    let friendly_name = options.friendly_name(pragmas.name.unwrap_or_else(|| device.name.clone()));
    let description = pragmas.description.unwrap_or_else(|| device.r#type.clone());

    let mut endpoint = Endpoint::new(EndpointId::new(kind, device.idx.as_str())).with_identity(
        friendly_name,
        description,
        device.hardware_name.as_str(),
    );

    for &category in categories {
        endpoint.add_display_category(category);
    }

    match kind {
        AdapterKind::SwitchLight => {
            add_dimmer(&mut endpoint, device);

            if color {
                add_color(&mut endpoint);
            }
        }
        AdapterKind::Blind | AdapterKind::Rfy if device.have_dimmer => {
            endpoint.add_capability(Capability::percentage_controller());
        }
        AdapterKind::SelectorThermostat => {
            let modes: Vec<String> = device.level_names().map(str::to_uppercase).collect();
            if !modes.is_empty() {
                endpoint.set_thermostat_modes(&modes);
            }
        }
        _ => (),
    }

    if let Some(extra) = pragmas.extra {
        endpoint.add_cookies([("extra".to_string(), extra)]);
    }

    Some(endpoint)
}

/// Scenes and groups become scene triggers; anything else is skipped.
pub fn classify_scene(scene: &Scene, options: &DiscoveryOptions) -> Option<Endpoint> {
    let kind = if scene.r#type.starts_with("Scene") {
        AdapterKind::Scene
    } else if scene.r#type.starts_with("Group") {
        AdapterKind::Group
    } else {
        return None;
    };

    let pragmas = Pragmas::parse(&scene.description);
    let friendly_name = options.friendly_name(pragmas.name.unwrap_or_else(|| scene.name.clone()));
    let description = pragmas.description.unwrap_or_else(|| scene.r#type.clone());

    let mut endpoint = Endpoint::new(EndpointId::new(kind, scene.idx.as_str())).with_identity(
        friendly_name,
        description,
        SKILL_NAME,
    );
    endpoint.add_display_category(DisplayCategory::SceneTrigger);

    if let Some(extra) = pragmas.extra {
        endpoint.add_cookies([("extra".to_string(), extra)]);
    }

    Some(endpoint)
}
