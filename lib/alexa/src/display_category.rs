use serde::{Deserialize, Serialize};
use str_derive::Str;

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayCategory {
    Light,
    Switch,
    ContactSensor,
    TemperatureSensor,
    Thermostat,
    SceneTrigger,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn test_display_categories() {
        assert_eq!(to_value(DisplayCategory::Light).unwrap(), json!("LIGHT"));
        assert_eq!(
            to_value(DisplayCategory::ContactSensor).unwrap(),
            json!("CONTACT_SENSOR")
        );
        assert_eq!(
            to_value(DisplayCategory::SceneTrigger).unwrap(),
            json!("SCENE_TRIGGER")
        );
        assert_eq!(DisplayCategory::TemperatureSensor.to_string(), "TEMPERATURE_SENSOR");
    }
}
