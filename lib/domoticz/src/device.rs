use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw device record as returned by `type=devices`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Device {
    #[serde(rename = "idx", deserialize_with = "lenient::string")]
    pub idx: String,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub sub_type: String,
    #[serde(default)]
    pub switch_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub hardware_name: String,

    #[serde(default, deserialize_with = "lenient::integer")]
    pub level: i64,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub max_dim_level: i64,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub level_int: i64,
    #[serde(default)]
    pub level_names: String,
    #[serde(default)]
    pub have_dimmer: bool,

    #[serde(rename = "PlanID", default, deserialize_with = "lenient::string")]
    pub plan_id: String,
    #[serde(rename = "PlanIDs", default)]
    pub plan_ids: Vec<i64>,

    #[serde(default, deserialize_with = "lenient::float")]
    pub temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub set_point: Option<f64>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Device {
    pub fn is_on(&self) -> bool {
        self.status == "On"
    }

    pub fn level_names(&self) -> impl Iterator<Item = &str> {
        self.level_names.split('|').filter(|name| !name.is_empty())
    }

    /// Name of the currently selected selector level.
    pub fn level_name(&self) -> Option<&str> {
        if self.level_int <= 0 {
            return None;
        }

        let index = usize::try_from(self.level / self.level_int).ok()?;
        self.level_names.split('|').nth(index)
    }

    /// Selector level for `name`, matched case-insensitively.
    pub fn level_for_name(&self, name: &str) -> Option<i64> {
        self.level_names
            .split('|')
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|index| index as i64 * self.level_int)
    }
}

/// Raw scene or group record as returned by `type=scenes`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Scene {
    #[serde(rename = "idx", deserialize_with = "lenient::string")]
    pub idx: String,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub status: String,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Domoticz is inconsistent about quoting numbers.
mod lenient {
    use super::*;

    struct Lenient;

    enum Raw {
        Int(i64),
        Float(f64),
        Str(String),
        Null,
    }

    impl<'de> Visitor<'de> for Lenient {
        type Value = Raw;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or a string")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Raw, E> {
            Ok(Raw::Int(v as i64))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Raw, E> {
            Ok(Raw::Int(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Raw, E> {
            i64::try_from(v)
                .map(Raw::Int)
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Raw, E> {
            Ok(Raw::Float(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Raw, E> {
            Ok(Raw::Str(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Raw, E> {
            Ok(Raw::Null)
        }

        fn visit_none<E: de::Error>(self) -> Result<Raw, E> {
            Ok(Raw::Null)
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match deserializer.deserialize_any(Lenient)? {
            Raw::Int(v) => v.to_string(),
            Raw::Float(v) => v.to_string(),
            Raw::Str(v) => v,
            Raw::Null => String::new(),
        })
    }

    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match deserializer.deserialize_any(Lenient)? {
            Raw::Int(v) => Ok(v),
            Raw::Float(v) => Ok(v as i64),
            Raw::Str(v) => v
                .trim()
                .parse()
                .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&v), &"an integer")),
            Raw::Null => Ok(0),
        }
    }

    pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match deserializer.deserialize_any(Lenient)? {
            Raw::Int(v) => Ok(Some(v as f64)),
            Raw::Float(v) => Ok(Some(v)),
            Raw::Str(v) => v
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&v), &"a number")),
            Raw::Null => Ok(None),
        }
    }
}
