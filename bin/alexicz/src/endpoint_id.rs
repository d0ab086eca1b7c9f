use std::fmt;
use std::str::FromStr;

use serde::de::{self, value, Unexpected};
use serde::{Deserialize, Serialize};
use str_derive::Str;

/// Device-type adapter an endpoint is bound to.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    SwitchLight,
    Blind,
    #[serde(rename = "RFY")]
    Rfy,
    Lock,
    Contact,
    TemperatureSensor,
    Thermostat,
    SelectorThermostat,
    Scene,
    Group,
}

/// `<AdapterKind>-<idx>` as exposed to the assistant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointId {
    pub kind: AdapterKind,
    pub idx: String,
}

impl EndpointId {
    pub fn new(kind: AdapterKind, idx: impl Into<String>) -> EndpointId {
        EndpointId {
            kind,
            idx: idx.into(),
        }
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.idx)
    }
}

impl FromStr for EndpointId {
    type Err = value::Error;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let (kind, idx) = id
            .split_once('-')
            .filter(|(_, idx)| !idx.is_empty())
            .ok_or_else(|| de::Error::invalid_value(Unexpected::Str(id), &"kind-idx"))?;

        let kind = AdapterKind::from_str(kind).map_err(|err| {
            de::Error::invalid_value(Unexpected::Str(kind), &err.to_string().as_str())
        })?;

        Ok(EndpointId::new(kind, idx))
    }
}
