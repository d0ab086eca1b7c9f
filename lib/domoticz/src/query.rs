use std::fmt;

use serde::{Deserialize, Serialize};
use str_derive::Str;
use url::form_urlencoded::byte_serialize;

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq)]
pub enum SwitchCommand {
    On,
    Off,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Rgb {
        Rgb { red, green, blue }
    }

    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// One call of the `json.htm` API, rendered as its query string.
#[derive(Debug, Clone, PartialEq)]
pub enum Query<'a> {
    Devices,
    Scenes,
    Device {
        idx: &'a str,
    },
    SwitchLight {
        idx: &'a str,
        command: SwitchCommand,
    },
    SetLevel {
        idx: &'a str,
        level: i64,
    },
    SetColor {
        idx: &'a str,
        rgb: Rgb,
        brightness: u8,
    },
    SetKelvinLevel {
        idx: &'a str,
        kelvin: f64,
    },
    SwitchScene {
        idx: &'a str,
        command: SwitchCommand,
    },
    UpdateDevice {
        idx: &'a str,
        value: f64,
    },
}

struct Idx<'a>(&'a str);

impl fmt::Display for Idx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in byte_serialize(self.0.as_bytes()) {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Query::Devices => write!(f, "type=devices&used=true"),
            Query::Scenes => write!(f, "type=scenes"),
            Query::Device { idx } => write!(f, "type=devices&rid={}", Idx(idx)),
            Query::SwitchLight { idx, command } => write!(
                f,
                "type=command&param=switchlight&idx={}&switchcmd={command}",
                Idx(idx)
            ),
            Query::SetLevel { idx, level } => write!(
                f,
                "type=command&param=switchlight&idx={}&switchcmd=Set%20Level&level={level}",
                Idx(idx)
            ),
            Query::SetColor {
                idx,
                rgb,
                brightness,
            } => write!(
                f,
                "type=command&param=setcolbrightnessvalue&idx={}&hex={}&brightness={brightness}&iswhite=false",
                Idx(idx),
                rgb.hex()
            ),
            Query::SetKelvinLevel { idx, kelvin } => write!(
                f,
                "type=command&param=setkelvinlevel&idx={}&kelvin={kelvin}",
                Idx(idx)
            ),
            Query::SwitchScene { idx, command } => write!(
                f,
                "type=command&param=switchscene&idx={}&switchcmd={command}",
                Idx(idx)
            ),
            Query::UpdateDevice { idx, value } => write!(
                f,
                "type=command&param=udevice&idx={}&nvalue=0&svalue={value}",
                Idx(idx)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_queries() {
        assert_eq!(Query::Devices.to_string(), "type=devices&used=true");
        assert_eq!(Query::Scenes.to_string(), "type=scenes");
        assert_eq!(
            Query::Device { idx: "42" }.to_string(),
            "type=devices&rid=42"
        );
    }

    #[test]
    fn test_command_queries() {
        assert_eq!(
            Query::SwitchLight {
                idx: "7",
                command: SwitchCommand::Off
            }
            .to_string(),
            "type=command&param=switchlight&idx=7&switchcmd=Off"
        );
        assert_eq!(
            Query::SetLevel { idx: "7", level: 55 }.to_string(),
            "type=command&param=switchlight&idx=7&switchcmd=Set%20Level&level=55"
        );
        assert_eq!(
            Query::SetColor {
                idx: "7",
                rgb: Rgb::new(255, 10, 0),
                brightness: 80
            }
            .to_string(),
            "type=command&param=setcolbrightnessvalue&idx=7&hex=FF0A00&brightness=80&iswhite=false"
        );
        assert_eq!(
            Query::SetKelvinLevel {
                idx: "7",
                kelvin: 50.0
            }
            .to_string(),
            "type=command&param=setkelvinlevel&idx=7&kelvin=50"
        );
        assert_eq!(
            Query::SwitchScene {
                idx: "3",
                command: SwitchCommand::On
            }
            .to_string(),
            "type=command&param=switchscene&idx=3&switchcmd=On"
        );
        assert_eq!(
            Query::UpdateDevice {
                idx: "9",
                value: 21.5
            }
            .to_string(),
            "type=command&param=udevice&idx=9&nvalue=0&svalue=21.5"
        );
    }

    #[test]
    fn test_idx_is_escaped() {
        assert_eq!(
            Query::Device {
                idx: "1&param=x"
            }
            .to_string(),
            "type=devices&rid=1%26param%3Dx"
        );
    }
}
