//! Configuration loading: a JSON file with environment variable overrides.
//!
//! The file is optional; every key has a default.

use std::path::Path;

use serde::Deserialize;

use crate::{DiscoveryOptions, Error, Result};

pub const DEFAULT_PATH: &str = "configdz.json";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub url: String,
    pub username: String,
    pub password: String,
    pub debug: bool,

    /// Negative values disable the room plan filter.
    #[serde(rename = "planID")]
    pub plan_id: Option<i64>,
    pub include_scenes_groups: bool,
    pub prefix_name: Option<String>,

    pub accept_invalid_certs: bool,
    pub listen: String,

    pub okta: Option<OktaConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OktaConfig {
    pub url: String,
    pub api_key: String,
}

/// Where and as whom the backend is reached for one directive.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: "http://localhost:8080/".to_string(),
            username: String::new(),
            password: String::new(),
            debug: false,
            plan_id: None,
            include_scenes_groups: false,
            prefix_name: None,
            accept_invalid_certs: true,
            listen: "0.0.0.0:5002".to_string(),
            okta: None,
        }
    }
}

impl Config {
    /// Reads `$ALEXICZ_CONFIG` (or `configdz.json`), then applies overrides
    /// from the environment.
    pub fn load() -> Result<Config> {
        let path = std::env::var("ALEXICZ_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());

        let mut config = Config::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Config> {
        match std::fs::read(path.as_ref()) {
            Ok(content) => Ok(serde_json::from_slice(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup("DOMOTICZ_URL") {
            self.url = url;
        }
        if let Some(username) = lookup("DOMOTICZ_USERNAME") {
            self.username = username;
        }
        if let Some(password) = lookup("DOMOTICZ_PASSWORD") {
            self.password = password;
        }
        if let Some(listen) = lookup("ALEXICZ_LISTEN") {
            self.listen = listen;
        }
        if let Some(debug) = lookup("ALEXICZ_DEBUG") {
            self.debug = match debug.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => return Err(Error::Config(format!("ALEXICZ_DEBUG={other}"))),
            };
        }

        Ok(())
    }

    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            plan_id: self.plan_id.filter(|plan_id| *plan_id >= 0),
            include_scenes_groups: self.include_scenes_groups,
            prefix_name: self.prefix_name.clone(),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.url, "http://localhost:8080/");
        assert_eq!(config.listen, "0.0.0.0:5002");
        assert_eq!(config.discovery_options(), DiscoveryOptions::default());
    }

    #[test]
    fn test_file_keys() {
        let config: Config = serde_json::from_str(
            r#"{
                "url": "https://domoticz.home:8443",
                "username": "alexa",
                "password": "secret",
                "debug": true,
                "planID": 3,
                "includeScenesGroups": true,
                "prefixName": "dz ",
                "okta": {"url": "https://example.okta.com", "apiKey": "key"}
            }"#,
        )
        .unwrap();

        assert!(config.debug);
        assert_eq!(
            config.discovery_options(),
            DiscoveryOptions {
                plan_id: Some(3),
                include_scenes_groups: true,
                prefix_name: Some("dz ".to_string()),
            }
        );
        assert_eq!(
            config.credentials(),
            Credentials {
                url: "https://domoticz.home:8443".to_string(),
                username: "alexa".to_string(),
                password: "secret".to_string(),
            }
        );
        assert_eq!(config.okta.unwrap().api_key, "key");
    }

    #[test]
    fn test_negative_plan_disables_filter() {
        let config: Config = serde_json::from_str(r#"{"planID": -1}"#).unwrap();
        assert_eq!(config.discovery_options().plan_id, None);
    }

    #[test]
    fn test_missing_file() {
        let config = Config::from_file("/nonexistent/alexicz/configdz.json").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let env = HashMap::from([
            ("DOMOTICZ_URL", "http://10.0.0.2:8080"),
            ("DOMOTICZ_USERNAME", "user"),
            ("ALEXICZ_DEBUG", "true"),
        ]);

        let mut config = Config::default();
        config
            .apply_overrides(|key| env.get(key).map(|value| value.to_string()))
            .unwrap();

        assert_eq!(config.url, "http://10.0.0.2:8080");
        assert_eq!(config.username, "user");
        assert_eq!(config.password, "");
        assert!(config.debug);

        let invalid = HashMap::from([("ALEXICZ_DEBUG", "maybe")]);
        assert!(matches!(
            config.apply_overrides(|key| invalid.get(key).map(|value| value.to_string())),
            Err(Error::Config(_))
        ));
    }
}
