use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::{Credentials, OktaConfig};
use crate::Result;

/// Looks up per-user backend credentials stored in an Okta profile.
pub struct Okta {
    base_url: Url,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub domoticz_url: Option<String>,
    pub domoticz_username: Option<String>,
    pub domoticz_password: Option<String>,
}

#[derive(Deserialize)]
struct UserInfo {
    sub: String,
}

#[derive(Deserialize)]
struct User {
    #[serde(default)]
    profile: Profile,
}

impl Okta {
    pub fn new(config: &OktaConfig, accept_invalid_certs: bool) -> Result<Okta> {
        let mut base_url = Url::parse(&config.url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;

        Ok(Okta {
            base_url,
            api_key: config.api_key.clone(),
            client,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, authorization: String) -> Result<T> {
        let url = self.base_url.join(path)?;
        debug!("Okta call {url}");

        let body = self
            .client
            .get(url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Profile of the user owning `token`.
    pub async fn user_profile(&self, token: &str) -> Result<Profile> {
        let info: UserInfo = self
            .get("oauth2/default/v1/userinfo", format!("Bearer {token}"))
            .await?;

        let path = format!(
            "api/v1/users/{}",
            url::form_urlencoded::byte_serialize(info.sub.as_bytes()).collect::<String>()
        );
        let user: User = self.get(&path, format!("SSWS {}", self.api_key)).await?;

        Ok(user.profile)
    }
}

impl Profile {
    /// Replaces whichever credentials the profile defines.
    pub fn apply(self, credentials: Credentials) -> Credentials {
        Credentials {
            url: self.domoticz_url.unwrap_or(credentials.url),
            username: self.domoticz_username.unwrap_or(credentials.username),
            password: self.domoticz_password.unwrap_or(credentials.password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    fn configured() -> Credentials {
        Credentials {
            url: "http://localhost:8080/".to_string(),
            username: "local".to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn test_profile_overrides_credentials() {
        let user: User = from_value(json!({
            "id": "00u1",
            "profile": {
                "login": "someone@example.com",
                "domoticzUrl": "https://remote.example:8443",
                "domoticzUsername": "remote"
            }
        }))
        .unwrap();

        assert_eq!(
            user.profile.apply(configured()),
            Credentials {
                url: "https://remote.example:8443".to_string(),
                username: "remote".to_string(),
                password: "pw".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_profile_keeps_credentials() {
        assert_eq!(Profile::default().apply(configured()), configured());
    }

    #[test]
    fn test_base_url() {
        let okta = Okta::new(
            &OktaConfig {
                url: "https://example.okta.com".to_string(),
                api_key: "key".to_string(),
            },
            false,
        )
        .unwrap();

        assert_eq!(
            okta.base_url.join("oauth2/default/v1/userinfo").unwrap().as_str(),
            "https://example.okta.com/oauth2/default/v1/userinfo"
        );
    }
}
