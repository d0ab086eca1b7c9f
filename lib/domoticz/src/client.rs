use async_trait::async_trait;
use log::debug;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{Backend, Device, Error, Query, Result, Rgb, Scene, SwitchCommand};

#[derive(Deserialize)]
struct ApiResponse<T> {
    status: String,

    #[serde(default = "Vec::new")]
    result: Vec<T>,

    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct Ignored {}

pub struct Client {
    base_url: Url,
    username: String,
    password: String,
    inner: reqwest::Client,
}

impl Client {
    pub fn new(
        url: &str,
        username: impl Into<String>,
        password: impl Into<String>,
        accept_invalid_certs: bool,
    ) -> Result<Client> {
        let mut base_url = Url::parse(url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let inner = reqwest::Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;

        Ok(Client {
            base_url,
            username: username.into(),
            password: password.into(),
            inner,
        })
    }

    pub fn url_for(&self, query: &Query) -> Result<Url> {
        let mut url = self.base_url.join("json.htm")?;
        url.set_query(Some(&query.to_string()));
        Ok(url)
    }

    async fn call<T: DeserializeOwned>(&self, query: Query<'_>) -> Result<Vec<T>> {
        let url = self.url_for(&query)?;
        debug!("GET {url}");

        let mut request = self.inner.get(url);
        if !self.username.is_empty() {
            request = request.basic_auth(&self.username, Some(&self.password));
        }

        let body = request.send().await?.error_for_status()?.bytes().await?;
        let response: ApiResponse<T> = serde_json::from_slice(&body)?;

        if response.status != "OK" {
            let reason = response
                .message
                .or(response.title)
                .unwrap_or_else(|| response.status.clone());
            return Err(Error::Api(reason));
        }

        Ok(response.result)
    }

    async fn command(&self, query: Query<'_>) -> Result<()> {
        self.call::<Ignored>(query).await.map(|_| ())
    }
}

#[async_trait]
impl Backend for Client {
    async fn devices(&self) -> Result<Vec<Device>> {
        self.call(Query::Devices).await
    }

    async fn scenes(&self) -> Result<Vec<Scene>> {
        self.call(Query::Scenes).await
    }

    async fn device(&self, idx: &str) -> Result<Device> {
        self.call(Query::Device { idx })
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(idx.to_string()))
    }

    async fn set_switch(&self, idx: &str, command: SwitchCommand) -> Result<()> {
        self.command(Query::SwitchLight { idx, command }).await
    }

    async fn set_level(&self, idx: &str, level: i64) -> Result<()> {
        self.command(Query::SetLevel { idx, level }).await
    }

    async fn set_color(&self, idx: &str, rgb: Rgb, brightness: u8) -> Result<()> {
        self.command(Query::SetColor {
            idx,
            rgb,
            brightness,
        })
        .await
    }

    async fn set_kelvin_level(&self, idx: &str, kelvin: f64) -> Result<()> {
        self.command(Query::SetKelvinLevel { idx, kelvin }).await
    }

    async fn set_scene_switch(&self, idx: &str, command: SwitchCommand) -> Result<()> {
        self.command(Query::SwitchScene { idx, command }).await
    }

    async fn set_temperature(&self, idx: &str, value: f64) -> Result<()> {
        self.command(Query::UpdateDevice { idx, value }).await
    }
}
