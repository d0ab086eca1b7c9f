use async_trait::async_trait;

use crate::{Device, Error, Result, Rgb, Scene, SwitchCommand};

/// Home automation operations the bridge depends on.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn devices(&self) -> Result<Vec<Device>>;
    async fn scenes(&self) -> Result<Vec<Scene>>;
    async fn device(&self, idx: &str) -> Result<Device>;

    async fn set_switch(&self, idx: &str, command: SwitchCommand) -> Result<()>;
    async fn set_level(&self, idx: &str, level: i64) -> Result<()>;
    async fn set_color(&self, idx: &str, rgb: Rgb, brightness: u8) -> Result<()>;
    async fn set_kelvin_level(&self, idx: &str, kelvin: f64) -> Result<()>;
    async fn set_scene_switch(&self, idx: &str, command: SwitchCommand) -> Result<()>;
    async fn set_temperature(&self, idx: &str, value: f64) -> Result<()>;

    async fn set_level_by_name(&self, idx: &str, name: &str) -> Result<()> {
        let device = self.device(idx).await?;
        let level = device
            .level_for_name(name)
            .ok_or_else(|| Error::UnknownLevel {
                idx: idx.to_string(),
                name: name.to_string(),
            })?;

        self.set_level(idx, level).await
    }
}
