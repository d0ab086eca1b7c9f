use std::sync::Mutex;

use async_trait::async_trait;
use domoticz::{Backend, Device, Error, Result, Rgb, Scene, SwitchCommand};

/// In-memory backend recording every command it receives.
#[derive(Default)]
pub struct FakeBackend {
    devices: Mutex<Vec<Device>>,
    scenes: Vec<Scene>,
    commands: Mutex<Vec<String>>,
    offline: bool,
}

impl FakeBackend {
    pub fn with_devices(devices: Vec<Device>) -> FakeBackend {
        FakeBackend {
            devices: Mutex::new(devices),
            ..Default::default()
        }
    }

    pub fn with_scenes(self, scenes: Vec<Scene>) -> FakeBackend {
        FakeBackend { scenes, ..self }
    }

    /// Every call fails as if the server were unreachable.
    pub fn offline() -> FakeBackend {
        FakeBackend {
            offline: true,
            ..Default::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    fn record(&self, command: String) -> Result<()> {
        if self.offline {
            return Err(Error::Api("offline".to_string()));
        }

        self.commands.lock().unwrap().push(command);
        Ok(())
    }

    fn update(&self, idx: &str, change: impl FnOnce(&mut Device)) {
        let mut devices = self.devices.lock().unwrap();
        if let Some(device) = devices.iter_mut().find(|device| device.idx == idx) {
            change(device);
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn devices(&self) -> Result<Vec<Device>> {
        if self.offline {
            return Err(Error::Api("offline".to_string()));
        }

        Ok(self.devices.lock().unwrap().clone())
    }

    async fn scenes(&self) -> Result<Vec<Scene>> {
        self.record("scenes".to_string())?;
        Ok(self.scenes.clone())
    }

    async fn device(&self, idx: &str) -> Result<Device> {
        if self.offline {
            return Err(Error::Api("offline".to_string()));
        }

        self.devices
            .lock()
            .unwrap()
            .iter()
            .find(|device| device.idx == idx)
            .cloned()
            .ok_or_else(|| Error::NotFound(idx.to_string()))
    }

    async fn set_switch(&self, idx: &str, command: SwitchCommand) -> Result<()> {
        self.record(format!("switchlight {idx} {command}"))?;
        self.update(idx, |device| device.status = command.to_string());
        Ok(())
    }

    async fn set_level(&self, idx: &str, level: i64) -> Result<()> {
        self.record(format!("setlevel {idx} {level}"))?;
        self.update(idx, |device| device.level = level);
        Ok(())
    }

    async fn set_color(&self, idx: &str, rgb: Rgb, brightness: u8) -> Result<()> {
        self.record(format!(
            "setcolbrightnessvalue {idx} {} {brightness}",
            rgb.hex()
        ))
    }

    async fn set_kelvin_level(&self, idx: &str, kelvin: f64) -> Result<()> {
        self.record(format!("setkelvinlevel {idx} {kelvin}"))?;
        self.update(idx, |device| device.level = kelvin as i64);
        Ok(())
    }

    async fn set_scene_switch(&self, idx: &str, command: SwitchCommand) -> Result<()> {
        self.record(format!("switchscene {idx} {command}"))
    }

    async fn set_temperature(&self, idx: &str, value: f64) -> Result<()> {
        self.record(format!("udevice {idx} {value}"))?;
        self.update(idx, |device| device.set_point = Some(value));
        Ok(())
    }
}
