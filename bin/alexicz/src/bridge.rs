use alexa::PropertyName;
use domoticz::{Backend, Device};
use log::debug;
use serde_json::Value;

use crate::classify::{classify_device, classify_scene, DiscoveryOptions};
use crate::{Endpoint, Error, Result};

/// Everything one directive is handled against.
pub struct Bridge {
    backend: Box<dyn Backend>,
    options: DiscoveryOptions,
}

impl Bridge {
    pub fn new(backend: impl Backend + 'static, options: DiscoveryOptions) -> Bridge {
        Bridge {
            backend: Box::new(backend),
            options,
        }
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// All devices, then scenes and groups when enabled, that map onto an
    /// adapter.
    pub async fn endpoints(&self) -> Result<Vec<Endpoint>> {
        let mut endpoints = vec![];

        for device in self.backend.devices().await? {
            match classify_device(&device, &self.options) {
                Some(endpoint) => endpoints.push(endpoint),
                None => debug!("skipping device {} ({})", device.idx, device.r#type),
            }
        }

        if self.options.include_scenes_groups {
            for scene in self.backend.scenes().await? {
                match classify_scene(&scene, &self.options) {
                    Some(endpoint) => endpoints.push(endpoint),
                    None => debug!("skipping scene {} ({})", scene.idx, scene.r#type),
                }
            }
        }

        Ok(endpoints)
    }

    pub async fn device(&self, endpoint: &Endpoint) -> Result<Device> {
        Ok(self.backend.device(endpoint.idx()).await?)
    }

    /// Current value of `name`, failing when the backend can't provide one.
    pub async fn current(&self, endpoint: &Endpoint, name: PropertyName) -> Result<Value> {
        let device = self.device(endpoint).await?;

        endpoint
            .property(name, &device)
            .ok_or_else(|| Error::Unavailable {
                endpoint: endpoint.id().to_string(),
                property: name,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeBackend;
    use crate::{AdapterKind, EndpointId};
    use domoticz::Scene;
    use serde_json::json;

    fn lamp(idx: &str, plan_id: &str) -> Device {
        Device {
            idx: idx.to_string(),
            r#type: "Lighting 2".to_string(),
            switch_type: "On/Off".to_string(),
            plan_id: plan_id.to_string(),
            ..Default::default()
        }
    }

    fn scenes() -> Vec<Scene> {
        vec![Scene {
            idx: "1".to_string(),
            r#type: "Scene".to_string(),
            ..Default::default()
        }]
    }

    #[tokio::test]
    async fn test_endpoints_skip_excluded_devices() {
        let backend = FakeBackend::with_devices(vec![lamp("1", "2"), lamp("2", "")]);
        let bridge = Bridge::new(backend, DiscoveryOptions::default());

        let ids: Vec<_> = bridge
            .endpoints()
            .await
            .unwrap()
            .iter()
            .map(|endpoint| endpoint.id().to_string())
            .collect();

        assert_eq!(ids, ["SwitchLight-1"]);
    }

    #[tokio::test]
    async fn test_scenes_only_when_enabled() {
        let backend = FakeBackend::with_devices(vec![]).with_scenes(scenes());
        let bridge = Bridge::new(backend, DiscoveryOptions::default());
        assert!(bridge.endpoints().await.unwrap().is_empty());

        let backend = FakeBackend::with_devices(vec![]).with_scenes(scenes());
        let options = DiscoveryOptions {
            include_scenes_groups: true,
            ..Default::default()
        };
        let bridge = Bridge::new(backend, options);
        let endpoints = bridge.endpoints().await.unwrap();

        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].kind(), AdapterKind::Scene);
    }

    #[tokio::test]
    async fn test_current_property() {
        let mut device = lamp("3", "1");
        device.level = 40;
        device.max_dim_level = 100;

        let bridge = Bridge::new(
            FakeBackend::with_devices(vec![device]),
            DiscoveryOptions::default(),
        );

        let endpoint = Endpoint::new(EndpointId::new(AdapterKind::SwitchLight, "3"));
        assert_eq!(
            bridge
                .current(&endpoint, PropertyName::Brightness)
                .await
                .unwrap(),
            json!(40)
        );

        assert!(matches!(
            bridge.current(&endpoint, PropertyName::Temperature).await,
            Err(Error::Unavailable { .. })
        ));
    }
}
