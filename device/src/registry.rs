use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{DeviceNotBoundSnafu, Result};
use crate::info::DeviceInfo;

/// Devices bound by the process, keyed by device name.
///
/// Capabilities are recorded once per device; later bindings under the same name return the
/// record captured first.
pub struct DeviceRegistry {
    devices: RwLock<HashMap<String, Arc<DeviceInfo>>>,
}

impl DeviceRegistry {
    fn new() -> Self {
        Self { devices: RwLock::new(HashMap::new()) }
    }

    /// Bind a device, or return the already bound device with the same name.
    pub fn bind(&self, info: DeviceInfo) -> Arc<DeviceInfo> {
        // Fast path: read lock
        if let Some(existing) = self.devices.read().get(info.name()) {
            return Arc::clone(existing);
        }

        let mut devices = self.devices.write();

        // Double-check after acquiring write lock
        if let Some(existing) = devices.get(info.name()) {
            return Arc::clone(existing);
        }

        debug!(
            device.name = info.name(),
            device.target = %info.target(),
            dot8 = info.dot8_supported(),
            image2d = info.image2d_from_buffer_supported(),
            "binding device"
        );
        let info = Arc::new(info);
        devices.insert(info.name().to_string(), Arc::clone(&info));
        info
    }

    pub fn get(&self, name: &str) -> Result<Arc<DeviceInfo>> {
        match self.devices.read().get(name) {
            Some(info) => Ok(Arc::clone(info)),
            None => DeviceNotBoundSnafu { name }.fail(),
        }
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.devices.read().contains_key(name)
    }
}

/// Global device registry instance.
static REGISTRY: Lazy<DeviceRegistry> = Lazy::new(DeviceRegistry::new);

/// Get the global device registry.
pub fn registry() -> &'static DeviceRegistry {
    &REGISTRY
}

/// Convenience function to bind a device in the global registry.
pub fn bind(info: DeviceInfo) -> Arc<DeviceInfo> {
    registry().bind(info)
}

/// Convenience function to look up a bound device by name.
pub fn get_device(name: &str) -> Result<Arc<DeviceInfo>> {
    registry().get(name)
}
