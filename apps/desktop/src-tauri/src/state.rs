use cardfile::{HostBridge, SharedAuthority};

/// Shared application state holding the native bridge.
/// No interior mutability is needed; dispatch takes `&self`.
pub struct AppState {
    bridge: HostBridge,
}

impl AppState {
    pub fn new(authority: SharedAuthority) -> Self {
        Self {
            bridge: HostBridge::new(authority),
        }
    }

    pub fn bridge(&self) -> &HostBridge {
        &self.bridge
    }
}
