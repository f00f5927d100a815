use std::sync::Arc;

use super::adapters::SharedAuthority;

pub fn default_authority() -> SharedAuthority {
    #[cfg(target_os = "macos")]
    {
        Arc::new(super::adapters::macos::MacosAuthority::new())
    }

    #[cfg(not(target_os = "macos"))]
    {
        Arc::new(super::adapters::portable::PortableAuthority::new())
    }
}
