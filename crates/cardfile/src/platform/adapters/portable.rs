use async_trait::async_trait;

use super::ContactsAuthority;
use crate::platform::types::{AuthorizationStatus, PromptOutcome};

/// Fallback authority for platforms without a contacts permission API.
///
/// Reports `Restricted` so callers get a truthful "the OS will never
/// grant this" answer instead of a prompt that cannot be shown.
#[derive(Debug, Default)]
pub struct PortableAuthority;

impl PortableAuthority {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContactsAuthority for PortableAuthority {
    fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::Restricted
    }

    async fn request_access(&self) -> PromptOutcome {
        PromptOutcome {
            granted: false,
            error: Some("contacts access not supported on this platform".to_string()),
        }
    }
}
