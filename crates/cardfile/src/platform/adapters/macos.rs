use async_trait::async_trait;

use super::ContactsAuthority;
use crate::platform::types::{AuthorizationStatus, PromptOutcome};

#[derive(Debug, Default)]
pub struct MacosAuthority;

impl MacosAuthority {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContactsAuthority for MacosAuthority {
    fn id(&self) -> &str {
        "macos"
    }

    fn authorization_status(&self) -> AuthorizationStatus {
        match platform_macos::contacts_authorization_status() {
            platform_macos::ContactsAuthorizationStatus::NotDetermined => {
                AuthorizationStatus::NotDetermined
            }
            platform_macos::ContactsAuthorizationStatus::Authorized => {
                AuthorizationStatus::Authorized
            }
            platform_macos::ContactsAuthorizationStatus::Denied => AuthorizationStatus::Denied,
            platform_macos::ContactsAuthorizationStatus::Restricted => {
                AuthorizationStatus::Restricted
            }
        }
    }

    async fn request_access(&self) -> PromptOutcome {
        // The consent dialog parks its calling thread until the user
        // answers, so it runs off the async runtime.
        match tokio::task::spawn_blocking(platform_macos::request_contacts_access).await {
            Ok(Ok(granted)) => PromptOutcome {
                granted,
                error: None,
            },
            Ok(Err(error)) => PromptOutcome {
                granted: false,
                error: Some(error),
            },
            Err(error) => PromptOutcome {
                granted: false,
                error: Some(format!("consent prompt task failed: {error}")),
            },
        }
    }
}
