use std::sync::Arc;

use async_trait::async_trait;

use super::types::{AuthorizationStatus, PromptOutcome};

/// Seam to the operating system's contacts authorization store.
#[async_trait]
pub trait ContactsAuthority: Send + Sync {
    fn id(&self) -> &str {
        "unsupported"
    }

    /// Read the current authorization status without prompting.
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Show the consent prompt and resolve once the user responds or the
    /// OS reports an outcome. One-shot; no cancellation.
    async fn request_access(&self) -> PromptOutcome;
}

pub type SharedAuthority = Arc<dyn ContactsAuthority>;

#[cfg(target_os = "macos")]
pub mod macos;
#[cfg(any(not(target_os = "macos"), test))]
pub mod portable;
