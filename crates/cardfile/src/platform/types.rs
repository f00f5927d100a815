use serde::{Deserialize, Serialize};

/// Authorization state of the contacts store, as reported by the OS.
///
/// This code only observes the state; the OS alone moves it (as a side
/// effect of the user's answer to the consent prompt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    NotDetermined,
    Authorized,
    Denied,
    Restricted,
}

/// Payload of the OS consent callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptOutcome {
    pub granted: bool,
    pub error: Option<String>,
}
