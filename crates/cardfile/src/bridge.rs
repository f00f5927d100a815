//! Method bridge between the UI layer and native platform services.

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::permissions;
use crate::platform::SharedAuthority;

/// Wire name of the contacts permission request, kept verbatim from the
/// UI layer's vocabulary.
pub const REQUEST_CONTACTS_PERMISSION: &str = "requestContactsPermission";

/// Dispatches named UI requests to their native handlers.
///
/// Registered once at application startup; holds no state beyond the
/// injected authority, so concurrent dispatches are independent.
pub struct HostBridge {
    authority: SharedAuthority,
}

impl HostBridge {
    pub fn new(authority: SharedAuthority) -> Self {
        Self { authority }
    }

    /// Route a request by method name.
    ///
    /// Unknown names resolve to [`CoreError::NotImplemented`] so the
    /// caller can tell "no such handler" apart from a permission outcome.
    pub async fn dispatch(&self, method: &str) -> CoreResult<Value> {
        match method {
            REQUEST_CONTACTS_PERMISSION => {
                let granted =
                    permissions::negotiate_contacts_access(self.authority.as_ref()).await;
                Ok(Value::Bool(granted))
            }
            _ => Err(CoreError::NotImplemented),
        }
    }
}
