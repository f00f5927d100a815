//! Contacts permission negotiation.

use crate::platform::types::AuthorizationStatus;
use crate::platform::ContactsAuthority;

/// Answer "may this application access contacts?" against live OS state.
///
/// The status is re-read on every call; nothing is cached. A consent
/// prompt is issued only while the status is still undetermined, and an
/// error reported by the prompt is folded into a plain denial.
pub async fn negotiate_contacts_access(authority: &dyn ContactsAuthority) -> bool {
    match authority.authorization_status() {
        AuthorizationStatus::Authorized => true,
        AuthorizationStatus::Denied | AuthorizationStatus::Restricted => false,
        AuthorizationStatus::NotDetermined => {
            let outcome = authority.request_access().await;
            if let Some(error) = &outcome.error {
                tracing::warn!("contacts consent prompt reported an error: {error}");
                return false;
            }
            outcome.granted
        }
    }
}
