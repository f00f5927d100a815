#[cfg(target_os = "macos")]
mod contacts;
#[cfg(target_os = "macos")]
mod util;

#[cfg(target_os = "macos")]
pub use contacts::{
    contacts_authorization_status, request_contacts_access, ContactsAuthorizationStatus,
};
