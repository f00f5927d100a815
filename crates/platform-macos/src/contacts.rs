use std::sync::mpsc;

use block2::RcBlock;
use objc2::rc::Id;
use objc2::runtime::{AnyObject, Bool};
use objc2::{class, msg_send, msg_send_id};

use crate::util::nsstring_to_string;

// Links the framework so the CNContactStore class is registered at runtime.
#[link(name = "Contacts", kind = "framework")]
extern "C" {}

/// CNEntityTypeContacts, the only entity type the Contacts framework defines.
const ENTITY_TYPE_CONTACTS: isize = 0;

/// Authorization states reported by `CNContactStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactsAuthorizationStatus {
    NotDetermined,
    Restricted,
    Denied,
    Authorized,
}

pub fn contacts_authorization_status() -> ContactsAuthorizationStatus {
    let status: isize = unsafe {
        msg_send![class!(CNContactStore), authorizationStatusForEntityType: ENTITY_TYPE_CONTACTS]
    };
    match status {
        0 => ContactsAuthorizationStatus::NotDetermined,
        1 => ContactsAuthorizationStatus::Restricted,
        3 => ContactsAuthorizationStatus::Authorized,
        // 2 is the documented denied value; unrecognized future states are
        // bucketed with it rather than re-prompting the user.
        _ => ContactsAuthorizationStatus::Denied,
    }
}

/// Show the system consent dialog and block until the user responds.
///
/// The completion handler fires on a framework-owned queue; an error it
/// reports comes back as `Err` with the localized description.
pub fn request_contacts_access() -> Result<bool, String> {
    let (sender, receiver) = mpsc::channel();

    let store: Option<Id<AnyObject>> = unsafe { msg_send_id![class!(CNContactStore), new] };
    let Some(store) = store else {
        return Err("failed to create CNContactStore".to_string());
    };

    let handler = RcBlock::new(move |granted: Bool, error: *mut AnyObject| {
        let message = if error.is_null() {
            None
        } else {
            nsstring_to_string(unsafe { msg_send![error, localizedDescription] })
        };
        let _ = sender.send((bool::from(granted), message));
    });

    unsafe {
        let _: () = msg_send![
            &*store,
            requestAccessForEntityType: ENTITY_TYPE_CONTACTS
            completionHandler: &*handler
        ];
    }

    // The store must outlive the callback; it is dropped only after the
    // channel has yielded the outcome.
    let (granted, error) = receiver
        .recv()
        .map_err(|error| format!("consent callback never completed: {error}"))?;
    match error {
        Some(message) => Err(message),
        None => Ok(granted),
    }
}
