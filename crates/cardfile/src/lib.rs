pub mod bridge;
pub mod error;
pub mod permissions;
pub mod platform;

pub use crate::bridge::HostBridge;
pub use crate::error::{CoreError, CoreResult};
pub use crate::platform::{default_authority, ContactsAuthority, SharedAuthority};
