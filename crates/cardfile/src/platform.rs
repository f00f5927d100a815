pub mod adapters;
pub mod factory;
pub mod types;

pub use adapters::{ContactsAuthority, SharedAuthority};
pub use factory::default_authority;
