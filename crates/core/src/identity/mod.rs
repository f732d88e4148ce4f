//! Local identity capture and lookup

pub mod memory;
pub mod ports;
pub mod session;

pub use memory::InMemoryIdentityStore;
pub use session::SessionContext;
