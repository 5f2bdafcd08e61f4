pub mod identity;

pub use identity::{IdentityRepository, InMemoryIdentityRepository};
