//! Domain Entities
//!
//! Core domain models with identity and lifecycle.

pub mod profile;
pub mod quote;
pub mod user;

pub use profile::Profile;
pub use quote::Quote;
pub use user::{Session, UserIdentity};
