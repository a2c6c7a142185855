//! OAuth 1.0a credential models.

pub mod credentials;
pub mod secret;

pub use credentials::*;
pub use secret::*;
