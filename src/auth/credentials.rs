//! Immutable OAuth 1.0a signing credentials.

// self
use crate::{_prelude::*, auth::Secret};

/// Consumer and access-token pairs used to sign requests for a protected resource.
///
/// The value is never mutated after construction. Decorators keep their own clone, so the
/// caller remains free to drop or reuse the original once a client has been built. Nothing
/// beyond presence is validated here; malformed values surface as signer failures when a
/// request is dispatched.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	/// Consumer (client) key issued by the provider.
	pub consumer_key: String,
	/// Consumer secret paired with [`Credentials::consumer_key`].
	pub consumer_secret: Secret,
	/// Access token authorizing the resource owner.
	pub access_token: String,
	/// Access token secret paired with [`Credentials::access_token`].
	pub access_token_secret: Secret,
}
impl Credentials {
	/// Creates a credential set from its four components.
	pub fn new(
		consumer_key: impl Into<String>,
		consumer_secret: impl Into<String>,
		access_token: impl Into<String>,
		access_token_secret: impl Into<String>,
	) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret: Secret::new(consumer_secret),
			access_token: access_token.into(),
			access_token_secret: Secret::new(access_token_secret),
		}
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("consumer_key", &self.consumer_key)
			.field("consumer_secret", &self.consumer_secret)
			.field("access_token", &self.access_token)
			.field("access_token_secret", &self.access_token_secret)
			.finish()
	}
}
