//! Signer contract used by request decorators.
//!
//! Decorators never compute signatures themselves. They hand the request method, target URL,
//! and [`Credentials`] to a [`Signer`] and install whatever header value it returns. The crate
//! ships [`HmacSha1Signer`] as the default; hosts with other requirements (RSA-SHA1, PLAINTEXT,
//! body-parameter signing) plug in their own implementation.

pub mod hmac_sha1;

pub use hmac_sha1::*;

// self
use crate::{_prelude::*, auth::Credentials, error::SignError};

/// Produces the `Authorization` header value for a request.
///
/// Implementations must be deterministic for identical inputs apart from any nonce or
/// timestamp component, which the signer owns.
pub trait Signer
where
	Self: Send + Sync,
{
	/// Signs `method` + `url` with `credentials` and returns the full header value.
	fn sign(
		&self,
		method: &Method,
		url: &Url,
		credentials: &Credentials,
	) -> Result<String, SignError>;
}
impl<F> Signer for F
where
	F: Send + Sync + Fn(&Method, &Url, &Credentials) -> Result<String, SignError>,
{
	fn sign(
		&self,
		method: &Method,
		url: &Url,
		credentials: &Credentials,
	) -> Result<String, SignError> {
		self(method, url, credentials)
	}
}
