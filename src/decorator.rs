//! Request decorators that install the OAuth 1.0a `Authorization` header.
//!
//! [`OAuth1RequestInterceptor`] plugs into a [`RestClient`](crate::http::RestClient)
//! interceptor chain; [`OAuth1RequestFactory`] wraps a [`RequestFactory`] for hosts that have no
//! chain. Both run the same stamping step, so a request signed by either carries an identical
//! header for identical inputs.

// crates.io
use reqwest::header::{AUTHORIZATION, HeaderValue};
// self
use crate::{
	_prelude::*,
	auth::Credentials,
	error::SignError,
	http::{RequestFactory, RequestInterceptor},
	obs::{self, DecorationKind, SignOutcome, SignSpan},
	sign::Signer,
};

/// Interceptor that signs each request in-line before dispatch.
#[derive(Clone)]
pub struct OAuth1RequestInterceptor {
	credentials: Credentials,
	signer: Arc<dyn Signer>,
}
impl OAuth1RequestInterceptor {
	/// Creates an interceptor signing with `credentials` through `signer`.
	pub fn new(credentials: Credentials, signer: Arc<dyn Signer>) -> Self {
		Self { credentials, signer }
	}
}
impl RequestInterceptor for OAuth1RequestInterceptor {
	fn intercept(&self, request: &mut Request) -> Result<()> {
		stamp(DecorationKind::Interceptor, self.signer.as_ref(), &self.credentials, request)
	}
}
impl Debug for OAuth1RequestInterceptor {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuth1RequestInterceptor")
			.field("consumer_key", &self.credentials.consumer_key)
			.finish_non_exhaustive()
	}
}

/// Request factory that signs every request it hands out.
///
/// Exists for hosts without an interceptor chain: the inner factory builds the request, then
/// the wrapper installs the header before returning it.
#[derive(Clone)]
pub struct OAuth1RequestFactory {
	inner: Arc<dyn RequestFactory>,
	credentials: Credentials,
	signer: Arc<dyn Signer>,
}
impl OAuth1RequestFactory {
	/// Wraps `inner` so its requests are signed with `credentials` through `signer`.
	pub fn new(
		inner: Arc<dyn RequestFactory>,
		credentials: Credentials,
		signer: Arc<dyn Signer>,
	) -> Self {
		Self { inner, credentials, signer }
	}

	/// Factory whose requests are being signed.
	pub fn inner(&self) -> &Arc<dyn RequestFactory> {
		&self.inner
	}
}
impl RequestFactory for OAuth1RequestFactory {
	fn create_request(&self, method: Method, url: Url) -> Result<Request> {
		let mut request = self.inner.create_request(method, url)?;

		stamp(DecorationKind::Wrapping, self.signer.as_ref(), &self.credentials, &mut request)?;

		Ok(request)
	}
}
impl Debug for OAuth1RequestFactory {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuth1RequestFactory")
			.field("consumer_key", &self.credentials.consumer_key)
			.finish_non_exhaustive()
	}
}

// Replaces any existing Authorization header; nothing else on the request is touched.
fn stamp(
	kind: DecorationKind,
	signer: &dyn Signer,
	credentials: &Credentials,
	request: &mut Request,
) -> Result<()> {
	let _guard = SignSpan::new(kind, request.method()).entered();
	let signed = signer
		.sign(request.method(), request.url(), credentials)
		.and_then(|header| HeaderValue::from_str(&header).map_err(SignError::from));

	match signed {
		Ok(mut value) => {
			value.set_sensitive(true);
			request.headers_mut().insert(AUTHORIZATION, value);
			obs::record_sign_outcome(kind, SignOutcome::Success);

			Ok(())
		},
		Err(e) => {
			obs::record_sign_outcome(kind, SignOutcome::Failure);

			Err(e.into())
		},
	}
}
