//! OAuth 1.0a protected-resource client: every request leaves with a signed `Authorization`
//! header, whichever request-decoration hook the host HTTP client happens to expose.
//!
//! Start with [`factory::ClientFactory::create`] for a ready-to-use [`http::RestClient`], or
//! [`factory::ClientFactory::add_oauth_signing`] when assembling the client yourself.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod capability;
pub mod decorator;
pub mod error;
pub mod factory;
pub mod http;
pub mod obs;
pub mod sign;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and deterministic signing helpers for tests; enabled via
	//! `cfg(test)` or the `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{auth::Credentials, error::SignError, sign::Signer};

	/// Signer that renders its inputs verbatim so tests can predict the header.
	#[derive(Clone, Copy, Debug, Default)]
	pub struct EchoSigner;
	impl Signer for EchoSigner {
		fn sign(
			&self,
			method: &Method,
			url: &Url,
			credentials: &Credentials,
		) -> Result<String, SignError> {
			Ok(expected_header(method, url, credentials))
		}
	}

	/// Header value [`EchoSigner`] produces for the given inputs.
	pub fn expected_header(method: &Method, url: &Url, credentials: &Credentials) -> String {
		format!(
			"OAuth test method={method} url={url} consumer={} token={}",
			credentials.consumer_key, credentials.access_token
		)
	}

	/// Fixed credential set shared by tests.
	pub fn test_credentials() -> Credentials {
		Credentials::new("consumer-key", "consumer-secret", "access-token", "access-secret")
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
	};

	pub use reqwest::{
		Client as ReqwestClient, Error as ReqwestError, Method, Request, Response,
	};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
