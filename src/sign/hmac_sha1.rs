//! RFC 5849 HMAC-SHA1 signer.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::{Rng, distr::Alphanumeric};
use sha1::Sha1;
// self
use crate::{_prelude::*, auth::Credentials, error::SignError, sign::Signer};

type HmacSha1 = Hmac<Sha1>;

// RFC 5849 section 3.6: everything except ALPHA, DIGIT, '-', '.', '_', '~' is encoded with
// uppercase hex digits.
const UNRESERVED: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');
const NONCE_LEN: usize = 32;
const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// Default [`Signer`] producing `OAuth` headers with HMAC-SHA1 signatures.
///
/// Each call draws a fresh random nonce and the current Unix timestamp. Both can be pinned
/// through [`HmacSha1Signer::with_nonce`] and [`HmacSha1Signer::with_timestamp`] when a
/// reproducible header is required.
#[derive(Clone, Debug)]
pub struct HmacSha1Signer {
	nonce: Option<String>,
	timestamp: Option<i64>,
	include_version: bool,
}
impl HmacSha1Signer {
	/// Pins the `oauth_nonce` value used for every signature.
	pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
		self.nonce = Some(nonce.into());

		self
	}

	/// Pins the `oauth_timestamp` value (Unix seconds) used for every signature.
	pub fn with_timestamp(mut self, timestamp: i64) -> Self {
		self.timestamp = Some(timestamp);

		self
	}

	/// Sets whether the optional `oauth_version` parameter is sent (on by default).
	pub fn with_version(mut self, include_version: bool) -> Self {
		self.include_version = include_version;

		self
	}

	fn protocol_params(&self, credentials: &Credentials) -> Vec<(&'static str, String)> {
		let nonce = self.nonce.clone().unwrap_or_else(generate_nonce);
		let timestamp =
			self.timestamp.unwrap_or_else(|| OffsetDateTime::now_utc().unix_timestamp());
		let mut params = vec![
			("oauth_consumer_key", credentials.consumer_key.clone()),
			("oauth_nonce", nonce),
			("oauth_signature_method", SIGNATURE_METHOD.to_owned()),
			("oauth_timestamp", timestamp.to_string()),
			("oauth_token", credentials.access_token.clone()),
		];

		if self.include_version {
			params.push(("oauth_version", OAUTH_VERSION.to_owned()));
		}

		params
	}
}
impl Default for HmacSha1Signer {
	fn default() -> Self {
		Self { nonce: None, timestamp: None, include_version: true }
	}
}
impl Signer for HmacSha1Signer {
	fn sign(
		&self,
		method: &Method,
		url: &Url,
		credentials: &Credentials,
	) -> Result<String, SignError> {
		let protocol = self.protocol_params(credentials);
		let base = signature_base_string(method, url, &protocol);
		let key = format!(
			"{}&{}",
			encode(credentials.consumer_secret.expose()),
			encode(credentials.access_token_secret.expose())
		);
		let mut mac =
			HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| SignError::InvalidKey)?;

		mac.update(base.as_bytes());

		let signature = STANDARD.encode(mac.finalize().into_bytes());
		let mut header_params = protocol
			.into_iter()
			.map(|(k, v)| (k, encode(&v)))
			.chain([("oauth_signature", encode(&signature))])
			.collect::<Vec<_>>();

		header_params.sort_unstable_by(|a, b| a.0.cmp(b.0));

		let fields = header_params
			.iter()
			.map(|(k, v)| format!("{k}=\"{v}\""))
			.collect::<Vec<_>>()
			.join(", ");

		Ok(format!("OAuth {fields}"))
	}
}

fn encode(value: &str) -> String {
	utf8_percent_encode(value, UNRESERVED).to_string()
}

fn generate_nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}

// RFC 5849 section 3.4.1.2: lowercase scheme and host, default ports dropped, no query.
fn base_string_uri(url: &Url) -> String {
	let host = url.host_str().unwrap_or_default();

	match url.port() {
		Some(port) => format!("{}://{host}:{port}{}", url.scheme(), url.path()),
		None => format!("{}://{host}{}", url.scheme(), url.path()),
	}
}

fn signature_base_string(
	method: &Method,
	url: &Url,
	protocol: &[(&'static str, String)],
) -> String {
	let mut params = url
		.query_pairs()
		.map(|(k, v)| (encode(&k), encode(&v)))
		.chain(protocol.iter().map(|(k, v)| (encode(k), encode(v))))
		.collect::<Vec<_>>();

	params.sort();

	let normalized =
		params.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");

	format!(
		"{}&{}&{}",
		encode(&method.as_str().to_ascii_uppercase()),
		encode(&base_string_uri(url)),
		encode(&normalized)
	)
}
