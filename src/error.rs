//! Client-level error types shared across signing, decoration, and transport.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The signer could not produce an `Authorization` header.
	#[error(transparent)]
	Signing(#[from] SignError),
	/// An interceptor could not be registered on the host client.
	#[error(transparent)]
	Registration(#[from] RegistrationError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The request factory could not build a request for the target.
	#[error("Request could not be constructed: {reason}.")]
	Request {
		/// Factory-supplied reason string.
		reason: String,
	},
}

/// Failures raised while computing an OAuth 1.0a signature.
#[derive(Debug, ThisError)]
pub enum SignError {
	/// The computed header contains bytes that are not valid in an HTTP header.
	#[error("Signed Authorization header is not a valid header value.")]
	InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
	/// The signing key was rejected by the MAC implementation.
	#[error("Signing key was rejected by the MAC implementation.")]
	InvalidKey,
	/// Signer-specific failure for custom [`Signer`](crate::sign::Signer) implementations.
	#[error("Signer failed: {message}.")]
	Other {
		/// Human-readable error payload.
		message: String,
	},
}
impl SignError {
	/// Builds a free-form signer failure.
	pub fn other(message: impl Into<String>) -> Self {
		Self::Other { message: message.into() }
	}
}

/// Failures raised when attaching interceptors to a [`RestClient`](crate::http::RestClient).
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RegistrationError {
	/// The host client has no interceptor chain at all.
	#[error("Host client does not support request interceptors.")]
	InterceptorsUnsupported,
	/// The host client exposes a chain but not through the requested call shape.
	#[error("Host client does not expose {shape} interceptor registration.")]
	ShapeUnavailable {
		/// Label of the registration shape that was attempted.
		shape: &'static str,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the protected resource.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the protected resource.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
impl From<ReqwestError> for Error {
	fn from(e: ReqwestError) -> Self {
		Self::Transport(e.into())
	}
}
