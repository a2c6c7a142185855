//! Optional observability helpers for request decoration.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth1_client.sign` with the `decoration`
//!   field for every signing step, plus capability and fallback events.
//! - Enable `metrics` to increment `oauth1_client_decoration_total` for every constructed client
//!   (labeled by `decoration`) and `oauth1_client_sign_total` for every signing attempt (labeled
//!   by `decoration` + `outcome`).

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Decoration mechanisms a client can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
	/// Signing runs inside the client's interceptor chain.
	Interceptor,
	/// Signing runs inside a wrapping request factory.
	Wrapping,
}
impl DecorationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			DecorationKind::Interceptor => "interceptor",
			DecorationKind::Wrapping => "wrapping",
		}
	}
}
impl Display for DecorationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each signing attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignOutcome {
	/// The header was installed.
	Success,
	/// The signer failed and the request was aborted.
	Failure,
}
impl SignOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignOutcome::Success => "success",
			SignOutcome::Failure => "failure",
		}
	}
}
impl Display for SignOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
