//! One-time detection of the request-decoration hook exposed by the host HTTP client.
//!
//! Host client releases differ in how they let callers decorate outgoing requests. Newer
//! releases expose an interceptor chain, and that chain has shipped with two registration
//! call shapes (a growable list and, earlier, a fixed array). Older releases only allow the
//! request factory to be replaced. [`CapabilityProbe`] resolves which of these applies once,
//! memoizes the answer, and hands every caller the same [`CapabilityDecision`].
//!
//! The host description is static: [`HostCapabilities::current`] reads the crate's cargo
//! features, so the process-wide decision can never change after it is first computed.

// std
use std::sync::OnceLock;
// self
use crate::_prelude::*;

/// Static description of the decoration hooks a host client exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostCapabilities {
	/// The host ships an interceptor chain.
	pub interceptor_chain: bool,
	/// Interceptors can be registered through a growable list.
	pub list_registration: bool,
	/// Interceptors can be registered through a fixed-size array.
	pub array_registration: bool,
}
impl HostCapabilities {
	/// Host with an interceptor chain registered through a list.
	pub const fn modern() -> Self {
		Self { interceptor_chain: true, list_registration: true, array_registration: false }
	}

	/// Host with an interceptor chain registered through a fixed array only.
	pub const fn array_only() -> Self {
		Self { interceptor_chain: true, list_registration: false, array_registration: true }
	}

	/// Host without any interceptor chain; only the request factory can be replaced.
	pub const fn legacy() -> Self {
		Self { interceptor_chain: false, list_registration: false, array_registration: false }
	}

	/// Capabilities compiled into this build.
	///
	/// The `interceptors` feature enables the chain and `legacy-array-registration` switches its
	/// registration entry point to the fixed-array shape.
	pub const fn current() -> Self {
		if !cfg!(feature = "interceptors") {
			Self::legacy()
		} else if cfg!(feature = "legacy-array-registration") {
			Self::array_only()
		} else {
			Self::modern()
		}
	}
}
impl Default for HostCapabilities {
	fn default() -> Self {
		Self::current()
	}
}

/// Call shape used to register interceptors on the host client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationShape {
	/// Registration accepts an ordered, growable sequence.
	ListBased,
	/// Registration accepts a fixed-size array.
	ArrayBased,
	/// Neither registration entry point was found.
	Unavailable,
}
impl RegistrationShape {
	/// Returns a stable label suitable for log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RegistrationShape::ListBased => "list-based",
			RegistrationShape::ArrayBased => "array-based",
			RegistrationShape::Unavailable => "unavailable",
		}
	}
}
impl Display for RegistrationShape {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Decoration mechanism a client factory should attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationStrategy {
	/// Register an interceptor using the given call shape.
	Interceptor(RegistrationShape),
	/// Wrap the request factory.
	Wrapping,
}

/// Memoized outcome of capability detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityDecision {
	/// Whether the host exposes an interceptor chain.
	pub interceptors_supported: bool,
	/// Which registration call shape the chain accepts.
	pub registration_shape: RegistrationShape,
}
impl CapabilityDecision {
	/// Resolves the decoration mechanism to use.
	///
	/// Interceptors are chosen only when the chain exists and a registration entry point was
	/// found; every other combination falls back to wrapping the request factory.
	pub fn strategy(&self) -> DecorationStrategy {
		match (self.interceptors_supported, self.registration_shape) {
			(true, RegistrationShape::Unavailable) | (false, _) => DecorationStrategy::Wrapping,
			(true, shape) => DecorationStrategy::Interceptor(shape),
		}
	}
}

static GLOBAL: CapabilityProbe = CapabilityProbe::new(HostCapabilities::current());

/// Detects, once, how request decoration attaches to a host client.
#[derive(Debug)]
pub struct CapabilityProbe {
	host: HostCapabilities,
	shape: OnceLock<RegistrationShape>,
	decision: OnceLock<CapabilityDecision>,
}
impl CapabilityProbe {
	/// Creates a probe for an explicitly described host.
	pub const fn new(host: HostCapabilities) -> Self {
		Self { host, shape: OnceLock::new(), decision: OnceLock::new() }
	}

	/// Process-wide probe for the host compiled into this build.
	pub fn global() -> &'static CapabilityProbe {
		&GLOBAL
	}

	/// Host description this probe inspects.
	pub fn host(&self) -> HostCapabilities {
		self.host
	}

	/// Whether the host exposes an interceptor chain. Absence is an expected outcome.
	pub fn detect_interceptor_support(&self) -> bool {
		self.host.interceptor_chain
	}

	/// Locates the interceptor registration entry point, list-based first, then array-based.
	///
	/// The first call resolves the shape; later calls return the cached value.
	pub fn detect_registration_shape(&self) -> RegistrationShape {
		*self.shape.get_or_init(|| {
			if self.host.list_registration {
				RegistrationShape::ListBased
			} else if self.host.array_registration {
				RegistrationShape::ArrayBased
			} else {
				RegistrationShape::Unavailable
			}
		})
	}

	/// Returns the memoized decision, computing it on first access.
	///
	/// Concurrent first accesses block on the same initializer, so every caller observes one
	/// value.
	pub fn decision(&self) -> CapabilityDecision {
		*self.decision.get_or_init(|| {
			let decision = CapabilityDecision {
				interceptors_supported: self.detect_interceptor_support(),
				registration_shape: self.detect_registration_shape(),
			};

			#[cfg(feature = "tracing")]
			tracing::debug!(
				interceptors_supported = decision.interceptors_supported,
				registration_shape = decision.registration_shape.as_str(),
				"resolved request decoration capabilities"
			);

			decision
		})
	}
}
