//! Entry points that build OAuth 1.0a-signing clients.
//!
//! [`ClientFactory`] consults a [`CapabilityProbe`] decision and attaches exactly one
//! decorator to every client it builds: an [`OAuth1RequestInterceptor`] when the host exposes
//! an interceptor chain, an [`OAuth1RequestFactory`] otherwise. Callers never need to know
//! which one was used.

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	capability::{
		CapabilityDecision, CapabilityProbe, DecorationStrategy, HostCapabilities,
		RegistrationShape,
	},
	decorator::{OAuth1RequestFactory, OAuth1RequestInterceptor},
	error::RegistrationError,
	http::{ReqwestRequestFactory, RequestFactory, RequestInterceptor, RestClient},
	obs::{self, DecorationKind},
	sign::{HmacSha1Signer, Signer},
};

/// Builds [`RestClient`]s that sign every request for a protected resource.
///
/// The factory copies the capability decision at construction time and keeps no reference to
/// the clients it builds; each client owns its decorator outright.
#[derive(Clone)]
pub struct ClientFactory {
	host: HostCapabilities,
	decision: CapabilityDecision,
	signer: Arc<dyn Signer>,
	http: ReqwestClient,
}
impl ClientFactory {
	/// Creates a factory driven by the process-wide [`CapabilityProbe::global`] decision and
	/// the default [`HmacSha1Signer`].
	pub fn new() -> Self {
		Self::from_probe(CapabilityProbe::global())
	}

	/// Creates a factory for the host described by `probe`.
	pub fn from_probe(probe: &CapabilityProbe) -> Self {
		Self {
			host: probe.host(),
			decision: probe.decision(),
			signer: Arc::new(HmacSha1Signer::default()),
			http: ReqwestClient::default(),
		}
	}

	/// Replaces the signer used by every decorator this factory attaches.
	pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
		self.signer = signer;

		self
	}

	/// Replaces the reqwest client shared by every client this factory builds.
	pub fn with_http_client(mut self, http: ReqwestClient) -> Self {
		self.http = http;

		self
	}

	/// Capability decision this factory applies.
	pub fn decision(&self) -> CapabilityDecision {
		self.decision
	}

	/// Builds a client that adds the OAuth 1.0a `Authorization` header to each request.
	///
	/// Construction never fails. If interceptor registration is rejected despite the probe
	/// reporting support, the failure is logged and the client is decorated by wrapping its
	/// request factory instead, so the returned client always signs.
	pub fn create(&self, credentials: &Credentials) -> RestClient {
		let mut client =
			RestClient::with_host(self.http.clone(), Arc::new(ReqwestRequestFactory), self.host);
		let kind = match self.decision.strategy() {
			DecorationStrategy::Interceptor(shape) => {
				let interceptor: Arc<dyn RequestInterceptor> = Arc::new(
					OAuth1RequestInterceptor::new(credentials.clone(), self.signer.clone()),
				);

				match register(&mut client, shape, interceptor) {
					Ok(()) => DecorationKind::Interceptor,
					Err(e) => {
						#[cfg(feature = "tracing")]
						tracing::warn!(
							error = %e,
							registration_shape = shape.as_str(),
							"interceptor registration failed; falling back to a wrapping request factory"
						);
						#[cfg(not(feature = "tracing"))]
						let _ = e;

						self.wrap(&mut client, credentials);

						DecorationKind::Wrapping
					},
				}
			},
			DecorationStrategy::Wrapping => {
				self.wrap(&mut client, credentials);

				DecorationKind::Wrapping
			},
		};

		obs::record_decoration(kind);

		client
	}

	/// Adds OAuth 1.0a signing to `request_factory` when the host needs it.
	///
	/// When the host can register interceptors the identical factory is returned and signing is
	/// expected to be attached through the chain. Otherwise, including a chain with no usable
	/// registration entry point, the factory is wrapped in an [`OAuth1RequestFactory`].
	pub fn add_oauth_signing(
		&self,
		request_factory: Arc<dyn RequestFactory>,
		credentials: &Credentials,
	) -> Arc<dyn RequestFactory> {
		match self.decision.strategy() {
			DecorationStrategy::Interceptor(_) => request_factory,
			DecorationStrategy::Wrapping => Arc::new(OAuth1RequestFactory::new(
				request_factory,
				credentials.clone(),
				self.signer.clone(),
			)),
		}
	}

	fn wrap(&self, client: &mut RestClient, credentials: &Credentials) {
		let wrapped = OAuth1RequestFactory::new(
			client.request_factory().clone(),
			credentials.clone(),
			self.signer.clone(),
		);

		client.set_request_factory(Arc::new(wrapped));
	}
}
impl Default for ClientFactory {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for ClientFactory {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientFactory")
			.field("host", &self.host)
			.field("decision", &self.decision)
			.finish_non_exhaustive()
	}
}

fn register(
	client: &mut RestClient,
	shape: RegistrationShape,
	interceptor: Arc<dyn RequestInterceptor>,
) -> Result<(), RegistrationError> {
	match shape {
		RegistrationShape::ListBased => client.set_interceptors(vec![interceptor]),
		RegistrationShape::ArrayBased => client.set_interceptor_array([interceptor]),
		RegistrationShape::Unavailable =>
			Err(RegistrationError::ShapeUnavailable { shape: shape.as_str() }),
	}
}
