//! Host HTTP client primitives for protected-resource calls.
//!
//! [`RestClient`] pairs a reqwest [`ReqwestClient`] with the two decoration hooks request
//! signing can attach to: a replaceable [`RequestFactory`] that builds every outgoing
//! [`Request`], and an ordered chain of [`RequestInterceptor`]s that run just before dispatch.
//! Which hooks a client actually exposes is fixed by the [`HostCapabilities`] it was built
//! with, so registering through a missing entry point fails with [`RegistrationError`].

// self
use crate::{
	_prelude::*,
	capability::{HostCapabilities, RegistrationShape},
	error::RegistrationError,
};

/// Builds the request objects a [`RestClient`] dispatches.
pub trait RequestFactory
where
	Self: Send + Sync,
{
	/// Creates a request for `method` + `url`.
	fn create_request(&self, method: Method, url: Url) -> Result<Request>;
}

/// Default [`RequestFactory`] producing bare reqwest requests.
#[derive(Clone, Debug, Default)]
pub struct ReqwestRequestFactory;
impl RequestFactory for ReqwestRequestFactory {
	fn create_request(&self, method: Method, url: Url) -> Result<Request> {
		match url.scheme() {
			"http" | "https" => Ok(Request::new(method, url)),
			scheme => Err(Error::Request { reason: format!("unsupported URL scheme `{scheme}`") }),
		}
	}
}

/// Hook invoked on every outgoing request before it is dispatched.
///
/// Interceptors run synchronously, in registration order, and may only touch the request they
/// receive. An error aborts the dispatch and is returned to the caller unchanged.
pub trait RequestInterceptor
where
	Self: Send + Sync,
{
	/// Inspects or modifies `request` before dispatch.
	fn intercept(&self, request: &mut Request) -> Result<()>;
}

/// HTTP client with pluggable request construction and an interceptor chain.
#[derive(Clone)]
pub struct RestClient {
	http: ReqwestClient,
	request_factory: Arc<dyn RequestFactory>,
	interceptors: Vec<Arc<dyn RequestInterceptor>>,
	host: HostCapabilities,
}
impl RestClient {
	/// Builds a client around `request_factory` with the capabilities compiled into this build.
	pub fn new(request_factory: Arc<dyn RequestFactory>) -> Self {
		Self::with_host(ReqwestClient::default(), request_factory, HostCapabilities::current())
	}

	/// Builds a client from an existing reqwest client and an explicit host description.
	pub fn with_host(
		http: ReqwestClient,
		request_factory: Arc<dyn RequestFactory>,
		host: HostCapabilities,
	) -> Self {
		Self { http, request_factory, interceptors: Vec::new(), host }
	}

	/// Decoration hooks this client exposes.
	pub fn host(&self) -> HostCapabilities {
		self.host
	}

	/// Underlying reqwest client used for dispatch.
	pub fn http_client(&self) -> &ReqwestClient {
		&self.http
	}

	/// Factory currently used to build requests.
	pub fn request_factory(&self) -> &Arc<dyn RequestFactory> {
		&self.request_factory
	}

	/// Replaces the request factory.
	pub fn set_request_factory(&mut self, request_factory: Arc<dyn RequestFactory>) {
		self.request_factory = request_factory;
	}

	/// Registered interceptors, in execution order.
	pub fn interceptors(&self) -> &[Arc<dyn RequestInterceptor>] {
		&self.interceptors
	}

	/// Replaces the interceptor chain through the list-based entry point.
	pub fn set_interceptors(
		&mut self,
		interceptors: Vec<Arc<dyn RequestInterceptor>>,
	) -> Result<(), RegistrationError> {
		self.ensure_registration(self.host.list_registration, RegistrationShape::ListBased)?;

		self.interceptors = interceptors;

		Ok(())
	}

	/// Replaces the interceptor chain through the fixed-array entry point.
	pub fn set_interceptor_array<const N: usize>(
		&mut self,
		interceptors: [Arc<dyn RequestInterceptor>; N],
	) -> Result<(), RegistrationError> {
		self.ensure_registration(self.host.array_registration, RegistrationShape::ArrayBased)?;

		self.interceptors = interceptors.into();

		Ok(())
	}

	/// Builds a request through the factory without running interceptors.
	pub fn create_request(&self, method: Method, url: Url) -> Result<Request> {
		self.request_factory.create_request(method, url)
	}

	/// Builds a request and runs the interceptor chain without dispatching it.
	///
	/// The returned request is exactly what [`RestClient::execute`] would put on the wire.
	pub fn prepare(&self, method: Method, url: Url) -> Result<Request> {
		let mut request = self.create_request(method, url)?;

		self.apply_interceptors(&mut request)?;

		Ok(request)
	}

	/// Runs the interceptor chain on `request`, then dispatches it.
	pub async fn execute(&self, mut request: Request) -> Result<Response> {
		self.apply_interceptors(&mut request)?;

		Ok(self.http.execute(request).await?)
	}

	/// Builds and dispatches a request.
	pub async fn send(&self, method: Method, url: Url) -> Result<Response> {
		let request = self.create_request(method, url)?;

		self.execute(request).await
	}

	/// Shorthand for a `GET` request.
	pub async fn get(&self, url: Url) -> Result<Response> {
		self.send(Method::GET, url).await
	}

	fn apply_interceptors(&self, request: &mut Request) -> Result<()> {
		self.interceptors.iter().try_for_each(|interceptor| interceptor.intercept(request))
	}

	fn ensure_registration(
		&self,
		available: bool,
		shape: RegistrationShape,
	) -> Result<(), RegistrationError> {
		if !self.host.interceptor_chain {
			return Err(RegistrationError::InterceptorsUnsupported);
		}
		if !available {
			return Err(RegistrationError::ShapeUnavailable { shape: shape.as_str() });
		}

		Ok(())
	}
}
impl Debug for RestClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RestClient")
			.field("host", &self.host)
			.field("interceptors", &self.interceptors.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use reqwest::header::{HeaderValue, USER_AGENT};
	// self
	use super::*;

	struct UserAgent(&'static str);
	impl RequestInterceptor for UserAgent {
		fn intercept(&self, request: &mut Request) -> Result<()> {
			request.headers_mut().insert(USER_AGENT, HeaderValue::from_static(self.0));

			Ok(())
		}
	}

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Test URL should parse.")
	}

	fn client(host: HostCapabilities) -> RestClient {
		RestClient::with_host(ReqwestClient::new(), Arc::new(ReqwestRequestFactory), host)
	}

	#[test]
	fn interceptors_run_in_registration_order() {
		let mut client = client(HostCapabilities::modern());
		let chain: Vec<Arc<dyn RequestInterceptor>> =
			vec![Arc::new(UserAgent("first")), Arc::new(UserAgent("second"))];

		client.set_interceptors(chain).expect("Modern host should accept list registration.");

		let request = client
			.prepare(Method::GET, url("https://example.com/a"))
			.expect("Request should be prepared.");

		assert_eq!(request.headers()[USER_AGENT], "second");
		assert!(
			client
				.create_request(Method::GET, url("https://example.com/a"))
				.expect("Factory should build the request.")
				.headers()
				.is_empty()
		);
	}

	#[test]
	fn registration_respects_host_shape() {
		let mut modern = client(HostCapabilities::modern());
		let mut array_only = client(HostCapabilities::array_only());
		let mut legacy = client(HostCapabilities::legacy());

		assert_eq!(
			modern.set_interceptor_array([Arc::new(UserAgent("x")) as Arc<dyn RequestInterceptor>]),
			Err(RegistrationError::ShapeUnavailable { shape: "array-based" })
		);
		assert_eq!(
			array_only.set_interceptors(vec![Arc::new(UserAgent("x")) as Arc<dyn RequestInterceptor>]),
			Err(RegistrationError::ShapeUnavailable { shape: "list-based" })
		);
		assert_eq!(
			legacy.set_interceptors(Vec::new()),
			Err(RegistrationError::InterceptorsUnsupported)
		);
		assert!(
			array_only
				.set_interceptor_array([Arc::new(UserAgent("x")) as Arc<dyn RequestInterceptor>])
				.is_ok()
		);
		assert_eq!(array_only.interceptors().len(), 1);
	}

	#[test]
	fn default_factory_rejects_non_http_schemes() {
		let err = ReqwestRequestFactory
			.create_request(Method::GET, url("ftp://example.com/file"))
			.expect_err("FTP URLs should be rejected.");

		assert!(matches!(err, Error::Request { .. }));
	}
}
