// std
use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};
// crates.io
use httpmock::prelude::*;
// self
use oauth1_resource_client::{
	auth::Credentials,
	capability::{CapabilityProbe, DecorationStrategy, HostCapabilities},
	error::{Error, SignError},
	factory::ClientFactory,
	http::{ReqwestRequestFactory, RequestFactory},
	reqwest::{Method, header::AUTHORIZATION},
	sign::Signer,
	url::Url,
};

/// Deterministic signer that counts invocations.
#[derive(Default)]
struct CountingSigner {
	calls: AtomicUsize,
}
impl CountingSigner {
	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl Signer for CountingSigner {
	fn sign(
		&self,
		method: &Method,
		url: &Url,
		credentials: &Credentials,
	) -> Result<String, SignError> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		Ok(render(method, url, credentials))
	}
}

fn render(method: &Method, url: &Url, credentials: &Credentials) -> String {
	format!("OAuth signed={method}:{url}:{}:{}", credentials.consumer_key, credentials.access_token)
}

fn k1() -> Credentials {
	Credentials::new("k1-consumer", "k1-consumer-secret", "k1-token", "k1-token-secret")
}

fn factory(host: HostCapabilities, signer: Arc<CountingSigner>) -> ClientFactory {
	ClientFactory::from_probe(&CapabilityProbe::new(host)).with_signer(signer)
}

#[test]
fn array_only_host_signs_the_example_resource() {
	let signer = Arc::new(CountingSigner::default());
	let client = factory(HostCapabilities::array_only(), signer.clone()).create(&k1());
	let url = Url::parse("https://api.example.com/resource")
		.expect("Example resource URL should parse.");
	let request = client.prepare(Method::GET, url.clone()).expect("Request should be prepared.");

	assert_eq!(client.interceptors().len(), 1);
	assert_eq!(request.headers()[AUTHORIZATION], render(&Method::GET, &url, &k1()).as_str());
	assert_eq!(signer.calls(), 1, "Exactly one decorator should sign each request.");
}

#[test]
fn every_host_signs_each_request_exactly_once() {
	for host in
		[HostCapabilities::modern(), HostCapabilities::array_only(), HostCapabilities::legacy()]
	{
		let signer = Arc::new(CountingSigner::default());
		let client = factory(host, signer.clone()).create(&k1());
		let url = Url::parse("https://api.example.com/items?sort=asc")
			.expect("Items URL should parse.");

		for (idx, method) in [Method::GET, Method::POST, Method::DELETE].into_iter().enumerate() {
			let request =
				client.prepare(method.clone(), url.clone()).expect("Request should be prepared.");

			assert_eq!(request.headers().get_all(AUTHORIZATION).iter().count(), 1);
			assert_eq!(request.headers()[AUTHORIZATION], render(&method, &url, &k1()).as_str());
			assert_eq!(signer.calls(), idx + 1, "Host {host:?} signed a request twice.");
		}
	}
}

#[test]
fn global_decision_is_stable_and_matches_factory() {
	let first = CapabilityProbe::global().decision();
	let second = CapabilityProbe::global().decision();
	let factory = ClientFactory::new();

	assert_eq!(first, second);
	assert_eq!(factory.decision(), first);

	match first.strategy() {
		DecorationStrategy::Interceptor(_) => assert!(cfg!(feature = "interceptors")),
		DecorationStrategy::Wrapping => assert!(!cfg!(feature = "interceptors")),
	}
}

#[test]
fn add_oauth_signing_follows_interceptor_support() {
	let original: Arc<dyn RequestFactory> = Arc::new(ReqwestRequestFactory);
	let modern = factory(HostCapabilities::modern(), Arc::default());
	let legacy = factory(HostCapabilities::legacy(), Arc::default());
	let url = Url::parse("https://api.example.com/resource").expect("URL should parse.");

	assert!(Arc::ptr_eq(&modern.add_oauth_signing(original.clone(), &k1()), &original));

	let wrapped = legacy.add_oauth_signing(original.clone(), &k1());
	let raw =
		original.create_request(Method::GET, url.clone()).expect("Raw request should build.");
	let signed =
		wrapped.create_request(Method::GET, url.clone()).expect("Signed request should build.");
	let mut headers = signed.headers().clone();

	assert!(headers.remove(AUTHORIZATION).is_some());
	assert_eq!(&headers, raw.headers());
	assert_eq!(signed.url(), raw.url());
}

#[tokio::test]
async fn legacy_host_sends_signed_requests_over_the_wire() -> color_eyre::Result<()> {
	let server = MockServer::start_async().await;
	let url = Url::parse(&server.url("/resource"))?;
	let expected = render(&Method::GET, &url, &k1());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/resource").header("authorization", expected.as_str());
			then.status(200).body("ok");
		})
		.await;
	let client = factory(HostCapabilities::legacy(), Arc::default()).create(&k1());
	let response = client.get(url).await?;

	assert_eq!(response.status().as_u16(), 200);
	assert_eq!(response.text().await?, "ok");

	mock.assert_async().await;

	Ok(())
}

#[tokio::test]
async fn interceptor_host_sends_signed_requests_over_the_wire() -> color_eyre::Result<()> {
	let server = MockServer::start_async().await;
	let url = Url::parse(&server.url("/statuses"))?;
	let expected = render(&Method::POST, &url, &k1());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/statuses").header("authorization", expected.as_str());
			then.status(201);
		})
		.await;
	let client = factory(HostCapabilities::modern(), Arc::default()).create(&k1());
	let response = client.send(Method::POST, url).await?;

	assert_eq!(response.status().as_u16(), 201);

	mock.assert_async().await;

	Ok(())
}

#[tokio::test]
async fn signer_failure_surfaces_at_dispatch_without_sending() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(200);
		})
		.await;
	let failing = |_: &Method, _: &Url, _: &Credentials| -> Result<String, SignError> {
		Err(SignError::other("consumer key revoked"))
	};
	let client = ClientFactory::from_probe(&CapabilityProbe::new(HostCapabilities::modern()))
		.with_signer(Arc::new(failing))
		.create(&k1());
	let url = Url::parse(&server.url("/resource")).expect("Mock server URL should parse.");
	let err = client.get(url).await.expect_err("Signer failure should abort the request.");

	assert!(matches!(err, Error::Signing(SignError::Other { .. })));

	mock.assert_calls_async(0).await;
}
