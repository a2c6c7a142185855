// self
use crate::obs::{DecorationKind, SignOutcome};

/// Records that a client was built with `kind` attached (when metrics are enabled).
pub fn record_decoration(kind: DecorationKind) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("oauth1_client_decoration_total", "decoration" => kind.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = kind;
	}
}

/// Records a signing attempt via the global metrics recorder (when enabled).
pub fn record_sign_outcome(kind: DecorationKind, outcome: SignOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth1_client_sign_total",
			"decoration" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recorders_noop_without_metrics() {
		record_decoration(DecorationKind::Wrapping);
		record_sign_outcome(DecorationKind::Interceptor, SignOutcome::Failure);
	}
}
