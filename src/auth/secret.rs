//! Consumer and token secrets.

// crates.io
use serde::Serializer;
// self
use crate::_prelude::*;

/// Shared secret half of a consumer or access-token pair.
///
/// Formatting never reveals the value. The only ways out are [`Secret::expose`], used when
/// deriving the signing key, and [`Serialize`], so a host can persist the credential set it
/// embedded this crate in.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct Secret(String);
impl Secret {
	/// Wraps a secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw value for signing-key derivation. Never log it.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Whether the secret is empty. RFC 5849 allows an empty token secret.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<String> for Secret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for Secret {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl Serialize for Secret {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.expose())
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(if self.is_empty() { "Secret(<empty>)" } else { "Secret(<redacted>)" })
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn formatting_hides_the_value() {
		let secret = Secret::new("kd94hf93k423kf44");

		assert_eq!(format!("{secret:?}"), "Secret(<redacted>)");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(format!("{:?}", Secret::new("")), "Secret(<empty>)");
	}

	#[test]
	fn serialization_is_the_only_formatted_exposure() {
		let secret = Secret::from("pfkkdhi9sl3r4s00");
		let json = serde_json::to_string(&secret).expect("Secret should serialize.");
		let back: Secret = serde_json::from_str(&json).expect("Secret should deserialize.");

		assert_eq!(json, "\"pfkkdhi9sl3r4s00\"");
		assert_eq!(back, secret);
		assert_eq!(back.expose(), "pfkkdhi9sl3r4s00");
	}
}
