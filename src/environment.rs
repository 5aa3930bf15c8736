//! Deployment environment selection for the login proxy.

// std
use std::{
	convert::Infallible,
	fmt::{Display, Formatter, Result as FmtResult},
	str::FromStr,
};
// crates.io
use serde::{Deserialize, Serialize};

/// Keycloak deployment environment targeted by the generated configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	/// Development login proxy.
	Dev,
	/// Test login proxy.
	Test,
	/// Production login proxy.
	#[default]
	Prod,
}
impl Environment {
	/// Resolve an environment from its conventional name.
	///
	/// Only `"dev"` and `"test"` select the non-production proxies. Every other value —
	/// `"prod"`, the empty string, and unrecognized names alike — resolves to
	/// [`Environment::Prod`]. Production-as-default is the established provisioning policy;
	/// note that a typoed environment name therefore silently targets production.
	pub fn from_name(name: &str) -> Self {
		match name {
			"dev" => Self::Dev,
			"test" => Self::Test,
			_ => Self::Prod,
		}
	}

	/// Base URL of the login proxy for this environment.
	pub fn base_url(self) -> &'static str {
		match self {
			Self::Dev => "https://dev.loginproxy.gov.bc.ca",
			Self::Test => "https://test.loginproxy.gov.bc.ca",
			Self::Prod => "https://loginproxy.gov.bc.ca",
		}
	}

	/// Conventional name used by provisioning scripts.
	pub fn name(self) -> &'static str {
		match self {
			Self::Dev => "dev",
			Self::Test => "test",
			Self::Prod => "prod",
		}
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.write_str(self.name())
	}
}
impl FromStr for Environment {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::from_name(s))
	}
}
