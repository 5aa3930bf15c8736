//! Identity-provider descriptor wire types for the Keycloak admin API.
//!
//! Serialized field names are a wire contract: the provisioning client submits these records
//! verbatim as admin-API request bodies. Keycloak stores every value inside the provider
//! `config` block as a string, so boolean flags serialize as `"true"`/`"false"` there.

// crates.io
use serde::{Deserialize, Serialize};
use url::Url;
// self
use crate::{_prelude::*, environment::Environment};

/// Path prefix of the standard realm on the login proxy.
const STANDARD_REALM_PATH: &str = "/auth/realms/standard";
/// Path prefix of the standard realm's OIDC protocol endpoints.
const PROTOCOL_PATH: &str = "/auth/realms/standard/protocol/openid-connect";

/// Identity-provider record accepted by the Keycloak admin API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderDescriptor {
	/// Stable identifier for the provider within the broker realm.
	pub alias: String,
	/// Human-readable name shown on the login page.
	pub display_name: String,
	/// Broker protocol implementation; always `"oidc"` here.
	pub provider_id: String,
	/// Whether the provider is active.
	pub enabled: bool,
	/// First-login profile update policy.
	pub update_profile_first_login_mode: String,
	/// Whether email from the issuer is trusted without verification.
	pub trust_email: bool,
	/// Whether upstream tokens are retained after login.
	pub store_token: bool,
	/// Whether new users receive the read-token role.
	pub add_read_token_role_on_create: bool,
	/// Whether this provider is tried automatically for unauthenticated sessions.
	pub authenticate_by_default: bool,
	/// Whether the provider is restricted to account linking.
	pub link_only: bool,
	/// Whether the provider is hidden on the login page.
	pub hide_on_login: bool,
	/// Authentication flow executed on a user's first brokered login.
	pub first_broker_login_flow_alias: String,
	/// Protocol endpoints and client credentials.
	pub config: OidcEndpointConfig,
}
impl IdentityProviderDescriptor {
	/// Build an OIDC descriptor carrying the broker's standard behavioral flags.
	///
	/// The display name mirrors the alias; companion provisioning scripts look providers up
	/// by alias, so both must stay in sync with the issuer module's constant.
	pub fn oidc(alias: &str, config: OidcEndpointConfig) -> Self {
		Self {
			alias: alias.into(),
			display_name: alias.into(),
			provider_id: "oidc".into(),
			enabled: true,
			update_profile_first_login_mode: "on".into(),
			trust_email: false,
			store_token: false,
			add_read_token_role_on_create: false,
			authenticate_by_default: false,
			link_only: false,
			hide_on_login: false,
			first_broker_login_flow_alias: "first broker login".into(),
			config,
		}
	}

	/// Serialize the descriptor as pretty-printed admin-API JSON.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

/// OIDC endpoint and client configuration nested inside a provider descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcEndpointConfig {
	/// OIDC userinfo endpoint.
	pub user_info_url: Url,
	/// Whether token signatures are validated against the issuer keys.
	#[serde(with = "stringified_bool")]
	pub validate_signature: bool,
	/// OAuth client identifier issued to the broker.
	pub client_id: String,
	/// OIDC token endpoint.
	pub token_url: Url,
	/// JWKS endpoint used for signature validation.
	pub jwks_url: Url,
	/// Issuer identifier expected in upstream tokens.
	pub issuer: Url,
	/// Whether signing keys are fetched from `jwksUrl`.
	#[serde(with = "stringified_bool")]
	pub use_jwks_url: bool,
	/// Whether the broker forwards the login hint to the issuer.
	#[serde(with = "stringified_bool")]
	pub login_hint: bool,
	/// Authorization endpoint, pre-selecting this issuer via `kc_idp_hint`.
	pub authorization_url: Url,
	/// Client authentication method at the token endpoint.
	pub client_auth_method: String,
	/// OIDC logout endpoint.
	pub logout_url: Url,
	/// Synchronization policy applied to brokered user data.
	pub sync_mode: SyncMode,
	/// OAuth client secret issued to the broker.
	pub client_secret: String,
	/// Scopes requested from the issuer by default.
	pub default_scope: String,
}
impl OidcEndpointConfig {
	/// Derive the endpoint set for the standard realm of the given environment.
	///
	/// All six URLs are produced by appending fixed path suffixes to the environment's base
	/// URL; the authorization URL additionally embeds `kc_idp_hint=<alias>` so the broker
	/// redirects straight to the intended issuer. Credential presence is the only validation
	/// performed — construction fails with [`Error::MissingCredential`] before any object is
	/// built, and no format or length checks apply.
	pub fn for_standard_realm(
		environment: Environment,
		alias: &str,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Result<Self> {
		let client_id = non_empty("client_id", client_id.into())?;
		let client_secret = non_empty("client_secret", client_secret.into())?;
		let base_url = environment.base_url();

		tracing::debug!(base_url, alias, "resolved login proxy base URL");

		Ok(Self {
			user_info_url: Url::parse(&format!("{base_url}{PROTOCOL_PATH}/userinfo"))?,
			validate_signature: true,
			client_id,
			token_url: Url::parse(&format!("{base_url}{PROTOCOL_PATH}/token"))?,
			jwks_url: Url::parse(&format!("{base_url}{PROTOCOL_PATH}/certs"))?,
			issuer: Url::parse(&format!("{base_url}{STANDARD_REALM_PATH}"))?,
			use_jwks_url: true,
			login_hint: true,
			authorization_url: Url::parse(&format!(
				"{base_url}{PROTOCOL_PATH}/auth?kc_idp_hint={alias}"
			))?,
			client_auth_method: "client_secret_post".into(),
			logout_url: Url::parse(&format!("{base_url}{PROTOCOL_PATH}/logout"))?,
			sync_mode: SyncMode::Force,
			client_secret,
			default_scope: "openid profile email".into(),
		})
	}
}

/// Synchronization policy Keycloak applies to brokered user data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SyncMode {
	/// Copy data once, at first login.
	Import,
	/// Follow the realm-wide legacy behavior.
	Legacy,
	/// Inherit the owning provider's sync mode.
	#[default]
	Inherit,
	/// Overwrite local data on every login.
	Force,
}

/// Keycloak stores provider `config` values as strings; booleans travel as `"true"`/`"false"`.
pub(crate) mod stringified_bool {
	// crates.io
	use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

	pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(if *value { "true" } else { "false" })
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
	where
		D: Deserializer<'de>,
	{
		match String::deserialize(deserializer)?.as_str() {
			"true" => Ok(true),
			"false" => Ok(false),
			other =>
				Err(D::Error::custom(format!("Expected \"true\" or \"false\", got {other:?}."))),
		}
	}
}

fn non_empty(field: &'static str, value: String) -> Result<String> {
	if value.is_empty() {
		return Err(Error::MissingCredential { field });
	}

	Ok(value)
}
