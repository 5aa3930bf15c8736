//! IDIR: government-staff credential federation through the login proxy.
//!
//! Structurally identical to the BCeID Business module, with a narrower claim surface: IDIR
//! tokens carry no business GUID, display name, or family name.

// self
use crate::{
	_prelude::*,
	descriptor::{IdentityProviderDescriptor, OidcEndpointConfig},
	environment::Environment,
	mapper::AttributeMapper,
};

/// Provider alias; must match the identifier the companion provisioning script expects.
pub const ALIAS: &str = "idir";

/// Build the IDIR identity-provider descriptor for the given environment.
///
/// Fails with [`Error::MissingCredential`] when either credential is empty; no other
/// validation is performed.
pub fn identity_provider(
	environment: Environment,
	client_id: impl Into<String>,
	client_secret: impl Into<String>,
) -> Result<IdentityProviderDescriptor> {
	let config =
		OidcEndpointConfig::for_standard_realm(environment, ALIAS, client_id, client_secret)?;

	Ok(IdentityProviderDescriptor::oidc(ALIAS, config))
}

/// Attribute mappers attaching IDIR token claims to local user attributes.
///
/// The list order matches the provisioning scripts for diff stability; the final record is
/// the username mapper.
pub fn mappers() -> Vec<AttributeMapper> {
	tracing::debug!(alias = ALIAS, "assembling attribute mappers");

	vec![
		AttributeMapper::attribute(ALIAS, "guid", "idir_user_guid", "guid"),
		AttributeMapper::attribute(ALIAS, "identity_provider", "identity_provider", "identity_provider"),
		AttributeMapper::attribute(ALIAS, "idir_username", "idir_username", "idir_username"),
		AttributeMapper::username_template(ALIAS, "idir_user_guid"),
	]
}
