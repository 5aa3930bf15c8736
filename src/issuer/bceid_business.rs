//! BCeID Business: business-credential federation through the login proxy.

// self
use crate::{
	_prelude::*,
	descriptor::{IdentityProviderDescriptor, OidcEndpointConfig},
	environment::Environment,
	mapper::AttributeMapper,
};

/// Provider alias; must match the identifier the companion provisioning script expects.
pub const ALIAS: &str = "bceidbusiness";

/// Build the BCeID Business identity-provider descriptor for the given environment.
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

/// Attribute mappers attaching BCeID Business token claims to local user attributes.
///
/// The list order matches the provisioning scripts for diff stability. The final record is
/// the username mapper, which derives the local username from the user GUID claim and the
/// provider alias instead of copying an attribute.
pub fn mappers() -> Vec<AttributeMapper> {
	tracing::debug!(alias = ALIAS, "assembling attribute mappers");

	vec![
		AttributeMapper::attribute(ALIAS, "guid", "bceid_user_guid", "guid"),
		AttributeMapper::attribute(ALIAS, "identity_provider", "identity_provider", "identity_provider"),
		AttributeMapper::claim_only(ALIAS, "bceid_business_guid", "bceid_business_guid"),
		AttributeMapper::attribute(ALIAS, "family_name", "family_name", "family_name"),
		AttributeMapper::attribute(ALIAS, "bceid_user_guid", "bceid_user_guid", "sub"),
		AttributeMapper::attribute(ALIAS, "display_name", "display_name", "display_name"),
		AttributeMapper::attribute(ALIAS, "bceid_username", "bceid_username", "bceid_username"),
		AttributeMapper::attribute(ALIAS, "email", "email", "email"),
		AttributeMapper::attribute(ALIAS, "given_name", "given_name", "firstName"),
		AttributeMapper::username_template(ALIAS, "bceid_user_guid"),
	]
}
