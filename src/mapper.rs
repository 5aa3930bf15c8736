//! Attribute-mapper wire types for the Keycloak admin API.
//!
//! Each mapper attaches to an identity provider by alias and either copies a token claim into
//! a local user attribute or derives the local username from a template. Keycloak keys mappers
//! by name, so list ordering carries no runtime meaning.

// crates.io
use serde::{Deserialize, Serialize};
// self
use crate::{_prelude::*, descriptor::SyncMode};

/// Broker mapper implementations used by the generated configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapperKind {
	/// Copies a token claim into a local user attribute.
	#[serde(rename = "oidc-user-attribute-idp-mapper")]
	UserAttribute,
	/// Derives the local username from a template.
	#[serde(rename = "oidc-username-idp-mapper")]
	UsernameTemplate,
}

/// Attribute-mapper record attached to an identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeMapper {
	/// Mapper name, unique per provider.
	pub name: String,
	/// Alias of the provider this mapper attaches to.
	pub identity_provider_alias: String,
	/// Mapper implementation identifier.
	pub identity_provider_mapper: MapperKind,
	/// Implementation-specific configuration.
	pub config: MapperConfig,
}
impl AttributeMapper {
	/// Mapper copying `claim` into the local `user_attribute`.
	pub fn attribute(alias: &str, name: &str, claim: &str, user_attribute: &str) -> Self {
		Self {
			name: name.into(),
			identity_provider_alias: alias.into(),
			identity_provider_mapper: MapperKind::UserAttribute,
			config: MapperConfig {
				sync_mode: SyncMode::Inherit,
				claim: Some(claim.into()),
				user_attribute: Some(user_attribute.into()),
				template: None,
			},
		}
	}

	/// Mapper carrying a claim with no local attribute target.
	pub fn claim_only(alias: &str, name: &str, claim: &str) -> Self {
		Self {
			name: name.into(),
			identity_provider_alias: alias.into(),
			identity_provider_mapper: MapperKind::UserAttribute,
			config: MapperConfig {
				sync_mode: SyncMode::Inherit,
				claim: Some(claim.into()),
				user_attribute: None,
				template: None,
			},
		}
	}

	/// Username mapper deriving the local username as `${CLAIM.<claim>}@${ALIAS}`.
	pub fn username_template(alias: &str, claim: &str) -> Self {
		Self {
			name: "username".into(),
			identity_provider_alias: alias.into(),
			identity_provider_mapper: MapperKind::UsernameTemplate,
			config: MapperConfig {
				sync_mode: SyncMode::Inherit,
				claim: None,
				user_attribute: None,
				template: Some(format!("${{CLAIM.{claim}}}@${{ALIAS}}")),
			},
		}
	}

	/// Serialize the mapper as pretty-printed admin-API JSON.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

/// Mapper configuration payload.
///
/// Absent optional fields are omitted from the serialized record entirely; the admin API
/// treats a missing key and an empty value differently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapperConfig {
	/// Synchronization policy for the mapped value.
	pub sync_mode: SyncMode,
	/// Upstream token claim to read.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub claim: Option<String>,
	/// Local user attribute to populate.
	#[serde(default, rename = "user.attribute", skip_serializing_if = "Option::is_none")]
	pub user_attribute: Option<String>,
	/// Username template referencing a claim and the provider alias.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub template: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn attribute_mapper_serializes_with_dotted_key() {
		let mapper = AttributeMapper::attribute("idir", "guid", "idir_user_guid", "guid");
		let value = serde_json::to_value(&mapper).unwrap();

		assert_eq!(
			value,
			serde_json::json!({
				"name": "guid",
				"identityProviderAlias": "idir",
				"identityProviderMapper": "oidc-user-attribute-idp-mapper",
				"config": {
					"syncMode": "INHERIT",
					"claim": "idir_user_guid",
					"user.attribute": "guid",
				},
			})
		);
	}

	#[test]
	fn claim_only_mapper_omits_the_attribute_key() {
		let mapper =
			AttributeMapper::claim_only("bceidbusiness", "bceid_business_guid", "bceid_business_guid");
		let value = serde_json::to_value(&mapper).unwrap();

		assert!(value["config"].get("user.attribute").is_none());
		assert_eq!(value["config"]["claim"], serde_json::json!("bceid_business_guid"));
	}

	#[test]
	fn username_template_renders_claim_and_alias_placeholders() {
		let mapper = AttributeMapper::username_template("idir", "idir_user_guid");

		assert_eq!(mapper.name, "username");
		assert_eq!(mapper.identity_provider_mapper, MapperKind::UsernameTemplate);
		assert_eq!(mapper.config.template.as_deref(), Some("${CLAIM.idir_user_guid}@${ALIAS}"));
		assert!(mapper.config.claim.is_none());
	}
}
