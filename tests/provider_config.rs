//! Integration tests for the generated identity-provider configuration.
//!
//! These pin the full serialized wire shape of both issuers against the Keycloak admin-API
//! schema, since a downstream provisioning client submits these objects verbatim.

// crates.io
use loginproxy_idp_config::{
	Environment, Error, Result,
	issuer::{bceid_business, idir},
};
use serde_json::{Value, json};

fn endpoint_config(base: &str, alias: &str, client_id: &str, client_secret: &str) -> Value {
	json!({
		"userInfoUrl": format!("{base}/auth/realms/standard/protocol/openid-connect/userinfo"),
		"validateSignature": "true",
		"clientId": client_id,
		"tokenUrl": format!("{base}/auth/realms/standard/protocol/openid-connect/token"),
		"jwksUrl": format!("{base}/auth/realms/standard/protocol/openid-connect/certs"),
		"issuer": format!("{base}/auth/realms/standard"),
		"useJwksUrl": "true",
		"loginHint": "true",
		"authorizationUrl":
			format!("{base}/auth/realms/standard/protocol/openid-connect/auth?kc_idp_hint={alias}"),
		"clientAuthMethod": "client_secret_post",
		"logoutUrl": format!("{base}/auth/realms/standard/protocol/openid-connect/logout"),
		"syncMode": "FORCE",
		"clientSecret": client_secret,
		"defaultScope": "openid profile email",
	})
}

#[test]
fn bceid_business_descriptor_matches_the_admin_api_shape() -> Result<()> {
	let _ = tracing_subscriber::fmt::try_init();

	let descriptor = bceid_business::identity_provider(Environment::Dev, "abc", "secret")?;

	assert_eq!(
		serde_json::to_value(&descriptor)?,
		json!({
			"alias": "bceidbusiness",
			"displayName": "bceidbusiness",
			"providerId": "oidc",
			"enabled": true,
			"updateProfileFirstLoginMode": "on",
			"trustEmail": false,
			"storeToken": false,
			"addReadTokenRoleOnCreate": false,
			"authenticateByDefault": false,
			"linkOnly": false,
			"hideOnLogin": false,
			"firstBrokerLoginFlowAlias": "first broker login",
			"config": endpoint_config(
				"https://dev.loginproxy.gov.bc.ca",
				"bceidbusiness",
				"abc",
				"secret"
			),
		})
	);

	Ok(())
}

#[test]
fn idir_descriptor_matches_the_admin_api_shape() -> Result<()> {
	let _ = tracing_subscriber::fmt::try_init();

	let descriptor = idir::identity_provider(Environment::Test, "staff-client", "s3cret")?;

	assert_eq!(
		serde_json::to_value(&descriptor)?,
		json!({
			"alias": "idir",
			"displayName": "idir",
			"providerId": "oidc",
			"enabled": true,
			"updateProfileFirstLoginMode": "on",
			"trustEmail": false,
			"storeToken": false,
			"addReadTokenRoleOnCreate": false,
			"authenticateByDefault": false,
			"linkOnly": false,
			"hideOnLogin": false,
			"firstBrokerLoginFlowAlias": "first broker login",
			"config": endpoint_config(
				"https://test.loginproxy.gov.bc.ca",
				"idir",
				"staff-client",
				"s3cret"
			),
		})
	);

	Ok(())
}

#[test]
fn unrecognized_environments_resolve_to_production() -> Result<()> {
	for name in ["prod", "", "staging", "Production"] {
		let descriptor =
			idir::identity_provider(Environment::from_name(name), "abc", "secret")?;

		assert!(
			descriptor
				.config
				.issuer
				.as_str()
				.starts_with("https://loginproxy.gov.bc.ca"),
			"environment {name:?} did not resolve to production"
		);
	}

	Ok(())
}

#[test]
fn idir_mapper_list_matches_the_admin_api_shape() {
	let mappers = idir::mappers();
	let value = serde_json::to_value(&mappers).expect("serializable mappers");

	assert_eq!(
		value,
		json!([
			{
				"name": "guid",
				"identityProviderAlias": "idir",
				"identityProviderMapper": "oidc-user-attribute-idp-mapper",
				"config": {
					"syncMode": "INHERIT",
					"claim": "idir_user_guid",
					"user.attribute": "guid",
				},
			},
			{
				"name": "identity_provider",
				"identityProviderAlias": "idir",
				"identityProviderMapper": "oidc-user-attribute-idp-mapper",
				"config": {
					"syncMode": "INHERIT",
					"claim": "identity_provider",
					"user.attribute": "identity_provider",
				},
			},
			{
				"name": "idir_username",
				"identityProviderAlias": "idir",
				"identityProviderMapper": "oidc-user-attribute-idp-mapper",
				"config": {
					"syncMode": "INHERIT",
					"claim": "idir_username",
					"user.attribute": "idir_username",
				},
			},
			{
				"name": "username",
				"identityProviderAlias": "idir",
				"identityProviderMapper": "oidc-username-idp-mapper",
				"config": {
					"syncMode": "INHERIT",
					"template": "${CLAIM.idir_user_guid}@${ALIAS}",
				},
			},
		])
	);
}

#[test]
fn bceid_business_mapper_names_follow_the_provisioning_order() {
	let names: Vec<_> = bceid_business::mappers().into_iter().map(|mapper| mapper.name).collect();

	assert_eq!(names, [
		"guid",
		"identity_provider",
		"bceid_business_guid",
		"family_name",
		"bceid_user_guid",
		"display_name",
		"bceid_username",
		"email",
		"given_name",
		"username",
	]);
}

#[test]
fn builders_are_idempotent() -> Result<()> {
	let first = bceid_business::identity_provider(Environment::Dev, "abc", "secret")?;
	let second = bceid_business::identity_provider(Environment::Dev, "abc", "secret")?;

	assert_eq!(first, second);
	assert_eq!(idir::mappers(), idir::mappers());
	assert_eq!(bceid_business::mappers(), bceid_business::mappers());

	Ok(())
}

#[test]
fn credential_errors_surface_to_the_caller() {
	let err = bceid_business::identity_provider(Environment::Prod, "", "secret").unwrap_err();

	assert!(matches!(err, Error::MissingCredential { field: "client_id" }));
	assert_eq!(
		err.to_string(),
		"Missing credential 'client_id'; client ID and client secret are required."
	);
}
