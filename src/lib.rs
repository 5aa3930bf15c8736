//! Static Keycloak identity-provider and attribute-mapper configuration builders for the B.C.
//! government login proxy — deterministic admin-API objects for dev, test, and prod.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod descriptor;
pub mod environment;
pub mod issuer;
pub mod mapper;

mod error;
mod _prelude {
	pub use crate::{Error, Result};
}

pub use crate::{
	descriptor::{IdentityProviderDescriptor, OidcEndpointConfig, SyncMode},
	environment::Environment,
	error::{Error, Result},
	mapper::{AttributeMapper, MapperConfig, MapperKind},
};
