//! Builder modules, one per upstream credential issuer.
//!
//! Each module exposes its alias constant plus two pure builders: one for the provider
//! descriptor and one for the fixed attribute-mapper list. The modules are independent and
//! share nothing beyond the wire types.

pub mod bceid_business;
pub mod idir;
