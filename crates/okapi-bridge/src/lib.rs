//! GraphQL field resolution over Okapi-style REST modules.
//!
//! The execution engine owns the schema and drives field resolution; this
//! crate owns the translation. A field invocation is turned into the REST
//! call it implies (module path, CQL filter, pagination, link-derived
//! constraints), performed with the request's [`OkapiContext`], and the
//! JSON the module answers with is reshaped into the value the field
//! returns. Partial updates are emulated on top of full-replacement PUTs
//! by reading, merging and writing back.
//!
//! Everything is stateless across requests: the REST service is the
//! system of record, and a context lives exactly as long as the GraphQL
//! request it was built for.

pub mod context;
pub mod error;
pub mod fetch;
pub mod merge;
pub mod query;
pub mod registry;
pub mod resolvers;
pub mod shape;

pub use context::{OkapiConfig, OkapiContext, TENANT_HEADER, TOKEN_HEADER};
pub use error::Error;
pub use merge::deep_merge;
pub use query::{build_query, Link, ListArguments};
pub use registry::{inventory_registry, Registry};
pub use resolvers::{run_resolver, Resolver};
pub use shape::Skeleton;
