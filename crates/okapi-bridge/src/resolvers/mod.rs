//! REST-backed field resolution.
//!
//! A [`Resolver`] describes how one GraphQL field maps onto the service:
//! which module path it reads or writes, how a listing is constrained,
//! and how the payload is reshaped. The execution engine looks the
//! definition up in the registry and drives it through [`run_resolver`];
//! every variant composes the same fetch primitive.
//!
//! Definitions are plain serde values, so a registry can equally well be
//! built in code or loaded from configuration.

use serde_json::Value;
use tracing::{info_span, Instrument};

use crate::{
    context::OkapiContext,
    error::Error,
    query::{Link, ListArguments},
    shape::Skeleton,
};

pub mod linked;
pub mod listing;
pub mod mutation;

/// How a single REST-backed field gets resolved.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Resolver {
    /// A searchable collection listing, optionally constrained to the
    /// parent record through a link.
    Listing {
        path: String,
        #[serde(default)]
        link: Option<Link>,
        skeleton: Skeleton,
    },
    /// A single record fetched by the caller's `id` argument.
    Record { path: String },
    /// An optional one-to-one relation resolved through an identifier
    /// field on the parent record.
    Linked { path: String, id_field: String },
    /// POST a new record to the collection.
    Create { path: String },
    /// Read-merge-write replacement standing in for a partial update the
    /// service does not support.
    Update { path: String, strip_metadata: bool },
    /// DELETE by identifier, echoing the identifier back on success.
    Delete { path: String },
}

#[derive(serde::Deserialize)]
struct IdArguments {
    id: String,
}

#[derive(serde::Deserialize)]
struct RecordArguments {
    record: Value,
}

#[derive(serde::Deserialize)]
struct UpdateArguments {
    id: String,
    record: Value,
}

fn arguments<T: serde::de::DeserializeOwned>(args: &Value) -> Result<T, Error> {
    serde_json::from_value(args.clone()).map_err(|source| Error::InvalidArguments(source.to_string()))
}

/// Resolves one field invocation.
///
/// `parent` is the already-resolved parent object, when the field hangs
/// off one; `args` is the field's argument object as the executor hands
/// it over. A REST failure comes back as an error on this field alone;
/// sibling resolutions are unaffected and free to run concurrently.
pub async fn run_resolver(
    resolver: &Resolver,
    ctx: &OkapiContext,
    parent: Option<&Value>,
    args: &Value,
) -> Result<Value, Error> {
    match resolver {
        Resolver::Listing { path, link, skeleton } => {
            let args: ListArguments = arguments(args)?;

            listing::resolve_listing(ctx, path, parent, &args, link.as_ref(), skeleton)
                .instrument(info_span!("listing_resolver", path = %path))
                .await
        }
        Resolver::Record { path } => {
            let IdArguments { id } = arguments(args)?;

            linked::fetch_record(ctx, path, &id)
                .instrument(info_span!("record_resolver", path = %path))
                .await
        }
        Resolver::Linked { path, id_field } => {
            linked::resolve_linked(ctx, parent.unwrap_or(&Value::Null), id_field, path)
                .instrument(info_span!("linked_resolver", path = %path))
                .await
        }
        Resolver::Create { path } => {
            let RecordArguments { record } = arguments(args)?;

            mutation::create_record(ctx, path, record)
                .instrument(info_span!("create_resolver", path = %path))
                .await
        }
        Resolver::Update { path, strip_metadata } => {
            let UpdateArguments { id, record } = arguments(args)?;

            mutation::update_record(ctx, path, &id, record, *strip_metadata)
                .instrument(info_span!("update_resolver", path = %path))
                .await
        }
        Resolver::Delete { path } => {
            let IdArguments { id } = arguments(args)?;

            mutation::delete_record(ctx, path, &id)
                .instrument(info_span!("delete_resolver", path = %path))
                .await
        }
    }
}
