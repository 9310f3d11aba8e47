//! The inventory field table.
//!
//! Field wirings are plain data: the execution engine asks the registry
//! for the resolver of a `(type, field)` pair and hands whatever it gets
//! to [`run_resolver`](crate::resolvers::run_resolver).

use std::collections::BTreeMap;

use crate::{query::Link, resolvers::Resolver, shape::Skeleton};

/// Maps `(parent type, field name)` to a resolver definition.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Registry {
    fields: BTreeMap<String, BTreeMap<String, Resolver>>,
}

impl Registry {
    pub fn resolver(&self, type_name: &str, field_name: &str) -> Option<&Resolver> {
        self.fields.get(type_name)?.get(field_name)
    }

    pub fn insert(
        &mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: Resolver,
    ) {
        self.fields
            .entry(type_name.into())
            .or_default()
            .insert(field_name.into(), resolver);
    }

    pub fn len(&self) -> usize {
        self.fields.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The REST-backed fields of the inventory schema.
pub fn inventory_registry() -> Registry {
    let mut registry = Registry::default();

    registry.insert(
        "Query",
        "users",
        Resolver::Listing {
            path: "users".into(),
            link: None,
            skeleton: Skeleton::key("users"),
        },
    );
    registry.insert(
        "Query",
        "groups",
        Resolver::Listing {
            path: "groups".into(),
            link: None,
            skeleton: Skeleton::key("usergroups"),
        },
    );
    registry.insert(
        "Query",
        "instances",
        Resolver::Listing {
            path: "instance-storage/instances".into(),
            link: None,
            skeleton: Skeleton::map([("records", "instances"), ("totalCount", "totalRecords")]),
        },
    );
    registry.insert(
        "Query",
        "instance",
        Resolver::Record {
            path: "instance-storage/instances".into(),
        },
    );

    registry.insert(
        "Metadata",
        "createdByUser",
        Resolver::Linked {
            path: "users".into(),
            id_field: "createdByUserId".into(),
        },
    );
    registry.insert(
        "Metadata",
        "updatedByUser",
        Resolver::Linked {
            path: "users".into(),
            id_field: "updatedByUserId".into(),
        },
    );

    registry.insert(
        "Instance",
        "instanceType",
        Resolver::Linked {
            path: "instance-types".into(),
            id_field: "instanceTypeId".into(),
        },
    );
    registry.insert(
        "Instance",
        "instanceFormat",
        Resolver::Linked {
            path: "instance-formats".into(),
            id_field: "instanceFormatId".into(),
        },
    );
    registry.insert(
        "Instance",
        "holdingsRecords",
        Resolver::Listing {
            path: "holdings-storage/holdings".into(),
            link: Some(Link::new("id", "instanceId")),
            skeleton: Skeleton::key("holdingsRecords"),
        },
    );

    registry.insert(
        "HoldingsRecord",
        "holdingsItems",
        Resolver::Listing {
            path: "inventory/items".into(),
            link: Some(Link::new("id", "holdingsRecordId")),
            skeleton: Skeleton::key("items"),
        },
    );

    registry.insert(
        "Identifier",
        "identifierType",
        Resolver::Linked {
            path: "identifier-types".into(),
            id_field: "identifierTypeId".into(),
        },
    );

    registry.insert(
        "Contributor",
        "contributorType",
        Resolver::Linked {
            path: "contributor-types".into(),
            id_field: "contributorTypeId".into(),
        },
    );
    registry.insert(
        "Contributor",
        "contributorNameType",
        Resolver::Linked {
            path: "contributor-name-types".into(),
            id_field: "contributorNameTypeId".into(),
        },
    );

    registry.insert(
        "Classification",
        "classificationType",
        Resolver::Linked {
            path: "classification-types".into(),
            id_field: "classificationTypeId".into(),
        },
    );

    registry.insert(
        "Mutation",
        "createGroup",
        Resolver::Create { path: "groups".into() },
    );
    registry.insert(
        "Mutation",
        "updateGroup",
        Resolver::Update {
            path: "groups".into(),
            strip_metadata: true,
        },
    );
    registry.insert(
        "Mutation",
        "deleteGroup",
        Resolver::Delete { path: "groups".into() },
    );
    registry.insert(
        "Mutation",
        "updateUser",
        Resolver::Update {
            path: "users".into(),
            strip_metadata: false,
        },
    );

    registry
}
