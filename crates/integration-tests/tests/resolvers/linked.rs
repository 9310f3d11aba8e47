use integration_tests::{okapi_context, runtime};
use okapi_bridge::{inventory_registry, run_resolver};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[test]
fn resolves_the_linked_entity_by_identifier() {
    runtime().block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/u1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "u1",
                "username": "jack",
            })))
            .mount(&server)
            .await;

        let ctx = okapi_context(&server.uri());
        let registry = inventory_registry();
        let resolver = registry.resolver("Metadata", "createdByUser").unwrap();

        let parent = json!({"createdByUserId": "u1", "createdDate": "2024-05-01"});
        let value = run_resolver(resolver, &ctx, Some(&parent), &json!({})).await.unwrap();

        assert_eq!(value, json!({"id": "u1", "username": "jack"}));
    });
}

#[test]
fn missing_identifier_resolves_null_without_a_call() {
    runtime().block_on(async {
        let server = MockServer::start().await;

        let ctx = okapi_context(&server.uri());
        let registry = inventory_registry();
        let resolver = registry.resolver("Instance", "instanceFormat").unwrap();

        // An instance without a format: no identifier at all, then an
        // explicitly empty one.
        for parent in [json!({"id": "in1"}), json!({"id": "in1", "instanceFormatId": ""})] {
            let value = run_resolver(resolver, &ctx, Some(&parent), &json!({})).await.unwrap();
            assert_eq!(value, json!(null));
        }

        assert!(server.received_requests().await.unwrap().is_empty());
    });
}

#[test]
fn lookup_failure_surfaces_on_this_field() {
    runtime().block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/instance-types/t1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("instance type store is down"))
            .mount(&server)
            .await;

        let ctx = okapi_context(&server.uri());
        let registry = inventory_registry();
        let resolver = registry.resolver("Instance", "instanceType").unwrap();

        let err = run_resolver(resolver, &ctx, Some(&json!({"instanceTypeId": "t1"})), &json!({}))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "instance type store is down");
    });
}

#[test]
fn record_lookup_uses_the_id_argument() {
    runtime().block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/instance-storage/instances/in1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "in1",
                "title": "Semantic web primer",
            })))
            .mount(&server)
            .await;

        let ctx = okapi_context(&server.uri());
        let registry = inventory_registry();
        let resolver = registry.resolver("Query", "instance").unwrap();

        let value = run_resolver(resolver, &ctx, None, &json!({"id": "in1"})).await.unwrap();

        assert_eq!(value, json!({"id": "in1", "title": "Semantic web primer"}));
    });
}
