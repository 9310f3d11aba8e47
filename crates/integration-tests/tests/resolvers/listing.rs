use integration_tests::{okapi_context, runtime};
use okapi_bridge::{inventory_registry, run_resolver, Error};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[test]
fn lists_users_with_a_cql_filter() {
    runtime().block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("query", r#"username=="jack""#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [{"id": "u1", "username": "jack"}],
                "totalRecords": 1,
            })))
            .mount(&server)
            .await;

        let ctx = okapi_context(&server.uri());
        let registry = inventory_registry();
        let resolver = registry.resolver("Query", "users").unwrap();

        let value = run_resolver(resolver, &ctx, None, &json!({"cql": r#"username=="jack""#}))
            .await
            .unwrap();

        insta::assert_json_snapshot!(value, @r###"
        [
          {
            "id": "u1",
            "username": "jack"
          }
        ]
        "###);
    });
}

#[test]
fn pagination_parameters_reach_the_module() {
    runtime().block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/instance-storage/instances"))
            .and(query_param("offset", "10"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "instances": [{"id": "in1", "title": "Semantic web primer"}],
                "totalRecords": 42,
            })))
            .mount(&server)
            .await;

        let ctx = okapi_context(&server.uri());
        let registry = inventory_registry();
        let resolver = registry.resolver("Query", "instances").unwrap();

        let value = run_resolver(resolver, &ctx, None, &json!({"offset": 10, "limit": 5}))
            .await
            .unwrap();

        assert_eq!(
            value,
            json!({
                "records": [{"id": "in1", "title": "Semantic web primer"}],
                "totalCount": 42,
            })
        );
    });
}

#[test]
fn link_overrides_caller_cql() {
    runtime().block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/holdings-storage/holdings"))
            .and(query_param("query", r#"instanceId=="in1""#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "holdingsRecords": [{"id": "h1", "instanceId": "in1"}],
                "totalRecords": 1,
            })))
            .mount(&server)
            .await;

        let ctx = okapi_context(&server.uri());
        let registry = inventory_registry();
        let resolver = registry.resolver("Instance", "holdingsRecords").unwrap();

        let parent = json!({"id": "in1", "title": "Semantic web primer"});
        let value = run_resolver(resolver, &ctx, Some(&parent), &json!({"cql": "this must be ignored"}))
            .await
            .unwrap();

        assert_eq!(value, json!([{"id": "h1", "instanceId": "in1"}]));

        // The link filter replaced the caller's CQL rather than being
        // sent alongside it.
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query_pairs().count(), 1);
    });
}

#[test]
fn unlinked_parent_resolves_null_without_a_call() {
    runtime().block_on(async {
        let server = MockServer::start().await;

        let ctx = okapi_context(&server.uri());
        let registry = inventory_registry();
        let resolver = registry.resolver("HoldingsRecord", "holdingsItems").unwrap();

        let value = run_resolver(resolver, &ctx, Some(&json!({"callNumber": "QA76"})), &json!({}))
            .await
            .unwrap();

        assert_eq!(value, json!(null));
        assert!(server.received_requests().await.unwrap().is_empty());
    });
}

#[test]
fn failure_status_surfaces_the_raw_body() {
    runtime().block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/groups"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let ctx = okapi_context(&server.uri());
        let registry = inventory_registry();
        let resolver = registry.resolver("Query", "groups").unwrap();

        let err = run_resolver(resolver, &ctx, None, &json!({})).await.unwrap_err();

        assert!(matches!(&err, Error::RemoteRequest { status, .. } if *status == 404));
        assert_eq!(err.to_string(), "not found");
    });
}

#[test]
fn malformed_success_body_propagates() {
    runtime().block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login please</html>"))
            .mount(&server)
            .await;

        let ctx = okapi_context(&server.uri());
        let registry = inventory_registry();
        let resolver = registry.resolver("Query", "users").unwrap();

        let err = run_resolver(resolver, &ctx, None, &json!({})).await.unwrap_err();

        assert!(matches!(err, Error::MalformedResponse { .. }));
    });
}
