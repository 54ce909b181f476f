//! End-to-end tests: authenticate, resolve the catalog, and walk a
//! paginated compute listing against a mock cloud.

use ostack_sdk::auth::{authenticated_client, AuthOptions, EndpointCriteria};
use ostack_sdk::compute::servers::{self, ListOpts};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "tok-e2e";

async fn mount_identity(server: &MockServer) {
    let access = json!({
        "access": {
            "token": { "id": TOKEN, "expires": "2030-06-01T00:00:00Z" },
            "serviceCatalog": [{
                "name": "nova",
                "type": "compute",
                "endpoints": [{ "region": "RegionOne", "publicURL": server.uri() }]
            }]
        }
    });
    Mock::given(method("POST"))
        .and(path("/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(access))
        .mount(server)
        .await;
}

fn opts(server: &MockServer) -> AuthOptions {
    AuthOptions {
        identity_endpoint: server.uri(),
        username: "alice".to_string(),
        password: "swordfish".to_string(),
        ..AuthOptions::default()
    }
}

#[tokio::test]
async fn test_list_servers_across_linked_pages() {
    let server = MockServer::start().await;
    mount_identity(&server).await;

    // Second page first: specific matchers take precedence by mount order.
    Mock::given(method("GET"))
        .and(path("/servers"))
        .and(query_param("marker", "srv-2"))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "servers": [
                { "id": "srv-3", "name": "web-2", "status": "ACTIVE" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/servers"))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "servers": [
                { "id": "srv-1", "name": "db-1", "status": "ACTIVE" },
                { "id": "srv-2", "name": "web-1", "status": "BUILD" }
            ],
            "servers_links": [
                { "rel": "next", "href": format!("{}/servers?marker=srv-2", server.uri()) }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let criteria = EndpointCriteria::service("compute");
    let client = Arc::new(
        authenticated_client(&opts(&server), &criteria)
            .await
            .unwrap(),
    );

    let mut pager = servers::list(client, &ListOpts::default());
    let all = pager.all_pages(servers::extract_servers).await.unwrap();

    let ids: Vec<&str> = all.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["srv-1", "srv-2", "srv-3"]);
    assert_eq!(all[2].name, "web-2");
}

#[tokio::test]
async fn test_list_servers_early_stop() {
    let server = MockServer::start().await;
    mount_identity(&server).await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .and(query_param("marker", "srv-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "servers": [{ "id": "srv-1", "name": "db-1", "status": "ERROR" }],
            "servers_links": [
                { "rel": "next", "href": format!("{}/servers?marker=srv-1", server.uri()) }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let criteria = EndpointCriteria::service("compute");
    let client = Arc::new(
        authenticated_client(&opts(&server), &criteria)
            .await
            .unwrap(),
    );

    // Stop as soon as a page contains a non-ACTIVE server.
    let mut inspected = Vec::new();
    let mut pager = servers::list(client, &ListOpts::default());
    pager
        .each_page(|page| {
            let found = servers::extract_servers(page)?;
            let all_active = found.iter().all(|s| s.status == "ACTIVE");
            inspected.extend(found);
            Ok(all_active)
        })
        .await
        .unwrap();

    assert_eq!(inspected.len(), 1);
    assert_eq!(inspected[0].status, "ERROR");
}

#[tokio::test]
async fn test_list_opts_forwarded_as_query() {
    let server = MockServer::start().await;
    mount_identity(&server).await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .and(query_param("limit", "2"))
        .and(query_param("status", "ACTIVE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "servers": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let criteria = EndpointCriteria::service("compute");
    let client = Arc::new(
        authenticated_client(&opts(&server), &criteria)
            .await
            .unwrap(),
    );

    let list_opts = ListOpts {
        limit: Some(2),
        status: Some("ACTIVE".to_string()),
        ..ListOpts::default()
    };
    let mut pager = servers::list(client, &list_opts);
    let all = pager.all_pages(servers::extract_servers).await.unwrap();

    assert!(all.is_empty());
}
