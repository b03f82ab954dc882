//! tests/http_api.rs
//!
//! Endpoint-level tests for the HTTP bridge client:
//! - exact request bodies and headers on the wire
//! - success envelope parsing (order and length preserved)
//! - non-2xx bodies surfaced verbatim as Remote errors
//! - transport and parse failures

use bridge_auth::implementations::FixedTokenProvider;
use bridge_auth::AuthService;
use bridge_client::implementations::HttpBridge;
use bridge_client::{BridgeInterface, ClientError};
use bridge_types::{ChainId, FeeUpdate, ProjectRef, RouteRequest};
use httpmock::{Method, MockServer};
use serde_json::json;

const USDC_POLYGON: &str = "0x2791bca1f2de4661ed88a30c99a7a9449aa84174";

fn client_for(server: &MockServer) -> HttpBridge {
	client_with_token(server, "test-token")
}

fn client_with_token(server: &MockServer, token: &str) -> HttpBridge {
	let auth = AuthService::new(Box::new(FixedTokenProvider::new(token)));
	HttpBridge::new(&server.base_url(), auth).unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn test_submit_route_posts_exact_body_with_bearer() {
	let server = MockServer::start();

	let mock = server.mock(|when, then| {
		when.method(Method::POST)
			.path("/v1/tokens")
			.header("authorization", "Bearer test-token")
			.header("content-type", "application/json")
			.json_body(json!({
				"chainId": 137,
				"tokenAddress": USDC_POLYGON
			}));
		then.status(200).json_body(json!({
			"data": [
				{
					"name": "USD Coin",
					"symbol": "USDC",
					"address": USDC_POLYGON,
					"decimals": 6,
					"chainId": 137
				},
				{
					"name": "USD Coin (bridged)",
					"symbol": "USDC.e",
					"address": "0x3c499c542cef5e3811e1192ce70d8cc03d5c3359",
					"decimals": 6,
					"chainId": 137
				}
			]
		}));
	});

	let client = client_for(&server);
	let request = RouteRequest::new(ChainId::POLYGON, USDC_POLYGON);
	let tokens = client.submit_route(&request).await.unwrap();

	mock.assert();
	assert_eq!(tokens.len(), 2);
	assert_eq!(tokens[0].symbol, "USDC");
	assert_eq!(tokens[0].decimals, 6);
	assert_eq!(tokens[0].chain_id, ChainId::POLYGON);
	assert_eq!(tokens[1].symbol, "USDC.e");
}

#[tokio::test(flavor = "current_thread")]
async fn test_submit_route_omits_absent_fields() {
	let server = MockServer::start();

	let mock = server.mock(|when, then| {
		when.method(Method::POST)
			.path("/v1/tokens")
			.json_body(json!({ "chainId": 1 }));
		then.status(200).json_body(json!({ "data": [] }));
	});

	let client = client_for(&server);
	let request = RouteRequest {
		chain_id: Some(ChainId::ETHEREUM),
		token_address: None,
	};
	let tokens = client.submit_route(&request).await.unwrap();

	mock.assert();
	assert!(tokens.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn test_submit_route_sends_header_even_with_empty_token() {
	let server = MockServer::start();

	let mock = server.mock(|when, then| {
		when.method(Method::POST)
			.path("/v1/tokens")
			.header_exists("authorization");
		then.status(200).json_body(json!({ "data": [] }));
	});

	let client = client_with_token(&server, "");
	let request = RouteRequest::new(ChainId::BASE, USDC_POLYGON);
	client.submit_route(&request).await.unwrap();

	mock.assert();
}

#[tokio::test(flavor = "current_thread")]
async fn test_submit_route_surfaces_error_body_verbatim() {
	let server = MockServer::start();

	let mock = server.mock(|when, then| {
		when.method(Method::POST).path("/v1/tokens");
		then.status(500).body("invalid token contract");
	});

	let client = client_for(&server);
	let request = RouteRequest::new(ChainId::POLYGON, USDC_POLYGON);
	let err = client.submit_route(&request).await.unwrap_err();

	mock.assert();
	match &err {
		ClientError::Remote(message) => assert_eq!(message, "invalid token contract"),
		other => panic!("expected Remote error, got {:?}", other),
	}
	assert_eq!(err.to_string(), "invalid token contract");
}

#[tokio::test(flavor = "current_thread")]
async fn test_submit_route_handles_empty_error_body() {
	let server = MockServer::start();

	server.mock(|when, then| {
		when.method(Method::POST).path("/v1/tokens");
		then.status(404);
	});

	let client = client_for(&server);
	let request = RouteRequest::new(ChainId::POLYGON, USDC_POLYGON);
	let err = client.submit_route(&request).await.unwrap_err();

	match err {
		ClientError::Remote(message) => assert_eq!(message, ""),
		other => panic!("expected Remote error, got {:?}", other),
	}
}

#[tokio::test(flavor = "current_thread")]
async fn test_submit_route_rejects_malformed_success_body() {
	let server = MockServer::start();

	server.mock(|when, then| {
		when.method(Method::POST).path("/v1/tokens");
		then.status(200).body("not json at all");
	});

	let client = client_for(&server);
	let request = RouteRequest::new(ChainId::POLYGON, USDC_POLYGON);
	let err = client.submit_route(&request).await.unwrap_err();

	assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn test_submit_route_maps_connection_failure_to_transport() {
	let auth = AuthService::new(Box::new(FixedTokenProvider::new("test-token")));
	let client = HttpBridge::new("http://127.0.0.1:1", auth).unwrap();

	let request = RouteRequest::new(ChainId::POLYGON, USDC_POLYGON);
	let err = client.submit_route(&request).await.unwrap_err();

	assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn test_fetch_fees_queries_project_and_parses_envelope() {
	let server = MockServer::start();

	let mock = server.mock(|when, then| {
		when.method(Method::GET)
			.path("/v1/developer/fees")
			.query_param("clientId", "client-1")
			.query_param("teamId", "team-1")
			.header("authorization", "Bearer test-token");
		then.status(200).json_body(json!({
			"data": {
				"feeRecipient": "0x1111111111111111111111111111111111111111",
				"feeBps": 250
			}
		}));
	});

	let client = client_for(&server);
	let project = ProjectRef {
		client_id: "client-1".to_string(),
		team_id: "team-1".to_string(),
	};
	let fee = client.fetch_fees(&project).await.unwrap();

	mock.assert();
	assert_eq!(fee.fee_bps, 250);
	assert_eq!(
		fee.fee_recipient,
		"0x1111111111111111111111111111111111111111"
	);
}

#[tokio::test(flavor = "current_thread")]
async fn test_fetch_fees_surfaces_error_body() {
	let server = MockServer::start();

	server.mock(|when, then| {
		when.method(Method::GET).path("/v1/developer/fees");
		then.status(401).body("missing credentials");
	});

	let client = client_for(&server);
	let project = ProjectRef {
		client_id: "client-1".to_string(),
		team_id: "team-1".to_string(),
	};
	let err = client.fetch_fees(&project).await.unwrap_err();

	assert_eq!(err.to_string(), "missing credentials");
}

#[tokio::test(flavor = "current_thread")]
async fn test_update_fees_puts_exact_body_and_ignores_response() {
	let server = MockServer::start();

	let mock = server.mock(|when, then| {
		when.method(Method::PUT)
			.path("/v1/developer/fees")
			.header("authorization", "Bearer test-token")
			.json_body(json!({
				"clientId": "client-1",
				"teamId": "team-1",
				"feeRecipient": "0x1111111111111111111111111111111111111111",
				"feeBps": 100
			}));
		then.status(200).body("whatever the server felt like returning");
	});

	let client = client_for(&server);
	let update = FeeUpdate {
		client_id: "client-1".to_string(),
		team_id: "team-1".to_string(),
		fee_recipient: "0x1111111111111111111111111111111111111111".to_string(),
		fee_bps: 100,
	};

	client.update_fees(&update).await.unwrap();
	mock.assert();
}

#[tokio::test(flavor = "current_thread")]
async fn test_update_fees_surfaces_error_body_verbatim() {
	let server = MockServer::start();

	server.mock(|when, then| {
		when.method(Method::PUT).path("/v1/developer/fees");
		then.status(403).body("forbidden");
	});

	let client = client_for(&server);
	let update = FeeUpdate {
		client_id: "client-1".to_string(),
		team_id: "team-1".to_string(),
		fee_recipient: "0x1111111111111111111111111111111111111111".to_string(),
		fee_bps: 100,
	};
	let err = client.update_fees(&update).await.unwrap_err();

	match err {
		ClientError::Remote(message) => assert_eq!(message, "forbidden"),
		other => panic!("expected Remote error, got {:?}", other),
	}
}
