use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

use muraqib::analyzer::RateLimitedFetcher;
use muraqib::error::LedgerError;
use muraqib::ledger::HolderSource;
use muraqib::ledger::HttpLedgerClient;
use muraqib::ledger::PageRequest;
use muraqib::ledger::TransferSource;
use muraqib::model::Address;
use muraqib::model::FlowDirection;

const WHALE: &str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";
const FUNDER: &str = "HN7cABqLq46Es1jh92dQQisAq662SmxELLLsHHe4YWrH";

fn client_for(server: &MockServer) -> HttpLedgerClient {
    HttpLedgerClient::new(&server.uri(), "test-key".to_string()).expect("valid base url")
}

#[tokio::test]
async fn largest_transfers_parses_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/transfer"))
        .and(query_param("address", WHALE))
        .and(query_param("flow", "in"))
        .and(query_param("sort_by", "amount"))
        .and(query_param("sort_order", "desc"))
        .and(header("token", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "from_address": FUNDER,
                "to_address": WHALE,
                "amount": 2_500_000_000u64,
                "token_decimals": 9,
                "block_time": 1_700_000_100,
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .largest_transfers(&Address::new(WHALE), FlowDirection::In, 1.0, PageRequest::first(10))
        .await
        .expect("request succeeds");

    assert_eq!(page.transfers.len(), 1);
    let record = &page.transfers[0];
    assert_eq!(record.from_address, FUNDER);
    assert_eq!(record.to_address, WHALE);
    assert_eq!(record.amount, 2_500_000_000);
    assert_eq!(record.token_decimals, 9);
    assert_eq!(record.block_time, 1_700_000_100);
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/transfer"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .largest_transfers(&Address::new(WHALE), FlowDirection::Out, 1.0, PageRequest::first(10))
        .await;

    match result {
        Err(LedgerError::Api { status }) => assert_eq!(status, 429),
        other => panic!("expected Api error, got {:?}", other.map(|p| p.transfers.len())),
    }
}

#[tokio::test]
async fn unsuccessful_flag_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/transfer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "data": null
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .largest_transfers(&Address::new(WHALE), FlowDirection::In, 1.0, PageRequest::first(10))
        .await;

    assert!(matches!(result, Err(LedgerError::Unsuccessful { .. })));
}

#[tokio::test]
async fn undecodable_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/transfer"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .largest_transfers(&Address::new(WHALE), FlowDirection::In, 1.0, PageRequest::first(10))
        .await;

    assert!(matches!(result, Err(LedgerError::MalformedResponse(_))));
}

#[tokio::test]
async fn top_holders_parses_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/token/holders"))
        .and(query_param("address", "So11111111111111111111111111111111111111112"))
        .and(query_param("page_size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "items": [
                    { "owner": WHALE, "owner_name": "whale one", "percentage": 3.2 },
                    { "owner": FUNDER, "percentage": 1.1 },
                    { "owner": "", "percentage": 0.4 },
                ]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let holders = client
        .top_holders("So11111111111111111111111111111111111111112", 5)
        .await
        .expect("request succeeds");

    // the empty-owner entry is dropped
    assert_eq!(holders.len(), 2);
    assert_eq!(holders[0].address, Address::new(WHALE));
    assert_eq!(holders[0].display_name.as_deref(), Some("whale one"));
    assert_eq!(holders[0].percent_of_supply, 3.2);
    assert_eq!(holders[1].address, Address::new(FUNDER));
    assert_eq!(holders[1].display_name, None);
}

// The fetcher sleeps its fixed delay before every call, including the first,
// and counts calls across directions.
#[tokio::test]
async fn fetcher_paces_and_counts_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/transfer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server));
    let fetcher = RateLimitedFetcher::new(client, Duration::from_millis(50), 10);

    let started = Instant::now();
    fetcher
        .call(&Address::new(WHALE), FlowDirection::In, 1.0)
        .await
        .expect("first call succeeds");
    fetcher
        .call(&Address::new(WHALE), FlowDirection::Out, 1.0)
        .await
        .expect("second call succeeds");

    assert!(started.elapsed() >= Duration::from_millis(100));
    assert_eq!(fetcher.call_count(), 2);

    fetcher.reset_call_count();
    assert_eq!(fetcher.call_count(), 0);
}
