use std::sync::Arc;

use param_core::hashing::{to_spaced_canonical_json, TokenDigest};
use param_providers::InMemoryDataClient;
use param_store::{ContractRecord, InMemoryContractStore};
use parametric_adapter::{AdapterContext, AdapterController, AppConfig};
use serde_json::{json, Value};

fn data_client() -> InMemoryDataClient {
    InMemoryDataClient::from_fixture(&json!({
        "gateway_url": "https://gateway.example",
        "series": {
            "chirps:12.5_104.9": {"2021-06-01": 40.0, "2021-06-02": 50.0, "2021-06-03": 30.0},
            "ghcnd:USW00014739:SNOW": {"2021-01-05": 6.0, "2021-01-20": 8.0}
        },
        "responses": {
            "station_history": {"2021-01-02": 3.0, "2021-01-01": 1.0}
        }
    })).unwrap()
}

fn rainfall_terms() -> Value {
    json!({
        "program": "cambodia_rainfall",
        "params": {
            "dataset": "chirps",
            "locations": [[12.5, 104.9]],
            "start": "2021-06-01",
            "end": "2021-06-03",
            "strike": 100,
            "limit": 50,
            "tick": 2,
            "opt_type": "CALL"
        }
    })
}

fn api_document() -> Value {
    json!({
        "basePath": "/apiv4",
        "paths": {
            "/ghcn-history/{station_id}/{weather_variable}": {
                "parameters": [
                    {"name": "station_id", "type": "string"},
                    {"name": "weather_variable", "type": "string"}
                ],
                "get": {"parameters": [{"name": "use_imperial_units", "type": "boolean"}]}
            }
        }
    })
}

fn controller(document: Option<&Value>, store: InMemoryContractStore) -> AdapterController {
    let ctx = AdapterContext::with_document(&AppConfig::default(), document).unwrap();
    AdapterController::new(ctx, Arc::new(data_client()), Arc::new(store))
}

#[tokio::test]
async fn program_request_succeeds() {
    let c = controller(None, InMemoryContractStore::new());
    let env = c.evaluate(json!({"id": 7, "data": rainfall_terms()})).await;
    assert_eq!(env.status_code(), 200);
    assert_eq!(env.job_run_id(), "7");
    assert_eq!(env.result(), Some(&json!(40.0)));
    assert_eq!(env.data()["result"], json!(40.0));
    assert_eq!(env.data()["program"], json!("cambodia_rainfall"));
    assert!(env.error().is_none());
}

#[tokio::test]
async fn snowfall_request_reports_hundredths() {
    let c = controller(None, InMemoryContractStore::new());
    let env = c.evaluate(json!({"id": "snow", "data": {
        "program": "critical_snowfall",
        "params": {
            "station_id": "USW00014739", "start": 1609459200, "end": 1612051200,
            "strike": 1000, "limit": 5000, "exhaust": 3000,
            "opt_type": "CALL", "weather_variable": "SNOW", "dataset": "ghcnd"
        }
    }})).await;
    assert!(env.is_success(), "{:?}", env.error());
    assert_eq!(env.result(), Some(&json!(1000)));
}

#[tokio::test]
async fn bad_requests_become_error_envelopes() {
    let c = controller(None, InMemoryContractStore::new());

    let env = c.evaluate(json!({"data": null})).await;
    assert_eq!(env.status_code(), 500);
    assert_eq!(env.job_run_id(), "1");
    assert_eq!(env.error(), Some("There was an error: Bad Request: request is None"));

    let env = c.evaluate(json!({"data": {}})).await;
    assert_eq!(env.error(), Some("There was an error: Bad Request: request is empty"));

    let env = c.evaluate(json!({"data": {"params": {}}})).await;
    assert_eq!(env.error(), Some("There was an error: Bad Request: no program specified"));

    let env = c.evaluate(json!({"data": {"program": "cambodia_rainfall"}})).await;
    assert_eq!(env.error(), Some("There was an error: Bad Request: no parameters specified"));

    let env = c.evaluate(json!({"data": {"program": "cambodia_rainfall", "params": {"dataset": "chirps"}}})).await;
    let msg = env.error().unwrap();
    assert!(msg.starts_with("There was an error: Bad Request: missing locations parameter\n"));
    assert_eq!(msg.lines().count(), 7);
}

#[tokio::test]
async fn unknown_program_names_the_lookup_failure() {
    let c = controller(None, InMemoryContractStore::new());
    let env = c.evaluate(json!({"id": "x", "data": {"program": "unknown_program", "params": {"a": 1}}})).await;
    assert_eq!(env.status_code(), 500);
    assert!(env.error().unwrap().contains("program lookup failed"));
    assert!(env.result().is_none());
}

#[tokio::test]
async fn contract_token_is_verified_then_evaluated() {
    let terms = rainfall_terms();
    let digest = TokenDigest::Md5.hex_digest(&to_spaced_canonical_json(&terms));
    let store = InMemoryContractStore::new().with_record(ContractRecord { id: "c-1".into(),
                                                                          lifecycle_status: "Awaiting Evaluation".into(),
                                                                          terms,
                                                                          stored_digest: None });
    let c = controller(None, store);

    let env = c.evaluate(json!({"id": "k", "data": {"uri": format!("{digest}c-1")}})).await;
    assert!(env.is_success(), "{:?}", env.error());
    assert_eq!(env.result(), Some(&json!(40.0)));

    let tampered = format!("{}c-1", "0".repeat(32));
    let env = c.evaluate(json!({"id": "k", "data": {"uri": tampered}})).await;
    assert_eq!(env.status_code(), 500);
    let msg = env.error().unwrap();
    assert!(msg.contains("hash does not match"));
    assert!(!msg.contains(&digest));

    let env = c.evaluate(json!({"data": {"uri": format!("{digest}c-404")}})).await;
    assert!(env.error().unwrap().contains("not found"));
}

#[tokio::test]
async fn verified_terms_without_program_are_rejected() {
    let terms = json!({"foo": 1});
    let digest = TokenDigest::Md5.hex_digest(&to_spaced_canonical_json(&terms));
    let store = InMemoryContractStore::new().with_record(ContractRecord { id: "c-7".into(),
                                                                          lifecycle_status: "Awaiting Evaluation".into(),
                                                                          terms,
                                                                          stored_digest: None });
    let c = controller(None, store);

    let env = c.evaluate(json!({"id": "k", "data": {"uri": format!("{digest}c-7")}})).await;
    assert_eq!(env.status_code(), 500);
    let msg = env.error().unwrap();
    assert!(msg.contains("c-7"), "{msg}");
    assert!(msg.contains("do not name a program"), "{msg}");
}

#[tokio::test]
async fn endpoint_queries() {
    let c = controller(None, InMemoryContractStore::new());
    let env = c.evaluate(json!({"data": {"uri": "/apiv4/ghcn-history/USW00014739/SNOW"}})).await;
    assert_eq!(env.error(), Some("There was an error: Bad Request: endpoint queries are not enabled"));

    let doc = api_document();
    let c = controller(Some(&doc), InMemoryContractStore::new());
    let env = c.evaluate(json!({"data": {"uri": "/apiv4/ghcn-history/USW00014739/SNOW?use_imperial_units=false"}}))
               .await;
    assert!(env.is_success(), "{:?}", env.error());
    assert_eq!(env.result(), Some(&json!([["2021-01-01", 1.0], ["2021-01-02", 3.0]])));

    let env = c.evaluate(json!({"data": {"uri": "/apiv3/ghcn-history/USW00014739/SNOW"}})).await;
    assert_eq!(env.error(), Some("There was an error: Incompatible API version, please use /apiv4/"));
}

#[tokio::test]
async fn context_is_shared_across_tasks() {
    let ctx = AdapterContext::with_document(&AppConfig::default(), None).unwrap();
    let c = Arc::new(AdapterController::new(ctx, Arc::new(data_client()), Arc::new(InMemoryContractStore::new())));
    let mut handles = Vec::new();
    for i in 0..8 {
        let c = Arc::clone(&c);
        handles.push(tokio::spawn(async move {
            c.evaluate(json!({"id": i, "data": rainfall_terms()})).await
        }));
    }
    for (i, h) in handles.into_iter().enumerate() {
        let env = h.await.unwrap();
        assert_eq!(env.job_run_id(), i.to_string());
        assert_eq!(env.result(), Some(&json!(40.0)));
    }
}
