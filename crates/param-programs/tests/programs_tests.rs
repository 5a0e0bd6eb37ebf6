use chrono::NaiveDate;
use param_core::{CoreError, IndexSeries};
use param_domain::DomainError;
use param_programs::{Program, ProgramError, ProgramRegistry};
use param_providers::{DataRequest, InMemoryDataClient};
use serde_json::{json, Map, Value};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn obj(v: Value) -> Map<String, Value> {
    v.as_object().unwrap().clone()
}

fn rainfall_params() -> Map<String, Value> {
    obj(json!({
        "dataset": "chirps",
        "locations": [[12.5, 104.9]],
        "start": "2021-06-01",
        "end": "2021-06-03",
        "strike": 100,
        "limit": 50,
        "tick": 2,
        "opt_type": "CALL"
    }))
}

fn rainfall_request() -> DataRequest {
    DataRequest::Gridded { dataset: "chirps".into(), locations: vec![[12.5, 104.9]], imperial_units: false }
}

fn snowfall_request() -> DataRequest {
    DataRequest::Station { dataset: "ghcnd".into(),
                           station_id: "USW00014739".into(),
                           weather_variable: "SNOW".into(),
                           imperial_units: false }
}

#[tokio::test]
async fn rainfall_call_payout() {
    let series = IndexSeries::new(vec![(day(2021, 5, 31), 500.0),
                                       (day(2021, 6, 1), 40.0),
                                       (day(2021, 6, 2), 50.0),
                                       (day(2021, 6, 3), 30.0),
                                       (day(2021, 6, 4), 500.0)]).unwrap();
    let client = InMemoryDataClient::new().with_series(&rainfall_request(), series);
    let registry = ProgramRegistry::initialize();
    let program = registry.get("cambodia_rainfall").unwrap();

    let params = rainfall_params();
    assert!(program.validate_params(&params).is_valid());
    assert_eq!(program.evaluate(&params, &client).await.unwrap(), json!(40.0));
}

#[tokio::test]
async fn rainfall_put_below_strike_is_zero_for_call() {
    let series = IndexSeries::new(vec![(day(2021, 6, 1), 80.0)]).unwrap();
    let client = InMemoryDataClient::new().with_series(&rainfall_request(), series);
    let program = ProgramRegistry::initialize();
    let program = program.get("cambodia_rainfall").unwrap();

    let params = rainfall_params();
    assert_eq!(program.evaluate(&params, &client).await.unwrap(), json!(0.0));

    let mut put = params.clone();
    put.insert("opt_type".into(), json!("put"));
    assert_eq!(program.evaluate(&put, &client).await.unwrap(), json!(40.0));
}

#[tokio::test]
async fn snowfall_reports_hundredths() {
    let series = IndexSeries::new(vec![(day(2021, 1, 5), 6.0), (day(2021, 1, 20), 8.0)]).unwrap();
    let client = InMemoryDataClient::new().with_series(&snowfall_request(), series);
    let registry = ProgramRegistry::initialize();
    let program = registry.get("critical_snowfall").unwrap();

    let params = obj(json!({
        "station_id": "USW00014739",
        "start": 1609459200,
        "end": 1612051200,
        "strike": 1000,
        "limit": 5000,
        "exhaust": 3000,
        "opt_type": "CALL",
        "weather_variable": "SNOW",
        "dataset": "ghcnd"
    }));
    assert!(program.validate_params(&params).is_valid());
    // tick = |50 / (10 - 30)| = 2.5; (14 - 10) * 2.5 = 10.00 -> 1000
    assert_eq!(program.evaluate(&params, &client).await.unwrap(), json!(1000));
}

#[tokio::test]
async fn empty_series_is_data_unavailable() {
    let client = InMemoryDataClient::new().with_series(&rainfall_request(), IndexSeries::default());
    let program = ProgramRegistry::initialize();
    let err = program.get("cambodia_rainfall").unwrap().evaluate(&rainfall_params(), &client).await.unwrap_err();
    assert!(matches!(err, ProgramError::DataUnavailable(ref key) if key == "chirps:12.5_104.9"));
}

#[tokio::test]
async fn no_observations_in_range() {
    let series = IndexSeries::new(vec![(day(2020, 1, 1), 3.0)]).unwrap();
    let client = InMemoryDataClient::new().with_series(&rainfall_request(), series);
    let program = ProgramRegistry::initialize();
    let err = program.get("cambodia_rainfall").unwrap().evaluate(&rainfall_params(), &client).await.unwrap_err();
    assert!(matches!(err, ProgramError::Core(CoreError::NoDataInRange { .. })));
}

#[tokio::test]
async fn bad_terms_fail_before_fetching() {
    let client = InMemoryDataClient::new();
    let mut params = rainfall_params();
    params.insert("strike".into(), json!("abc"));
    params.insert("end".into(), json!("not-a-date"));
    let program = ProgramRegistry::initialize();
    let err = program.get("cambodia_rainfall").unwrap().evaluate(&params, &client).await.unwrap_err();
    match err {
        ProgramError::Domain(DomainError::InvalidParams(msg)) => {
            assert!(msg.contains("end"));
            assert!(msg.contains("strike"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn invalid_option_type_is_reported() {
    let series = IndexSeries::new(vec![(day(2021, 6, 1), 80.0)]).unwrap();
    let client = InMemoryDataClient::new().with_series(&rainfall_request(), series);
    let mut params = rainfall_params();
    params.insert("opt_type".into(), json!("STRADDLE"));
    let program = ProgramRegistry::initialize();
    let err = program.get("cambodia_rainfall").unwrap().evaluate(&params, &client).await.unwrap_err();
    assert!(matches!(err, ProgramError::Domain(DomainError::Core(CoreError::InvalidOptionType(_)))));
}
