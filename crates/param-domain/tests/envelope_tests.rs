use param_domain::{AdapterRequest, DomainError, InvocationMode, ResponseEnvelope};
use serde_json::json;

#[test]
fn success_envelope_wire_shape() {
    let req = AdapterRequest::from_value(json!({"id": "42", "data": {"program": "p", "params": {}}}));
    let env = ResponseEnvelope::success(req.id, req.data, json!(12.5));
    let wire = serde_json::to_value(&env).unwrap();
    assert_eq!(wire,
               json!({
                   "jobRunID": "42",
                   "data": {"program": "p", "params": {}, "result": 12.5},
                   "result": 12.5,
                   "statusCode": 200
               }));
}

#[test]
fn failure_envelope_has_no_result() {
    let err = DomainError::BadRequest("request is empty".into());
    let env = ResponseEnvelope::failure("1", json!({}), err);
    let wire = serde_json::to_value(&env).unwrap();
    assert_eq!(wire,
               json!({
                   "jobRunID": "1",
                   "data": {},
                   "error": "There was an error: Bad Request: request is empty",
                   "statusCode": 500
               }));
}

#[test]
fn non_object_body_is_a_request_without_data() {
    let req = AdapterRequest::from_value(json!("garbage"));
    assert_eq!(req.id, "1");
    assert_eq!(req.mode(), Err(DomainError::BadRequest("request is None".into())));
}

#[test]
fn program_wins_over_uri() {
    let req = AdapterRequest::from_value(json!({"data": {"program": "p", "params": {"a": 1}, "uri": "/apiv4/x"}}));
    assert!(matches!(req.mode(), Ok(InvocationMode::Program { ref name, .. }) if name == "p"));
}
