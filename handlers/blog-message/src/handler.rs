use function_url_sdk::prelude::*;

/// Message returned on every invocation
pub const MESSAGE: &str = "More articles on blog.shanenolan.dev";

/// Blog message handler
///
/// Answers every invocation with `200` and `{"message": MESSAGE}`. The event
/// and context are never inspected.
pub fn handle(_event: &InvocationEvent, _context: &InvocationContext) -> Response {
    Response::ok(&json!({ "message": MESSAGE }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXPECTED_BODY: &str = r#"{"message": "More articles on blog.shanenolan.dev"}"#;

    fn invoke(event: JsonValue, context: JsonValue) -> Response {
        handle(&InvocationEvent(event), &InvocationContext(context))
    }

    fn assert_fixed(response: &Response) {
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, EXPECTED_BODY);
    }

    #[test]
    fn test_empty_event_and_context() {
        assert_fixed(&invoke(json!({}), json!({})));
    }

    #[test]
    fn test_http_event_is_ignored() {
        let response = invoke(
            json!({"path": "/foo", "httpMethod": "GET"}),
            json!({"requestId": "abc-123"}),
        );
        assert_fixed(&response);
    }

    #[test]
    fn test_null_event_and_context() {
        assert_fixed(&invoke(JsonValue::Null, JsonValue::Null));
    }

    #[test]
    fn test_body_decodes_to_message() {
        let response = invoke(json!({}), json!({}));
        let decoded: JsonValue = serde_json::from_str(&response.body).unwrap();
        assert_eq!(decoded, json!({"message": "More articles on blog.shanenolan.dev"}));
    }

    #[test]
    fn test_wire_shape() {
        let response = invoke(json!({}), json!({}));
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"statusCode":200,"body":"{\"message\": \"More articles on blog.shanenolan.dev\"}"}"#
        );
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = invoke(json!({}), json!({}));
        for _ in 0..3 {
            assert_eq!(invoke(json!({"n": 1}), json!(null)), first);
        }
    }

    fn arb_json() -> impl Strategy<Value = JsonValue> {
        let leaf = prop_oneof![
            Just(JsonValue::Null),
            any::<bool>().prop_map(JsonValue::Bool),
            any::<i64>().prop_map(JsonValue::from),
            "[a-zA-Z0-9 /_.-]{0,16}".prop_map(JsonValue::String),
        ];
        leaf.prop_recursive(4, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
                prop::collection::hash_map("[a-zA-Z]{1,8}", inner, 0..6)
                    .prop_map(|fields| JsonValue::Object(fields.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_output_ignores_inputs(event in arb_json(), context in arb_json()) {
            let response = invoke(event, context);
            prop_assert_eq!(response.status_code, 200);
            prop_assert_eq!(response.body.as_str(), EXPECTED_BODY);
        }
    }
}
