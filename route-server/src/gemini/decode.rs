//! Defensive decoding of model output.
//!
//! Even in structured-output mode the model sometimes wraps otherwise
//! schema-valid JSON in a Markdown code fence, so the raw text is unwrapped
//! before it is parsed. Required fields are enforced here by the domain
//! types rather than trusted to the schema request.

use crate::domain::RouteOption;

use super::error::RouteError;

/// Strip a surrounding Markdown code fence, if present.
///
/// Handles a leading ```` ``` ```` (with an optional `json` language tag)
/// and a trailing ```` ``` ````, each padded by arbitrary whitespace. Text
/// without a fence is returned trimmed and otherwise untouched.
///
/// # Examples
///
/// ```
/// use route_server::gemini::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
/// assert_eq!(strip_code_fence("```\n[1]\n```"), "[1]");
/// assert_eq!(strip_code_fence("  [1]  "), "[1]");
/// ```
pub fn strip_code_fence(text: &str) -> &str {
    let mut cleaned = text.trim();

    if let Some(rest) = cleaned.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        cleaned = rest.trim_start();

        if let Some(rest) = cleaned.strip_suffix("```") {
            cleaned = rest.trim_end();
        }
    }

    cleaned
}

/// Decode model text into a route set.
///
/// The original (pre-stripping) text travels with the error so the caller
/// can log it; it must never reach the user.
pub fn decode_route_options(text: &str) -> Result<Vec<RouteOption>, RouteError> {
    let cleaned = strip_code_fence(text);

    serde_json::from_str(cleaned).map_err(|e| RouteError::MalformedResponse {
        message: e.to_string(),
        body: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::{RouteStep, TransportMode};

    const SINGLE_ROUTE: &str = r#"[{
        "id": "r1",
        "summary": "渡輪 → 步行",
        "totalDuration": "25 分鐘",
        "cost": "HK$ 8",
        "tags": ["最平"],
        "steps": [{
            "mode": "FERRY",
            "instruction": "搭天星小輪去尖沙咀",
            "duration": "10 分鐘",
            "locationName": "中環7號碼頭",
            "waitMinutes": 6
        }]
    }]"#;

    #[test]
    fn strips_json_tagged_fence() {
        let fenced = format!("```json\n{SINGLE_ROUTE}\n```");
        let routes = decode_route_options(&fenced).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].id, "r1");
        assert_eq!(routes[0].steps[0].mode, TransportMode::Ferry);
    }

    #[test]
    fn strips_untagged_fence() {
        let fenced = format!("```\n{SINGLE_ROUTE}\n```");
        assert_eq!(decode_route_options(&fenced).unwrap().len(), 1);
    }

    #[test]
    fn tolerates_whitespace_around_fences() {
        let fenced = format!("  \n```json   \n{SINGLE_ROUTE}\n   ```  \n");
        assert_eq!(decode_route_options(&fenced).unwrap().len(), 1);
    }

    #[test]
    fn plain_json_passes_through() {
        let routes = decode_route_options(SINGLE_ROUTE).unwrap();
        assert_eq!(routes[0].cost, "HK$ 8");
    }

    #[test]
    fn empty_array_is_a_valid_result() {
        assert_eq!(decode_route_options("[]").unwrap().len(), 0);
        assert_eq!(decode_route_options("```json\n[]\n```").unwrap().len(), 0);
    }

    #[test]
    fn non_json_carries_raw_body_for_logging() {
        let err = decode_route_options("not json at all").unwrap_err();
        match err {
            RouteError::MalformedResponse { body, .. } => {
                assert_eq!(body, "not json at all");
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn schema_violations_are_malformed() {
        // Valid JSON, wrong shape: steps missing a required field
        let json = r#"[{"id": "r1", "summary": "s", "totalDuration": "t",
                        "cost": "c", "tags": [], "steps": [{"mode": "BUS"}]}]"#;
        assert!(matches!(
            decode_route_options(json),
            Err(RouteError::MalformedResponse { .. })
        ));
    }

    fn text_field() -> impl Strategy<Value = String> {
        // Covers ASCII, CJK and characters that need JSON escaping
        proptest::collection::vec(
            prop_oneof![
                proptest::char::range('a', 'z').prop_map(|c| c.to_string()),
                proptest::char::range('中', '環').prop_map(|c| c.to_string()),
                Just("\"".to_string()),
                Just("`".to_string()),
                Just(" ".to_string()),
            ],
            0..12,
        )
        .prop_map(|parts| parts.concat())
    }

    fn step_strategy() -> impl Strategy<Value = RouteStep> {
        (
            proptest::sample::select(TransportMode::ALL.to_vec()),
            text_field(),
            text_field(),
            text_field(),
            proptest::option::of(text_field()),
            proptest::option::of(0u32..120),
        )
            .prop_map(
                |(mode, instruction, duration, location_name, line_name, wait_minutes)| {
                    RouteStep {
                        mode,
                        instruction,
                        duration,
                        location_name,
                        line_name,
                        wait_minutes,
                    }
                },
            )
    }

    fn routes_strategy() -> impl Strategy<Value = Vec<RouteOption>> {
        let route = (
            text_field(),
            text_field(),
            text_field(),
            text_field(),
            proptest::collection::vec(text_field(), 0..3),
            proptest::collection::vec(step_strategy(), 0..4),
        )
            .prop_map(|(id, summary, total_duration, cost, tags, steps)| RouteOption {
                id,
                summary,
                total_duration,
                cost,
                tags,
                steps,
            });

        proptest::collection::vec(route, 0..4)
    }

    proptest! {
        // Fencing valid JSON never changes the decoded result.
        #[test]
        fn fence_stripping_is_transparent(routes in routes_strategy()) {
            let json = serde_json::to_string(&routes).unwrap();
            let fenced = format!("```json\n{json}\n```");

            let plain = decode_route_options(&json).unwrap();
            let unfenced = decode_route_options(&fenced).unwrap();

            prop_assert_eq!(&plain, &routes);
            prop_assert_eq!(&unfenced, &routes);
        }
    }
}
