// crates/shared-kernel/tests/serde_roundtrip.rs
use indic_eval_shared_kernel::{Accuracy, LangCode, ModelId, TokenCount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    model: ModelId,
    lang: LangCode,
    tokens: TokenCount,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper {
        model: ModelId::from("google/muril-base-cased"),
        lang: LangCode::from("hi"),
        tokens: TokenCount::from(42),
    };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"model":"google/muril-base-cased","lang":"hi","tokens":42}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn unevaluated_accuracy_serializes_as_null() {
    let json = serde_json::to_string(&Accuracy::not_evaluated()).expect("serializes");
    assert_eq!(json, "null");
    let json = serde_json::to_string(&Accuracy::new(0.5)).expect("serializes");
    assert_eq!(json, "0.5");
}
