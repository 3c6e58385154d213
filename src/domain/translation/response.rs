//! Translation response interpreter
//!
//! The service answers with `outputs.output` holding either a list of strings
//! or a single string depending on request mode. Both shapes are accepted.
//! When `outputs` is an array of result objects, their `output` fields are
//! collected into the list shape.

use serde::Deserialize;
use serde_json::Value;

use super::outcome::FailureKind;

const OUTPUTS_KEY: &str = "outputs";
const OUTPUT_KEY: &str = "output";

/// Accepted shapes of the output field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OutputField {
    List(Vec<String>),
    Single(String),
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    message: String,
}

/// Extract the translated text from a raw response body.
pub fn interpret(body: &[u8]) -> Result<String, FailureKind> {
    let root: Value =
        serde_json::from_slice(body).map_err(|e| FailureKind::MalformedJson(e.to_string()))?;

    if !root.is_object() {
        return Err(FailureKind::MalformedJson(
            "response root is not an object".to_string(),
        ));
    }

    let Some(output) = output_field(&root) else {
        if let Some(error) = root
            .get("error")
            .and_then(|e| serde_json::from_value::<ServiceError>(e.clone()).ok())
        {
            tracing::warn!(message = %error.message, "translation service reported an error");
        }
        return Err(FailureKind::UnrecognizedShape);
    };

    let text = match OutputField::deserialize(&output).map_err(|_| FailureKind::UnrecognizedShape)? {
        OutputField::List(items) => items.into_iter().next().ok_or(FailureKind::EmptyOutputList)?,
        OutputField::Single(text) => text,
    };

    if text.is_empty() {
        return Err(FailureKind::EmptyOutputList);
    }

    Ok(text)
}

/// Resolve `outputs.output`, reading through an `outputs` array.
fn output_field(root: &Value) -> Option<Value> {
    match root.get(OUTPUTS_KEY)? {
        Value::Array(results) => Some(Value::Array(
            results
                .iter()
                .filter_map(|result| result.get(OUTPUT_KEY).cloned())
                .collect(),
        )),
        outputs => outputs.get(OUTPUT_KEY).cloned(),
    }
}
