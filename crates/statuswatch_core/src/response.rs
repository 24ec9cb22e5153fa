use serde_json::Value;

/// The validated parts of one status API payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedResponse {
    /// Homework records exactly as the server sent them, newest first.
    pub homeworks: Vec<Value>,
    /// Server-side timestamp for the next `from_date` query, when supplied.
    pub current_date: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("response has no homeworks list")]
    MissingHomeworks,
    #[error("homeworks is not a list")]
    NotAList,
    #[error("first homeworks entry is not an object")]
    MalformedEntry,
}

/// Checks a decoded payload for the expected shape and extracts the homework
/// list plus the best-effort `current_date` cursor.
///
/// Only the first entry's shape is verified; only the first entry is ever
/// consumed downstream. A missing or non-integer `current_date` is reported
/// as `None`, never as an error.
pub fn check_response(payload: &Value) -> Result<CheckedResponse, ContentError> {
    let homeworks = payload
        .get("homeworks")
        .ok_or(ContentError::MissingHomeworks)?;
    let homeworks = homeworks.as_array().ok_or(ContentError::NotAList)?;

    if let Some(first) = homeworks.first() {
        if !first.is_object() {
            return Err(ContentError::MalformedEntry);
        }
    }

    let current_date = payload.get("current_date").and_then(Value::as_i64);

    Ok(CheckedResponse {
        homeworks: homeworks.clone(),
        current_date,
    })
}
