use serde_json::Value;

/// Fixed message for a cycle that found no homework updates.
/// Subject to dedup like any status-change message.
pub const NO_UPDATES: &str = "Обновлений по домашке нет.";

/// One tracked homework: the two fields the interpreter consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("homework entry is not an object")]
    NotAnObject,
    #[error("homework entry is missing the {field} field")]
    MissingField { field: &'static str },
    #[error("unrecognized homework status {status:?}")]
    UnknownStatus { status: String },
}

impl Homework {
    /// Pulls the name and status out of one raw record.
    ///
    /// A field that is present but not a string counts as missing.
    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        if !value.is_object() {
            return Err(ParseError::NotAnObject);
        }
        Ok(Self {
            name: string_field(value, "homework_name")?,
            status: string_field(value, "status")?,
        })
    }
}

fn string_field(value: &Value, field: &'static str) -> Result<String, ParseError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or(ParseError::MissingField { field })
}

/// The closed verdict map: raw status code to display text.
fn verdict(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Renders the user-facing status-change message for one raw record.
pub fn parse_status(value: &Value) -> Result<String, ParseError> {
    let homework = Homework::from_value(value)?;
    let verdict = verdict(&homework.status).ok_or_else(|| ParseError::UnknownStatus {
        status: homework.status.clone(),
    })?;
    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}",
        name = homework.name,
    ))
}
