use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Validate the golfer documents
/// format we expect is this:
/// [{ "Names": "Firstname Lastname", "2024 Wk 1": <int> | "", "2024 Wk 2": <int> | "", ... }, ...]
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(golfers) = json.as_array() else {
        return Err("The json file is not in the correct format. Expected an array.".to_string());
    };

    for (i, golfer) in golfers.iter().enumerate() {
        let Some(fields) = golfer.as_object() else {
            return Err(format!(
                "Golfer document {i} is not in the correct format. Expected an object."
            ));
        };
        match fields.get(crate::model::NAMES_FIELD) {
            Some(Value::String(name)) if !name.trim().is_empty() => {}
            _ => {
                return Err(format!(
                    "Golfer document {i} is missing a Names string."
                ));
            }
        }
        for (key, value) in fields {
            if crate::model::DateKey::parse(key).is_none() {
                continue;
            }
            let ok = matches!(value, Value::Null)
                || matches!(value, Value::String(s) if s.trim().is_empty())
                || crate::model::score_from_value(value).is_some();
            if !ok {
                return Err(format!(
                    "Golfer document {i} has an invalid score for '{key}': {value}"
                ));
            }
        }
    }

    Ok(())
}
