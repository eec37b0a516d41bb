use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::input::InputError;
use crate::model::classes::ClassPercentages;

/// Parses class percentages from JSON. Accepts a bare object of class keys or
/// an inference response carrying a `class_percentages` object. Non-numeric
/// values count as missing.
pub fn parse_percentages(text: &str) -> Result<ClassPercentages, InputError> {
    let value: Value = serde_json::from_str(text)?;
    let obj = match &value {
        Value::Object(map) => match map.get("class_percentages") {
            Some(Value::Object(inner)) => inner,
            Some(_) => {
                return Err(InputError::InvalidInput(
                    "class_percentages must be an object".to_string(),
                ));
            }
            None => map,
        },
        _ => {
            return Err(InputError::InvalidInput(
                "expected a JSON object of class percentages".to_string(),
            ));
        }
    };

    Ok(ClassPercentages::from_pairs(
        obj.iter()
            .filter_map(|(k, v)| v.as_f64().map(|f| (k.as_str(), f))),
    ))
}

pub fn load_percentages(path: &Path) -> Result<ClassPercentages, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "percentages file not found: {}",
            path.display()
        )));
    }
    let text = fs::read_to_string(path)?;
    parse_percentages(&text)
}
