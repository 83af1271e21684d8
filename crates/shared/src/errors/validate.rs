use validator::ValidationErrors;

/// Flattens `validator` errors into `field: message` lines, sorted by field.
pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut result: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| match err.code.as_ref() {
                        "length" => "invalid length".to_string(),
                        "range" => "value out of range".to_string(),
                        "required" => "required".to_string(),
                        _ => "invalid value".to_string(),
                    });
                format!("{field}: {message}")
            })
        })
        .collect();

    result.sort();

    if result.is_empty() {
        result.push("Validation failed".to_string());
    }

    result
}
