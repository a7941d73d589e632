use serde_json::Value;

/// Plain-text rendering of a ticket description.
///
/// Descriptions arrive either as a plain string or as an Atlassian document
/// tree; for the latter every `text` node is collected depth-first.
pub fn extract_description(description: Option<&Value>) -> String {
    let Some(desc) = description else {
        return "No description provided.".to_string();
    };

    match desc {
        Value::Null => "No description provided.".to_string(),
        Value::String(s) if s.is_empty() => "No description provided.".to_string(),
        Value::String(s) => s.clone(),
        Value::Object(map) if map.get("type").and_then(Value::as_str) == Some("doc") => {
            let Some(content) = map.get("content").and_then(Value::as_array) else {
                return "Complex description available.".to_string();
            };

            let mut text = String::new();
            for node in content {
                collect_text(node, &mut text);
            }

            let trimmed = text.trim();
            if trimmed.is_empty() {
                "No text content available.".to_string()
            } else {
                trimmed.to_string()
            }
        }
        _ => "Complex description available.".to_string(),
    }
}

fn collect_text(node: &Value, out: &mut String) {
    if node.get("type").and_then(Value::as_str) == Some("text") {
        if let Some(text) = node.get("text").and_then(Value::as_str) {
            out.push_str(text);
            out.push(' ');
        }
    }
    if let Some(children) = node.get("content").and_then(Value::as_array) {
        for child in children {
            collect_text(child, out);
        }
    }
}
