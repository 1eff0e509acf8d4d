use serde_json::{Map, Value};
use storylight_domain::AuditOptions;

/// Keys the CLI invocation sets itself; passing them again would duplicate
/// the report on stdout, point the tool at the wrong browser or undo `--quiet`.
const RESERVED_KEYS: &[&str] = &["output", "outputPath", "port", "logLevel"];

/// Flattens audit options into `--key=value` command line flags.
///
/// Nested objects become dotted keys, arrays are comma-joined and `null`
/// values are dropped. Output is ordered by key.
pub fn option_flags(options: &AuditOptions) -> Vec<String> {
    let mut flags = Vec::new();
    for (key, value) in options.as_map() {
        if RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        push_flags(&mut flags, key, value);
    }
    flags.sort();
    flags
}

fn push_flags(flags: &mut Vec<String>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Object(map) => push_nested(flags, key, map),
        Value::Array(items) => {
            let joined: Vec<String> = items.iter().filter_map(scalar).collect();
            flags.push(format!("--{}={}", key, joined.join(",")));
        }
        other => {
            if let Some(v) = scalar(other) {
                flags.push(format!("--{}={}", key, v));
            }
        }
    }
}

fn push_nested(flags: &mut Vec<String>, prefix: &str, map: &Map<String, Value>) {
    for (key, value) in map {
        push_flags(flags, &format!("{}.{}", prefix, key), value);
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
