use crate::{types::DevChainConfig, Result};
use serde_json::Value;
use std::{collections::BTreeMap, fmt};

/// One difference between two configs, keyed by dotted wire path.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldChange {
    Added { key: String, value: Value },
    Removed { key: String, value: Value },
    Changed { key: String, from: Value, to: Value },
}

impl FieldChange {
    pub fn key(&self) -> &str {
        match self {
            FieldChange::Added { key, .. }
            | FieldChange::Removed { key, .. }
            | FieldChange::Changed { key, .. } => key,
        }
    }
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldChange::Added { key, value } => write!(f, "+ {key} = {value}"),
            FieldChange::Removed { key, value } => write!(f, "- {key} = {value}"),
            FieldChange::Changed { key, from, to } => write!(f, "~ {key}: {from} -> {to}"),
        }
    }
}

/// Flattens nested objects into `a.b.c` → leaf value. Arrays are leaves.
fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, Value>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.to_owned()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out);
            }
        }
        _ => {
            out.insert(prefix.to_owned(), value.clone());
        }
    }
}

/// Field-level differences from `a` to `b`, in key order.
pub fn diff(a: &DevChainConfig, b: &DevChainConfig) -> Result<Vec<FieldChange>> {
    let mut left = BTreeMap::new();
    let mut right = BTreeMap::new();
    flatten("", &serde_json::to_value(a)?, &mut left);
    flatten("", &serde_json::to_value(b)?, &mut right);

    let mut changes = vec![];
    for (key, from) in &left {
        match right.get(key) {
            None => changes.push(FieldChange::Removed {
                key: key.to_owned(),
                value: from.clone(),
            }),
            Some(to) if to != from => changes.push(FieldChange::Changed {
                key: key.to_owned(),
                from: from.clone(),
                to: to.clone(),
            }),
            Some(_) => {}
        }
    }
    for (key, value) in right {
        if !left.contains_key(&key) {
            changes.push(FieldChange::Added { key, value });
        }
    }
    changes.sort_by(|x, y| x.key().cmp(y.key()));
    Ok(changes)
}
