use crate::{types::DevChainConfig, Error, Result};
use serde_json::{Map, Value};

/// Splits `a.b.c` into its segments. Empty segments are rejected.
fn split_key(key: &str) -> Result<Vec<&str>> {
    let parts: Vec<&str> = key.split('.').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(Error::InvalidKey(key.to_owned()));
    }
    Ok(parts)
}

/// Interprets a raw CLI value: JSON literals (numbers, booleans, objects, quoted strings)
/// keep their type, anything else becomes a string.
pub fn parse_raw_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

impl DevChainConfig {
    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Looks up a value by dotted key, using wire names (`networks.hardhat.chainId`).
    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut current = self.to_value()?;
        for part in split_key(key)? {
            current = match current {
                Value::Object(mut map) => match map.remove(part) {
                    Some(value) => value,
                    None => return Ok(None),
                },
                _ => return Ok(None),
            };
        }
        Ok(Some(current))
    }

    /// Sets a value by dotted key, creating intermediate tables. The config is only
    /// updated when the result still fits the schema.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        self.set_value(key, parse_raw_value(raw))
    }

    pub fn set_value(&mut self, key: &str, value: Value) -> Result<()> {
        let parts = split_key(key)?;
        let mut root = self.to_value()?;

        // a bare `solidity = "x"` must become a table before nested keys can be set
        if parts.len() > 1 && parts[0] == "solidity" {
            if let Some(Value::String(version)) = root.get("solidity").cloned() {
                let mut map = Map::new();
                map.insert("version".to_owned(), Value::String(version));
                root["solidity"] = Value::Object(map);
            }
        }

        let (last, parents) = parts
            .split_last()
            .ok_or_else(|| Error::InvalidKey(key.to_owned()))?;
        let mut current = &mut root;
        for part in parents {
            let map = current
                .as_object_mut()
                .ok_or_else(|| Error::InvalidKey(key.to_owned()))?;
            current = map
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        current
            .as_object_mut()
            .ok_or_else(|| Error::InvalidKey(key.to_owned()))?
            .insert(last.to_string(), value);

        self.replace_from(key, root)
    }

    /// Removes a value by dotted key. Fails if the key is absent or required by the schema.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        let parts = split_key(key)?;
        let mut root = self.to_value()?;

        let (last, parents) = parts
            .split_last()
            .ok_or_else(|| Error::InvalidKey(key.to_owned()))?;
        let mut current = &mut root;
        for part in parents {
            current = current
                .get_mut(*part)
                .ok_or_else(|| Error::KeyNotFound(key.to_owned()))?;
        }
        current
            .as_object_mut()
            .and_then(|map| map.remove(*last))
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))?;

        self.replace_from(key, root)
    }

    fn replace_from(&mut self, key: &str, root: Value) -> Result<()> {
        let updated: DevChainConfig =
            serde_json::from_value(root).map_err(|source| Error::SchemaMismatch {
                key: key.to_owned(),
                source,
            })?;
        *self = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{preset::Preset, types::SoliditySetting};
    use serde_json::json;

    #[test]
    fn gets_nested_values() {
        let cfg = Preset::InProcess.config();
        assert_eq!(cfg.get("networks.hardhat.chainId").unwrap(), Some(json!(1337)));
        assert_eq!(cfg.get("solidity").unwrap(), Some(json!("0.8.19")));
        assert_eq!(cfg.get("mocha.timeout").unwrap(), None);
        assert_eq!(cfg.get("networks.sepolia").unwrap(), None);
        assert!(matches!(cfg.get("networks..x"), Err(Error::InvalidKey(_))));
    }

    #[test]
    fn sets_typed_values_and_creates_tables() {
        let mut cfg = Preset::InProcess.config();
        cfg.set("networks.hardhat.mining.interval", "2500").unwrap();
        cfg.set("mocha.timeout", "90000").unwrap();
        cfg.set("networks.sepolia.url", "https://rpc.sepolia.org").unwrap();
        cfg.set("networks.sepolia.chainId", "11155111").unwrap();

        assert_eq!(
            cfg.network("hardhat").unwrap().mining.unwrap().interval,
            Some(2500)
        );
        assert_eq!(cfg.mocha.unwrap().timeout, 90_000);
        let sepolia = cfg.network("sepolia").unwrap();
        assert_eq!(sepolia.url.as_deref(), Some("https://rpc.sepolia.org"));
        assert_eq!(sepolia.chain_id, Some(11155111));
    }

    #[test]
    fn promotes_bare_solidity_version_to_table() {
        let mut cfg = Preset::InProcess.config();
        cfg.set("solidity.settings.optimizer", r#"{"enabled": true, "runs": 500}"#)
            .unwrap();
        assert!(matches!(cfg.solidity, SoliditySetting::Detailed(_)));
        assert_eq!(cfg.solidity.version(), "0.8.19");
        assert_eq!(cfg.solidity.optimizer().unwrap().runs, 500);
    }

    #[test]
    fn rejects_values_outside_the_schema() {
        let mut cfg = Preset::InProcess.config();
        let before = cfg.clone();
        let err = cfg
            .set("networks.hardhat.chainId", "not-a-number")
            .unwrap_err();
        assert!(matches!(err, Error::SchemaMismatch { .. }));
        assert_eq!(cfg, before);

        assert!(matches!(
            cfg.set("solidity.version.major", "1"),
            Err(Error::InvalidKey(_))
        ));
        assert_eq!(cfg, before);
    }

    #[test]
    fn unsets_optional_values_only() {
        let mut cfg = Preset::Optimized.config();
        cfg.unset("mocha").unwrap();
        assert!(cfg.mocha.is_none());

        assert!(matches!(cfg.unset("mocha"), Err(Error::KeyNotFound(_))));
        assert!(matches!(
            cfg.unset("solidity"),
            Err(Error::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn quoted_numbers_stay_strings() {
        let mut cfg = Preset::InProcess.config();
        cfg.set("networks.hardhat.accounts.accountsBalance", r#""5000""#)
            .unwrap();
        assert_eq!(
            cfg.network("hardhat")
                .unwrap()
                .accounts
                .as_ref()
                .unwrap()
                .accounts_balance
                .as_deref(),
            Some("5000")
        );
    }
}
