use crate::{error::TemplateError, types::DevChainConfig, Result};
use std::collections::HashMap;

/// Snapshot of the process environment, for expanding endpoint placeholders.
pub fn env_vars() -> HashMap<String, String> {
    std::env::vars().collect()
}

/// Find values wrapped in braces and replace them with values from `vars` whose key matches.
/// example: "https://rpc/{KEY}" with {"KEY": "abc"} returns "https://rpc/abc"
pub fn expand_placeholders(
    input: &str,
    vars: &HashMap<String, String>,
) -> std::result::Result<String, TemplateError> {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    let mut offset = 0;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 1..];
        let end = after_open
            .find('}')
            .ok_or(TemplateError::Unterminated(offset + start))?;
        let key = &after_open[..end];
        if key.is_empty() {
            return Err(TemplateError::EmptyName(offset + start));
        }
        let value = vars
            .get(key)
            .ok_or_else(|| TemplateError::MissingValue(key.to_owned()))?;
        output.push_str(value);

        let consumed = start + 1 + end + 1;
        offset += consumed;
        rest = &rest[consumed..];
    }
    output.push_str(rest);
    Ok(output)
}

/// Names of all placeholders in `input`, in order of appearance.
pub fn placeholder_names(input: &str) -> Vec<&str> {
    let mut names = vec![];
    let mut rest = input;
    while let Some(start) = rest.find('{') {
        let after_open = &rest[start + 1..];
        match after_open.find('}') {
            Some(end) => {
                names.push(&after_open[..end]);
                rest = &after_open[end + 1..];
            }
            None => break,
        }
    }
    names
}

impl DevChainConfig {
    /// Resolved connection target per network, with `{NAME}` placeholders expanded from `vars`.
    /// Networks without a connection target (e.g. the in-process chain) are skipped.
    pub fn resolve_endpoints(
        &self,
        vars: &HashMap<String, String>,
    ) -> Result<Vec<(String, String)>> {
        let mut endpoints = vec![];
        for (name, network) in &self.networks {
            if let Some(endpoint) = network.endpoint() {
                endpoints.push((name.to_owned(), expand_placeholders(&endpoint, vars)?));
            }
        }
        Ok(endpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{preset::Preset, types::NetworkConfig};

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_every_placeholder() {
        let out = expand_placeholders(
            "https://{HOST}/v3/{KEY}?again={KEY}",
            &vars(&[("HOST", "rpc.example"), ("KEY", "abc")]),
        )
        .unwrap();
        assert_eq!(out, "https://rpc.example/v3/abc?again=abc");
    }

    #[test]
    fn passes_through_plain_strings() {
        let out = expand_placeholders("http://127.0.0.1:8545", &HashMap::new()).unwrap();
        assert_eq!(out, "http://127.0.0.1:8545");
    }

    #[test]
    fn reports_template_errors() {
        let empty = HashMap::new();
        assert_eq!(
            expand_placeholders("a/{MISSING}", &empty),
            Err(TemplateError::MissingValue("MISSING".to_owned()))
        );
        assert_eq!(
            expand_placeholders("ab{OPEN", &empty),
            Err(TemplateError::Unterminated(2))
        );
        assert_eq!(
            expand_placeholders("x{}", &empty),
            Err(TemplateError::EmptyName(1))
        );
    }

    #[test]
    fn finds_placeholder_names() {
        assert_eq!(placeholder_names("{lol}{baa}{hahaa}"), vec!["lol", "baa", "hahaa"]);
        assert!(placeholder_names("no placeholders").is_empty());
    }

    #[test]
    fn resolves_network_endpoints() {
        let mut cfg = Preset::Localhost.config();
        cfg.networks.insert(
            "mainnet".to_owned(),
            NetworkConfig {
                chain_id: Some(1),
                url: Some("https://mainnet.infura.io/v3/{INFURA_API_KEY}".to_owned()),
                ..Default::default()
            },
        );

        let endpoints = cfg
            .resolve_endpoints(&vars(&[("INFURA_API_KEY", "secret")]))
            .unwrap();
        assert_eq!(
            endpoints,
            vec![
                ("localhost".to_owned(), "http://127.0.0.1:8545".to_owned()),
                (
                    "mainnet".to_owned(),
                    "https://mainnet.infura.io/v3/secret".to_owned()
                ),
            ]
        );

        assert!(cfg.resolve_endpoints(&HashMap::new()).is_err());
    }
}
