mod access;
pub mod diff;
pub mod error;
pub mod preset;
pub mod registry;
pub mod source;
pub mod store;
pub mod template;
mod types;
mod validate;

pub use access::parse_raw_value;
pub use diff::{diff, FieldChange};
pub use error::{BalanceError, Error, TemplateError, ValidationError};
pub use preset::Preset;
pub use source::ConfigSource;
pub use store::{ConfigFile, ConfigFormat};
pub use types::{
    AccountsConfig, CompilerSettings, DevChainConfig, MiningConfig, MochaConfig, NetworkConfig,
    OptimizerSettings, PathsConfig, SolidityConfig, SoliditySetting,
};
pub use validate::LintWarning;

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
pub mod tests {
    use super::{DevChainConfig, Preset};
    use std::{path::Path, str::FromStr};

    /// One test per file under `configs/`: it must parse, validate, and match the
    /// preset named by its file stem.
    macro_rules! config_file_tests {
        ($($name:ident => $path:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    check_config_file($path);
                }
            )*
        };
    }

    include!(concat!(env!("OUT_DIR"), "/generated_config_tests.rs"));

    fn check_config_file(rel_path: &str) {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../..")
            .join(rel_path);
        let cfg = DevChainConfig::from_file(&path)
            .unwrap_or_else(|e| panic!("failed to load {rel_path}: {e}"));
        cfg.validate()
            .unwrap_or_else(|e| panic!("{rel_path} is invalid: {e}"));

        let stem = path.file_stem().unwrap().to_string_lossy();
        let preset = Preset::from_str(&stem)
            .unwrap_or_else(|_| panic!("{rel_path} does not name a preset"));
        assert_eq!(cfg, preset.config(), "{rel_path} drifted from preset {preset}");
    }

    #[test]
    fn every_preset_has_a_config_file() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs");
        for preset in Preset::all() {
            let found = ["toml", "json", "yaml", "yml"]
                .iter()
                .any(|ext| dir.join(format!("{preset}.{ext}")).exists());
            assert!(found, "no config file for preset {preset}");
        }
    }

    #[test]
    fn loads_variant_three() {
        let cfg = DevChainConfig::from_file(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs/optimized.toml"),
        )
        .unwrap();
        assert_eq!(cfg.solidity.version(), "0.8.19");
        let optimizer = cfg.solidity.optimizer().unwrap();
        assert!(optimizer.enabled);
        assert_eq!(optimizer.runs, 200);
        assert_eq!(cfg.mocha.unwrap().timeout, 120_000);
    }
}
