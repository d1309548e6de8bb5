use clap::Subcommand;
use devchain_config::{ConfigFormat, ConfigSource, Preset};
use std::path::PathBuf;

const SOURCE_HELP: &str =
    "Config to read: `preset:<name>`, an http(s) URL, or a .toml/.json/.yaml file path.";

#[derive(Debug, Subcommand)]
pub enum DevchainSubcommand {
    #[command(name = "presets", about = "List built-in presets")]
    Presets,

    #[command(name = "show", long_about = "Print a config in TOML, JSON or YAML.")]
    Show {
        #[arg(env = "DEVCHAIN_CONFIG", help = SOURCE_HELP)]
        source: ConfigSource,

        /// Output format.
        #[arg(short, long, default_value = "toml")]
        format: ConfigFormat,
    },

    #[command(
        name = "validate",
        long_about = "Check a config against the schema rules and report lint warnings. Exits non-zero on violations."
    )]
    Validate {
        #[arg(env = "DEVCHAIN_CONFIG", help = SOURCE_HELP)]
        source: ConfigSource,
    },

    #[command(name = "init", long_about = "Write a new config file from a preset.")]
    Init {
        /// Where to write the config; the extension selects TOML, JSON or YAML.
        path: PathBuf,

        /// Preset to start from.
        #[arg(short, long, default_value = "in-process")]
        preset: Preset,

        /// Replace an existing file. The old file is kept as a timestamped .bak.
        #[arg(long)]
        force: bool,
    },

    #[command(name = "get", long_about = "Print a value by dotted key, e.g. networks.hardhat.chainId.")]
    Get {
        #[arg(help = SOURCE_HELP)]
        source: ConfigSource,

        key: String,
    },

    #[command(
        name = "set",
        long_about = "Set a value by dotted key. JSON literals keep their type; anything else is stored as a string. The file is validated before it is saved."
    )]
    Set {
        file: PathBuf,

        key: String,

        value: String,
    },

    #[command(name = "unset", long_about = "Remove an optional value by dotted key.")]
    Unset {
        file: PathBuf,

        key: String,
    },

    #[command(name = "diff", long_about = "Show field-level differences between two configs.")]
    Diff {
        #[arg(help = SOURCE_HELP)]
        from: ConfigSource,

        #[arg(help = SOURCE_HELP)]
        to: ConfigSource,
    },

    #[command(name = "chains", about = "List well-known chain ids")]
    Chains,

    #[command(
        name = "endpoints",
        long_about = "Print each network's connection target, expanding {NAME} placeholders from the environment."
    )]
    Endpoints {
        #[arg(env = "DEVCHAIN_CONFIG", help = SOURCE_HELP)]
        source: ConfigSource,
    },
}
