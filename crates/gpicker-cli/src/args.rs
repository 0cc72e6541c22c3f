use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gpicker")]
#[command(about = "Build and inspect Google Picker configuration and selection payloads", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Picker config file (defaults to $GPICKER_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List picker view ids
    Views {
        /// Also list views the picker service has retired
        #[arg(long)]
        include_deprecated: bool,
    },

    /// List picker features
    Features {
        /// Only features resolving to this external value
        #[arg(long)]
        value: Option<String>,
    },

    /// Build a view group and print its serialized form
    Group {
        /// Root view first, then views or serialized groups (JSON objects)
        #[arg(required = true)]
        views: Vec<String>,

        #[arg(long)]
        label: Option<String>,
    },

    /// Map a selection payload (JSON null or array of records) into documents
    Documents {
        /// Payload file, `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Pass records through without schema checks. Raw records have no
        /// table layout, so this always prints JSON regardless of --format
        #[arg(long)]
        lenient: bool,
    },

    /// Map a picker callback result
    Response {
        #[arg(long, default_value = "")]
        action: String,

        /// Documents payload file, `-` for stdin
        #[arg(long)]
        documents: Option<String>,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a picker config file
    Init {
        #[arg(long)]
        client_id: String,

        #[arg(long)]
        developer_key: String,

        #[arg(long, default_value = "Pick a file")]
        label: String,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Validate the config and print the picker properties
    Show,

    /// Print the resolved config path
    Path,
}
