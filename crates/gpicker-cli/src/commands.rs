use super::args::{Cli, Commands, ConfigCommand};
use super::config::resolve_config_path;
use super::handlers;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);
    tracing::debug!(format = %cli.format, "starting gpicker");

    match cli.command {
        Commands::Views { include_deprecated } => {
            handlers::catalog::views(include_deprecated, cli.format)
        }

        Commands::Features { value } => handlers::catalog::features(value.as_deref(), cli.format),

        Commands::Group { views, label } => {
            handlers::group::handle(&views, label.as_deref(), cli.format)
        }

        Commands::Documents { input, lenient } => {
            handlers::documents::handle(&input, lenient, cli.format)
        }

        Commands::Response { action, documents } => {
            handlers::response::handle(&action, documents.as_deref(), cli.format)
        }

        Commands::Config { command } => {
            let config_path = resolve_config_path(cli.config.as_deref())?;
            tracing::debug!(path = %config_path.display(), "resolved config path");

            match command {
                ConfigCommand::Init {
                    client_id,
                    developer_key,
                    label,
                    force,
                } => handlers::config::init(&config_path, client_id, developer_key, label, force),
                ConfigCommand::Show => handlers::config::show(&config_path, cli.format),
                ConfigCommand::Path => {
                    println!("{}", config_path.display());
                    Ok(())
                }
            }
        }
    }
}
