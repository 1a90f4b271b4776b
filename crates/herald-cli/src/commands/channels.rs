//! Implementation of the `herald channels` command.

use herald_core::application::available_channels;

use crate::{
    cli::{ChannelsArgs, ChannelsFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ChannelsArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let channels = available_channels();

    match args.format {
        ChannelsFormat::Table => {
            output.header("Available channels:")?;
            for channel in &channels {
                output.print(&format!("  {:<8} {}", channel.name, channel.description))?;
            }
        }

        ChannelsFormat::List => {
            for channel in &channels {
                println!("{}", channel.name);
            }
        }

        ChannelsFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json =
                serde_json::to_string_pretty(&channels).map_err(|e| CliError::Internal {
                    message: format!("Failed to serialise channel list: {e}"),
                    source: Some(Box::new(e)),
                })?;
            println!("{json}");
        }
    }

    Ok(())
}
