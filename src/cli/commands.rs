//! Command dispatch

use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::arena::TreeArena;
use crate::cli::args::{Cli, Commands, ConfigCommands, RenderArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::options::RenderOptions;
use crate::outline::parse_outline;
use crate::render::TreePrinter;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render(args)) => _render(cli.config.as_deref(), args),
        Some(Commands::Config { command }) => _config(cli.config.as_deref(), command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Cli::command()
            .print_help()
            .map_err(|e| CliError::Usage(e.to_string())),
    }
}

/// Settings from config layers with command line flags on top.
pub fn effective_options(config: Option<&Path>, args: &RenderArgs) -> CliResult<RenderOptions> {
    let mut settings = Settings::load(config)?;
    if let Some(color) = args.color {
        settings.color = color;
    }
    if args.border {
        settings.border = true;
    }
    if args.escape_newlines {
        settings.escape_newlines = true;
    }
    if let Some(trim) = args.trim {
        settings.trim_length = trim;
    }
    if let Some(max_depth) = args.max_depth {
        settings.max_depth = max_depth;
    }
    if let Some(orientation) = args.orientation {
        settings.orientation = orientation;
    }
    debug!(?settings, "effective settings");
    Ok(RenderOptions::from(&settings))
}

#[instrument(skip(args))]
fn _render(config: Option<&Path>, args: &RenderArgs) -> CliResult<()> {
    let options = effective_options(config, args)?;
    let text = read_input(args.file.as_deref())?;
    let arena = parse_outline(&text)?;
    let root = arena
        .root()
        .ok_or_else(|| CliError::Usage("outline has no root".to_string()))?;

    let printer: TreePrinter<TreeArena> = TreePrinter::new(arena, options);
    printer.display(&root, args.depth)?;
    Ok(())
}

fn read_input(file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Input {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Input {
                    path: "<stdin>".into(),
                    source,
                })?;
            Ok(text)
        }
    }
}

#[instrument]
fn _config(config: Option<&Path>, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(config)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no home directory, global config disabled"),
        },
    }
    Ok(())
}
