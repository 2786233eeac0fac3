//! Command dispatch: one handler per subcommand

use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{OutputFormat, SiteService};
use crate::cli::args::{CategoryCommands, Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `trishaft --help`".to_string(),
        ));
    };

    // Completions need neither settings nor services.
    if let Commands::Completion { shell } = command {
        completion(*shell);
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    if !settings.color {
        output::disable_color();
    }
    let service = SiteService::new(Arc::new(settings));

    match command {
        Commands::Title { fragment } => title(&service, fragment.as_deref()),
        Commands::Categories { command } => match command {
            CategoryCommands::List { format } => categories_list(&service, *format),
            CategoryCommands::Show { category, format } => {
                categories_show(&service, category, *format)
            }
            CategoryCommands::Data => categories_data(&service),
            CategoryCommands::Tree => categories_tree(&service),
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show => config_show(&service),
            ConfigCommands::Path => config_path(cli.config.as_deref()),
            ConfigCommands::Template => config_template(),
        },
        Commands::Completion { .. } => Ok(()),
    }
}

#[instrument(skip(service))]
fn title(service: &SiteService, fragment: Option<&str>) -> CliResult<()> {
    output::info(&service.title(fragment));
    Ok(())
}

#[instrument(skip(service))]
fn categories_list(service: &SiteService, format: Option<OutputFormat>) -> CliResult<()> {
    output::info(&service.render_list(format)?);
    Ok(())
}

#[instrument(skip(service))]
fn categories_show(
    service: &SiteService,
    category: &str,
    format: Option<OutputFormat>,
) -> CliResult<()> {
    output::info(&service.render_info(category, format)?);
    Ok(())
}

fn categories_data(service: &SiteService) -> CliResult<()> {
    output::info(&service.render_data()?);
    Ok(())
}

fn categories_tree(service: &SiteService) -> CliResult<()> {
    // termtree output already ends with a newline
    print!("{}", service.render_tree());
    Ok(())
}

fn config_show(service: &SiteService) -> CliResult<()> {
    output::header("# Effective configuration");
    output::info(&service.settings().to_toml()?);
    Ok(())
}

fn config_path(explicit: Option<&Path>) -> CliResult<()> {
    match global_config_path() {
        Some(path) => {
            let state = if path.exists() { "" } else { " (not found)" };
            output::action("Global", &format!("{}{}", path.display(), state));
        }
        None => output::action("Global", "<no config directory>"),
    }
    if let Some(path) = explicit {
        output::action("File", &path.display());
    }
    Ok(())
}

fn config_template() -> CliResult<()> {
    print!("{}", Settings::template());
    Ok(())
}

fn completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
