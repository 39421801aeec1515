//! Command dispatch
//!
//! Results go to the writer passed in (stdout from `main`). Progress lines,
//! warnings and logs go straight to the terminal.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::NavigationService;
use crate::application::IoResultExt;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::progress::ConsoleProgress;
use crate::config::{self, Settings};
use crate::domain::Graph;

const WRITE_OUTPUT: &str = "write output";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(cli, &mut out)?;
    out.flush().with_context(WRITE_OUTPUT)?;
    Ok(())
}

/// Runs the selected command, writing its results to `out`.
pub fn execute_command_to(cli: &Cli, out: &mut dyn Write) -> CliResult<()> {
    match &cli.command {
        None => cmd_run(&service(cli)?, out, false),
        Some(Commands::Run { skip_naive }) => cmd_run(&service(cli)?, out, *skip_naive),
        Some(Commands::Dump) => cmd_dump(&service(cli)?, out),
        Some(Commands::Walk { from, to }) => {
            cmd_walk(&service(cli)?, out, from.as_deref(), to.as_deref())
        }
        Some(Commands::Lcm { from, to, verbose }) => {
            cmd_lcm(&service(cli)?, out, from.as_deref(), to.as_deref(), *verbose)
        }
        Some(Commands::Naive { from, to, expected }) => {
            cmd_naive(&service(cli)?, out, from.as_deref(), to.as_deref(), *expected)
        }
        Some(Commands::Config { command }) => cmd_config(cli, out, command),
        Some(Commands::Completion { shell }) => cmd_completion(out, *shell),
    }
}

/// Layered settings with command-line flags applied last.
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(input) = &cli.input {
        settings.input = config::expand_path(input);
    }
    if cli.max_jumps.is_some() {
        settings.max_jumps = cli.max_jumps;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn service(cli: &Cli) -> CliResult<NavigationService> {
    Ok(NavigationService::new(load_settings(cli)?))
}

#[instrument(skip(service, out))]
fn cmd_run(service: &NavigationService, out: &mut dyn Write, skip_naive: bool) -> CliResult<()> {
    let graph = service.load()?;
    output::raw(out, &graph).with_context(WRITE_OUTPUT)?;

    let jumps = service.walk(&graph, None, None)?;
    output::result(out, "Puzzle 1", &format!("jumps = {}", jumps)).with_context(WRITE_OUTPUT)?;

    let report = service.ghost_walk_lcm(&graph, None, None)?;
    output::result(
        out,
        "Puzzle 2",
        &format!("least common multiple solution jumps = {}", report.jumps),
    )
    .with_context(WRITE_OUTPUT)?;

    if skip_naive || !service.settings().naive {
        debug!("lockstep walk skipped");
        return Ok(());
    }
    let expected = service.settings().expected_jumps.unwrap_or(report.jumps);
    let jumps = naive_walk(service, &graph, None, None, Some(expected))?;
    output::result(out, "Puzzle 2", &format!("naive solution jumps = {}", jumps))
        .with_context(WRITE_OUTPUT)?;
    Ok(())
}

#[instrument(skip(service, out))]
fn cmd_dump(service: &NavigationService, out: &mut dyn Write) -> CliResult<()> {
    let graph = service.load()?;
    output::raw(out, &graph).with_context(WRITE_OUTPUT)?;
    Ok(())
}

#[instrument(skip(service, out))]
fn cmd_walk(
    service: &NavigationService,
    out: &mut dyn Write,
    from: Option<&str>,
    to: Option<&str>,
) -> CliResult<()> {
    let graph = service.load()?;
    let jumps = service.walk(&graph, from, to)?;
    output::result(out, "jumps", &jumps).with_context(WRITE_OUTPUT)?;
    Ok(())
}

#[instrument(skip(service, out))]
fn cmd_lcm(
    service: &NavigationService,
    out: &mut dyn Write,
    from: Option<&str>,
    to: Option<&str>,
    verbose: bool,
) -> CliResult<()> {
    let graph = service.load()?;
    let report = service.ghost_walk_lcm(&graph, from, to)?;
    if verbose {
        output::header(out, "Walker cycles").with_context(WRITE_OUTPUT)?;
        for (name, jumps) in &report.cycles {
            output::detail(out, &format!("{}: {}", name, jumps)).with_context(WRITE_OUTPUT)?;
        }
    }
    output::result(out, "jumps", &report.jumps).with_context(WRITE_OUTPUT)?;
    Ok(())
}

#[instrument(skip(service, out))]
fn cmd_naive(
    service: &NavigationService,
    out: &mut dyn Write,
    from: Option<&str>,
    to: Option<&str>,
    expected: Option<u64>,
) -> CliResult<()> {
    if expected == Some(0) {
        return Err(CliError::InvalidArgs("--expected must be positive".into()));
    }
    let graph = service.load()?;
    let expected = expected.or(service.settings().expected_jumps);
    if expected.is_none() {
        output::warning("no expected answer configured, progress shows raw jump counts");
    }
    let jumps = naive_walk(service, &graph, from, to, expected)?;
    output::result(out, "jumps", &jumps).with_context(WRITE_OUTPUT)?;
    Ok(())
}

fn naive_walk(
    service: &NavigationService,
    graph: &Graph,
    from: Option<&str>,
    to: Option<&str>,
    expected: Option<u64>,
) -> CliResult<u64> {
    let mut progress = ConsoleProgress::new(service.settings().progress_interval(), expected);
    Ok(service.ghost_walk_naive(graph, from, to, &mut progress)?)
}

#[instrument(skip(cli, out))]
fn cmd_config(cli: &Cli, out: &mut dyn Write, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::raw(out, &settings.to_toml()?).with_context(WRITE_OUTPUT)?;
        }
        ConfigCommands::Path => {
            output::header(out, "Config files (lowest precedence first)")
                .with_context(WRITE_OUTPUT)?;
            let global = match config::global_config_path() {
                Some(path) => describe(&path),
                None => "global: unavailable (no home directory)".to_string(),
            };
            output::detail(out, &global).with_context(WRITE_OUTPUT)?;
            let local = cli.config.clone().unwrap_or_else(config::local_config_path);
            output::detail(out, &describe(&local)).with_context(WRITE_OUTPUT)?;
        }
    }
    Ok(())
}

fn describe(path: &std::path::Path) -> String {
    let state = if path.exists() { "found" } else { "missing" };
    format!("{} ({})", path.display(), state)
}

fn cmd_completion(out: &mut dyn Write, shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    Ok(())
}
