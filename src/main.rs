use anyhow::Context;
use clap::Parser;
use poetry_scaffold::config::cli::{prompt_project_name, BANNER};
use poetry_scaffold::utils::logger;
use poetry_scaffold::{CliConfig, LocalFilesystem, ProjectName, ScaffoldError, Scaffolder};
use std::io::{self, Write};

const DONE: &str = "\nYour project is set up. You can now delete this script.";

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        let Some(scaffold_error) = e.downcast_ref::<ScaffoldError>() else {
            return Err(e);
        };

        tracing::error!("❌ Scaffolding failed: {}", scaffold_error);
        eprintln!("❌ {}", scaffold_error);
        eprintln!("💡 {}", scaffold_error.recovery_suggestion());
        std::process::exit(scaffold_error.exit_code());
    }

    Ok(())
}

/// Human-facing console. With `--json` it moves to stderr so stdout carries
/// only the report.
fn console(json: bool) -> Box<dyn Write> {
    if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let mut console = console(config.json);
    writeln!(console, "{}", BANNER)?;

    let name = match &config.name {
        Some(name) => ProjectName::new(name.as_str())?,
        None => prompt_project_name(&mut io::stdin().lock(), &mut console)?,
    };

    let scaffolder =
        Scaffolder::new(LocalFilesystem::new(&config.path), &config.path).quiet(config.json);

    if config.dry_run {
        writeln!(console, "\nDry run, nothing will be written. Planned paths:")?;
        for entry in scaffolder.plan(&name) {
            writeln!(console, "  {}", entry.path().display())?;
        }
        return Ok(());
    }

    let report = scaffolder.run(&name)?;
    tracing::info!(
        "📁 Created {} paths under {}",
        report.created.len(),
        report.root.display()
    );

    if config.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    }

    writeln!(console, "{}", DONE)?;
    Ok(())
}
