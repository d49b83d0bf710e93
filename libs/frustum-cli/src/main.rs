//! # frustum
//!
//! Generates a stacked frustum mesh and writes it as an OBJ file.
//!
//! ```text
//! frustum 12 2 1 1 3 1 0.6 -o tower.obj
//! frustum --config tower.json
//! RUST_LOG=debug frustum
//! ```

mod args;

use anyhow::{Context, Result};
use args::{parse_args, CliArgs, Command, Input, USAGE};
use config::constants::DEFAULT_LOG_FILTER;
use frustum_mesh::validate::validate_args;
use frustum_mesh::{build_stack, write_obj_file, ObjOptions, RawStackConfig, ValidationReport};
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
    let cli = match parse_args(args).context("invalid arguments")? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Generate(cli) => cli,
    };
    generate(&cli)
}

fn generate(cli: &CliArgs) -> Result<()> {
    let (config, report) = match &cli.input {
        Input::Positional(values) => validate_args(values),
        Input::ConfigFile(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read config '{}'", path.display()))?;
            RawStackConfig::from_json_str(&source)
                .with_context(|| format!("failed to parse config '{}'", path.display()))?
                .validate()
        }
    };
    summarize(&report);

    let mesh = build_stack(&config);
    write_obj_file(&cli.output, &mesh, &ObjOptions::named(cli.name.clone()))
        .context("failed to write mesh")?;

    log::info!(
        "OBJ written to {} ({} sides, {} segments, {} vertices, {} faces)",
        cli.output.display(),
        config.sides(),
        config.segments().len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}

fn summarize(report: &ValidationReport) {
    if report.is_clean() {
        return;
    }
    log::info!(
        "input adjusted: default sides {}, dropped groups {:?}, default segment {}",
        report.sides_defaulted,
        report.dropped_groups,
        report.segment_defaulted
    );
}
