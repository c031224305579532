use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    Args, OutputFormat,
    constructor::build_validator,
    formatters::{JsonFormatter, Reporter, StdOutFormatter},
    parser::parse_config,
};

/// Run the plan named by `args` and report it. Returns the verdict.
pub fn run(args: &Args) -> Result<bool> {
    let version = env!("CARGO_PKG_VERSION").to_string();
    let mut reporter: Box<dyn Reporter> = match args.output {
        OutputFormat::Stdout => Box::new(StdOutFormatter::new(version)),
        OutputFormat::Json => Box::new(JsonFormatter::new(version)),
    };
    let Some(plan) = args.config.as_deref() else {
        anyhow::bail!("No plan file given, use --config <FILE>");
    };

    reporter.on_start();
    reporter.on_loading(plan);
    let valid = run_plan(plan, reporter.as_mut())?;
    reporter.on_complete()?;
    Ok(valid)
}

pub fn run_plan(plan: &str, reporter: &mut dyn Reporter) -> Result<bool> {
    let config = parse_config(plan)?;
    debug!(plan, checks = config.check.len(), "plan loaded");
    let validator =
        build_validator(&config).with_context(|| format!("Failed to build plan: '{}'", plan))?;
    reporter.on_result(plan, &validator);
    Ok(validator.is_valid())
}
