use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use switchboard_core::arguments::dynamic::erase;
use switchboard_core::arguments::{BooleanArgument, IntegerArgument, StringArgument};
use switchboard_core::variables::cmp_sign;
use switchboard_core::{Comparable, DynArgument, Input, Options, Truthy};

/// Evaluate a JSON input against the built-in arguments.
#[derive(Debug, Parser)]
#[command(name = "switchboard", version)]
struct Cli {
    /// Candidate input as JSON, e.g. `42`, `true`, `"beta"`
    input: String,

    /// Threshold (JSON) to compare every variable against
    #[arg(long)]
    threshold: Option<String>,

    /// Lowercase string inputs before comparing
    #[arg(long)]
    case_insensitive: bool,
}

fn parse_json(raw: &str) -> anyhow::Result<Input> {
    let value: serde_json::Value =
        serde_json::from_str(raw).with_context(|| format!("invalid JSON: {raw}"))?;
    Ok(Input::from(value))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let input = parse_json(&cli.input)?;
    let threshold = cli.threshold.as_deref().map(parse_json).transpose()?;
    let options = Options::new().with("case_insensitive", cli.case_insensitive);

    tracing::debug!(kind = %input.kind(), "evaluating input");

    // (A) build every candidate argument, keep the ones that apply
    let arguments: Vec<Box<dyn DynArgument>> = vec![
        erase(IntegerArgument::new(input.clone())),
        erase(BooleanArgument::new(input.clone())),
        erase(StringArgument::with_options(input.clone(), &options)),
    ];

    let mut matched = false;
    for argument in arguments.iter().filter(|a| a.applies_dyn()) {
        matched = true;
        println!("{} applies to {}", argument.argument_name(), input.kind());

        // (B) evaluate each variable and compare it with the threshold
        for name in argument.variable_names() {
            let value = argument.evaluate_dyn(name)?;
            match &threshold {
                Some(threshold) => match value.compare(threshold) {
                    Ok(ordering) => println!("  {name}: compare = {}", cmp_sign(ordering)),
                    Err(e) => println!("  {name}: {e}"),
                },
                None => println!("  {name}: truthy = {}", value.is_truthy()),
            }
        }
    }

    if !matched {
        println!("no argument applies to {}", input.kind());
    }
    Ok(())
}
