//! `linkgroup run` and `linkgroup validate` — CSV link pairs to connected components.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use linkgroup_partition::engine::run_csv;
use linkgroup_partition::loader::load_csv_pairs;
use linkgroup_partition::output::write_csv_file;
use linkgroup_partition::{LinkConfig, LogProgress, PartitionError};

use crate::exit_codes::partition_exit_code;
use crate::{CliError, InputArgs};

pub struct RunArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub no_output: bool,
    pub separator: Option<String>,
    pub unknown_source: Option<String>,
    pub json: bool,
    pub quiet: bool,
    pub input_args: InputArgs,
}

/// Wrap an engine error with the file it came from.
fn partition_err(err: PartitionError, path: &Path) -> CliError {
    let code = partition_exit_code(&err);
    let hint = match &err {
        PartitionError::InvalidInput { .. } => Some(
            "use --left-column/--right-column or [columns] in --config to match the CSV header",
        ),
        PartitionError::MissingValue { .. } => {
            Some("every row needs a value on both sides of the link")
        }
        _ => None,
    };
    let cli_err = CliError::new(code, format!("{}: {err}", path.display()));
    match hint {
        Some(h) => cli_err.with_hint(h),
        None => cli_err,
    }
}

/// Load the config file (if any), apply flag overrides, then validate.
fn resolve_config(
    args: &InputArgs,
    separator: Option<&str>,
    unknown_source: Option<&str>,
) -> Result<LinkConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("cannot read config {}: {e}", path.display())))?;
            LinkConfig::from_toml(&text).map_err(|e| partition_err(e, path))?
        }
        None => LinkConfig::default(),
    };

    if let Some(left) = &args.left_column {
        config.columns.left = left.clone();
    }
    if let Some(right) = &args.right_column {
        config.columns.right = right.clone();
    }
    if let Some(sep) = separator {
        config.output.separator = sep.to_string();
    }
    if let Some(src) = unknown_source {
        config.output.unknown_source = src.to_string();
    }

    config
        .validate()
        .map_err(|e| CliError::new(partition_exit_code(&e), e.to_string()))?;
    Ok(config)
}

fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

pub fn cmd_run(args: RunArgs) -> Result<(), CliError> {
    let config = resolve_config(
        &args.input_args,
        args.separator.as_deref(),
        args.unknown_source.as_deref(),
    )?;

    let output_path = if args.no_output {
        None
    } else {
        Some(
            args.output
                .clone()
                .unwrap_or_else(|| PathBuf::from(config.output.path_or_default())),
        )
    };

    if let Some(ref out) = output_path {
        if same_file(out, &args.input) {
            return Err(CliError::usage(format!(
                "output {} is the input file",
                out.display()
            ))
            .with_hint("pass a different -o path or --no-output"));
        }
    }

    log::info!("reading input data from {}", args.input.display());
    let csv_data = read_input(&args.input)?;

    log::info!("finding connected components");
    let result = run_csv(&config, &csv_data, &mut LogProgress)
        .map_err(|e| partition_err(e, &args.input))?;

    if let Some(ref out) = output_path {
        write_csv_file(&result.rows, out).map_err(|e| partition_err(e, out))?;
        log::info!("output saved to {}", out.display());
    }

    if args.json {
        let json_str = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::internal(format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    }

    if !args.quiet {
        let s = &result.summary;
        eprintln!(
            "{} nodes, {} links: {} connected components ({} singletons, largest {}) in {} ms",
            s.nodes,
            s.pairs,
            s.components,
            s.singletons,
            s.largest_component,
            result.meta.elapsed_ms,
        );
        if let Some(ref out) = output_path {
            eprintln!("wrote {}", out.display());
        }
    }

    Ok(())
}

pub fn cmd_validate(input: PathBuf, input_args: InputArgs) -> Result<(), CliError> {
    let config = resolve_config(&input_args, None, None)?;
    let csv_data = read_input(&input)?;

    let pairs = load_csv_pairs(&csv_data, &config.columns).map_err(|e| partition_err(e, &input))?;

    let nodes: BTreeSet<&str> = pairs
        .iter()
        .flat_map(|p| [p.left.as_str(), p.right.as_str()])
        .collect();
    let self_pairs = pairs.iter().filter(|p| p.left == p.right).count();

    println!(
        "valid: {} links over {} nodes ({} self-links)",
        pairs.len(),
        nodes.len(),
        self_pairs
    );
    Ok(())
}
