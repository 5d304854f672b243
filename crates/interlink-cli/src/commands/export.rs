//! Export command implementation.

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input;
use crate::output::Formatter;
use interlink_pipeline::{ExportPipeline, PipelineConfig};
use std::sync::Arc;

/// Execute the export command.
pub fn execute_export(args: ExportArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let pipeline_config = pipeline_config(&args, config)?;

    let records = input::load_records(&args.records)?;
    let lookup = Arc::new(input::load_ontology(args.ontology.as_deref())?);
    let dispositions = input::load_annotations(args.annotations.as_deref())?;

    let pipeline = ExportPipeline::new(pipeline_config, lookup, dispositions)?;
    let run = pipeline.run(&records);

    println!("{}", formatter.format_run(&run, args.show_rejected)?);
    Ok(())
}

/// Effective pipeline configuration: preset or file, then flag overrides.
fn pipeline_config(args: &ExportArgs, config: &Config) -> Result<PipelineConfig> {
    let mut pipeline = match &args.preset {
        Some(name) => config.clone().with_preset(name)?.pipeline,
        None => config.pipeline.clone(),
    };

    if let Some(strategy) = args.strategy {
        pipeline.expansion = strategy.into();
    }
    if let Some(threshold) = args.threshold {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CliError::InvalidInput(format!(
                "Score threshold must be a non-negative number, got {}",
                threshold
            )));
        }
        pipeline.export.score_threshold = threshold;
    }
    if args.parallel {
        pipeline.parallel = true;
    }
    Ok(pipeline)
}
