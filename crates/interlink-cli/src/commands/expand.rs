//! Expand command implementation.

use crate::cli::ExpandArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input;
use crate::output::Formatter;
use interlink_expansion::expand_all;

/// Execute the expand command.
pub fn execute_expand(args: ExpandArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let strategy = args.strategy.map(Into::into).unwrap_or(config.pipeline.expansion);
    let records = input::load_records(&args.records)?;

    let expanded = expand_all(strategy, &records, config.pipeline.parallel);
    tracing::info!(
        strategy = %strategy,
        records = records.len(),
        binaries = expanded.iter().map(|r| r.binaries.len()).sum::<usize>(),
        "Expanded records"
    );

    println!("{}", formatter.format_expansion(&expanded)?);
    Ok(())
}
