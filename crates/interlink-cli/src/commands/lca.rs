//! Lowest-common-ancestor command implementation.

use crate::cli::LcaArgs;
use crate::error::{CliError, Result};
use crate::input;
use crate::output::Formatter;
use interlink_domain::traits::OntologyGraph;
use interlink_domain::TermId;
use interlink_ontology::OntologyLookup;

/// Execute the lca command.
pub fn execute_lca(args: LcaArgs, formatter: &Formatter) -> Result<()> {
    let graph = input::load_term_graph(Some(&args.ontology))?;
    let terms: Vec<TermId> = args.terms.iter().map(|t| TermId::new(t.trim())).collect();

    if let Some(unknown) = terms.iter().find(|t| !graph.contains(t)) {
        return Err(CliError::InvalidInput(format!("Unknown term {}", unknown)));
    }

    let lookup = OntologyLookup::new(graph.clone())
        .map_err(|e| CliError::InvalidInput(format!("Invalid ontology: {}", e)))?;
    let lca = lookup.lowest_common_ancestor(&terms);
    let name = lca.as_ref().and_then(|t| graph.name(t));

    println!("{}", formatter.format_lca(&terms, lca.as_ref(), name)?);
    Ok(())
}
