use anyhow::{Context, Result};

use ontofactory::presentation::create_ontology_factory;
use ontofactory::presentation::output::{render_ontology, OntologySummary, OutputFormat};
use ontofactory::Config;

pub fn cmd_load(config: &Config, handle: Option<&str>, json: bool) -> Result<()> {
    let factory = create_ontology_factory(config);
    let ontology = factory.create(handle).with_context(|| match handle {
        Some(handle) => format!("failed to load ontology '{}'", handle),
        None => format!(
            "failed to load default ontology '{}'",
            factory.default_provider().handle()
        ),
    })?;

    let summary = OntologySummary::from(ontology.as_ref());
    print!("{}", render_ontology(&summary, OutputFormat::from_json_flag(json)));
    Ok(())
}
