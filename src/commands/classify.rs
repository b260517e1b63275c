use anyhow::{Context, Result};

use ontofactory::presentation::create_ontology_factory;
use ontofactory::presentation::output::{render_plan, OutputFormat, PlanSummary};
use ontofactory::Config;

pub fn cmd_classify(config: &Config, handle: &str, json: bool) -> Result<()> {
    let factory = create_ontology_factory(config);
    let plan = factory
        .resolver()
        .plan(handle)
        .with_context(|| format!("cannot classify '{}'", handle))?;

    let summary = PlanSummary::from(&plan);
    print!("{}", render_plan(&summary, OutputFormat::from_json_flag(json)));
    Ok(())
}
