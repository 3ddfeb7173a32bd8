use std::{fs::File, io, path::Path};

use anyhow::Context;
use jniscope::keep::KeepRules;
use log::info;

use crate::{
    app::Selection,
    commands::common::{crawl, load_graph},
};

pub fn run(
    graph_path: &Path,
    output: Option<&Path>,
    selection: &Selection,
    no_preamble: bool,
) -> anyhow::Result<()> {
    let graph = load_graph(graph_path)?;
    let indexed = crawl(&graph, selection);
    let rules = KeepRules::new(&indexed).with_preamble(!no_preamble);

    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            rules
                .write_to(&mut file)
                .with_context(|| format!("failed to write keep rules to {}", path.display()))?;
            info!(
                "wrote keep rules for {} Java types to {}",
                indexed.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            rules
                .write_to(&mut stdout.lock())
                .context("failed to write keep rules")?;
        }
    }

    Ok(())
}
