use std::path::Path;

use serde::Serialize;

use crate::{
    app::{GlobalOptions, Selection},
    commands::common::{crawl, load_graph},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct IndexEntry {
    external_name: String,
    java_name: String,
    members: usize,
    keeps_fields: bool,
}

#[derive(Debug, Serialize)]
struct IndexOutput {
    types: Vec<IndexEntry>,
}

pub fn run(graph_path: &Path, selection: &Selection, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(graph_path)?;
    let indexed = crawl(&graph, selection);

    let data = IndexOutput {
        types: indexed
            .iter()
            .map(|ty| IndexEntry {
                external_name: ty.external_name().to_string(),
                java_name: ty.java_name(),
                members: ty.len(),
                keeps_fields: ty.has_plain_members(),
            })
            .collect(),
    };

    print_output(&data, opts, |data| {
        let mut writer = TabWriter::new(vec![
            ("JAVA TYPE", Align::Left),
            ("MEMBERS", Align::Right),
            ("FIELDS", Align::Left),
        ]);
        for entry in &data.types {
            writer.row(vec![
                entry.java_name.clone(),
                entry.members.to_string(),
                if entry.keeps_fields { "yes" } else { "no" }.to_string(),
            ]);
        }
        writer.print();
        println!("\n{} registered types", data.types.len());
    })
}
