use std::path::Path;

use anyhow::Context;
use jniscope::{
    indexer::{BindingIndexer, IndexedType, IndexerConfig},
    metadata::MetadataGraph,
};

use crate::app::Selection;

/// Load a metadata graph from its JSON form.
pub fn load_graph(path: &Path) -> anyhow::Result<MetadataGraph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read metadata graph: {}", path.display()))?;
    parse_graph(&text).with_context(|| format!("invalid metadata graph: {}", path.display()))
}

/// Parse a metadata graph from JSON text.
pub fn parse_graph(text: &str) -> anyhow::Result<MetadataGraph> {
    Ok(serde_json::from_str(text)?)
}

/// Crawl every non-excluded assembly of `graph`, nested types included.
pub fn crawl(graph: &MetadataGraph, selection: &Selection) -> Vec<IndexedType> {
    let config = IndexerConfig::default()
        .with_attribute_type(&selection.attribute)
        .with_member_kinds(selection.member_kinds());

    BindingIndexer::new(config).crawl(graph.binding_types(selection.excluded.as_slice()))
}
