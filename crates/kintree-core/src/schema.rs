//! Flattened JSON document for the family tree.
//!
//! The wire form maps each person's name to their relation record, with
//! every person reference flattened to `{name, gender}`. Absent fields
//! are omitted from the output entirely.

use crate::graph::{FamilyGraph, Person, RelationRecord};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One person's record in the wire form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDoc {
    #[serde(rename = "self")]
    pub person: Person,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub husband: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wife: Option<Person>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sons: Vec<Person>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub daughters: Vec<Person>,
}

/// The whole tree document: person name → record.
pub type TreeDoc = BTreeMap<String, RecordDoc>;

/// Flatten a graph into its wire form.
pub fn to_doc(graph: &FamilyGraph) -> TreeDoc {
    graph
        .records
        .iter()
        .map(|(name, rec)| (name.clone(), flatten(graph, rec)))
        .collect()
}

fn flatten(graph: &FamilyGraph, rec: &RelationRecord) -> RecordDoc {
    let resolve = |link: &Option<String>| link.as_deref().and_then(|n| graph.person(n)).cloned();
    let resolve_all = |links: &[String]| {
        links
            .iter()
            .filter_map(|n| graph.person(n))
            .cloned()
            .collect()
    };
    RecordDoc {
        person: rec.person.clone(),
        father: resolve(&rec.father),
        mother: resolve(&rec.mother),
        husband: resolve(&rec.husband),
        wife: resolve(&rec.wife),
        sons: resolve_all(&rec.sons),
        daughters: resolve_all(&rec.daughters),
    }
}

/// Rebuild a graph from a tree document.
///
/// Names and genders come from each record's own `self` entry; relation
/// links are recovered by name from the flattened references.
pub fn from_doc(doc: &TreeDoc) -> FamilyGraph {
    let mut graph = FamilyGraph::new();
    for rec in doc.values() {
        let name = rec.person.name.clone();
        let mut record = RelationRecord::new(rec.person.clone());
        record.father = rec.father.as_ref().map(|p| p.name.clone());
        record.mother = rec.mother.as_ref().map(|p| p.name.clone());
        record.husband = rec.husband.as_ref().map(|p| p.name.clone());
        record.wife = rec.wife.as_ref().map(|p| p.name.clone());
        record.sons = rec.sons.iter().map(|p| p.name.clone()).collect();
        record.daughters = rec.daughters.iter().map(|p| p.name.clone()).collect();
        graph.records.insert(name, record);
    }
    graph
}

/// Serialize a graph to the pretty-printed JSON wire form.
pub fn to_json(graph: &FamilyGraph) -> Result<String> {
    serde_json::to_string_pretty(&to_doc(graph)).context("failed to serialize family tree to JSON")
}

/// Deserialize a graph from the JSON wire form.
pub fn from_json(json: &str) -> Result<FamilyGraph> {
    let doc: TreeDoc =
        serde_json::from_str(json).context("failed to deserialize family tree from JSON")?;
    Ok(from_doc(&doc))
}
