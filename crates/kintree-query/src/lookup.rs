//! Relation-label lookup facade.
//!
//! A closed set of relation labels, each bound to one accessor.
//! Single-valued relations render as the relative's name; multi-valued
//! ones as a comma-joined list in traversal order.

use crate::relations;
use kintree_core::graph::{FamilyGraph, Person};
use std::str::FromStr;

/// A relation label outside the closed set.
#[derive(Debug, thiserror::Error)]
#[error("unknown relation label: {0:?}")]
pub struct UnknownRelation(pub String);

/// The closed set of queryable relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Mother,
    Father,
    Son,
    Daughter,
    Cousin,
    Children,
    Brothers,
    Sisters,
    Grandsons,
    Granddaughters,
    Grandchildren,
    BrotherInLaw,
    SisterInLaw,
    MaternalUncle,
    PaternalUncle,
    MaternalAunt,
    PaternalAunt,
}

impl Relation {
    pub const ALL: [Relation; 17] = [
        Relation::Mother,
        Relation::Father,
        Relation::Son,
        Relation::Daughter,
        Relation::Cousin,
        Relation::Children,
        Relation::Brothers,
        Relation::Sisters,
        Relation::Grandsons,
        Relation::Granddaughters,
        Relation::Grandchildren,
        Relation::BrotherInLaw,
        Relation::SisterInLaw,
        Relation::MaternalUncle,
        Relation::PaternalUncle,
        Relation::MaternalAunt,
        Relation::PaternalAunt,
    ];

    /// The canonical query label for this relation.
    pub fn label(self) -> &'static str {
        match self {
            Relation::Mother => "mother",
            Relation::Father => "father",
            Relation::Son => "son",
            Relation::Daughter => "daughter",
            Relation::Cousin => "cousin",
            Relation::Children => "children",
            Relation::Brothers => "brothers",
            Relation::Sisters => "sisters",
            Relation::Grandsons => "grandsons",
            Relation::Granddaughters => "granddaughters",
            Relation::Grandchildren => "grandchildren",
            Relation::BrotherInLaw => "brother-in-law",
            Relation::SisterInLaw => "sister-in-law",
            Relation::MaternalUncle => "maternal-uncle",
            Relation::PaternalUncle => "paternal-uncle",
            Relation::MaternalAunt => "maternal-aunt",
            Relation::PaternalAunt => "paternal-aunt",
        }
    }
}

impl FromStr for Relation {
    type Err = UnknownRelation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relation::ALL
            .iter()
            .copied()
            .find(|relation| relation.label() == s)
            .ok_or_else(|| UnknownRelation(s.to_string()))
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Look up a relation for a person by name.
///
/// Returns `None` for an unknown person or an absent single-valued
/// relation (mother, father). Multi-valued relations always render,
/// joining an empty set to an empty string.
pub fn find_relative(graph: &FamilyGraph, person: &str, relation: Relation) -> Option<String> {
    if !graph.contains(person) {
        return None;
    }
    match relation {
        Relation::Mother => graph.mother(person).map(|p| p.name.clone()),
        Relation::Father => graph.father(person).map(|p| p.name.clone()),
        Relation::Son => Some(join(&graph.sons(person))),
        Relation::Daughter => Some(join(&graph.daughters(person))),
        Relation::Cousin => Some(join(&relations::cousins(graph, person))),
        Relation::Children => Some(join(&relations::children(graph, person))),
        Relation::Brothers => Some(join(&relations::brothers(graph, person))),
        Relation::Sisters => Some(join(&relations::sisters(graph, person))),
        Relation::Grandsons => Some(join(&relations::grandsons(graph, person))),
        Relation::Granddaughters => Some(join(&relations::granddaughters(graph, person))),
        Relation::Grandchildren => Some(join(&relations::grandchildren(graph, person))),
        Relation::BrotherInLaw => Some(join(&relations::brothers_in_law(graph, person))),
        Relation::SisterInLaw => Some(join(&relations::sisters_in_law(graph, person))),
        Relation::MaternalUncle => Some(join(&relations::maternal_uncles(graph, person))),
        Relation::PaternalUncle => Some(join(&relations::paternal_uncles(graph, person))),
        Relation::MaternalAunt => Some(join(&relations::maternal_aunts(graph, person))),
        Relation::PaternalAunt => Some(join(&relations::paternal_aunts(graph, person))),
    }
}

fn join(set: &[&Person]) -> String {
    set.iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
