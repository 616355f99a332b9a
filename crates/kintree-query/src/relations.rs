//! Derived relations composed from direct graph lookups.
//!
//! Every function here is a pure read over the graph. Absent
//! intermediates (an unknown person, a missing parent, an unmarried
//! sibling) collapse to an empty result rather than an error, and all
//! orderings follow the underlying lists' insertion order.

use kintree_core::graph::{FamilyGraph, Person};

/// Sons then daughters.
pub fn children<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    let mut out = graph.sons(person);
    out.extend(graph.daughters(person));
    out
}

/// Sons of the father when the father is known, else sons of the
/// mother, minus the person themselves.
///
/// When both parents are known only the father's list is consulted;
/// the bidirectional-link invariant keeps the two lists identical
/// anyway, and the father's list takes precedence if they ever drift.
pub fn brothers<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    let mut sons = match graph.father(person) {
        Some(father) => graph.sons(&father.name),
        None => match graph.mother(person) {
            Some(mother) => graph.sons(&mother.name),
            None => Vec::new(),
        },
    };
    remove_self(&mut sons, person);
    sons
}

/// Daughters of the father when the father is known, else daughters of
/// the mother, minus the person themselves.
pub fn sisters<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    let mut daughters = match graph.father(person) {
        Some(father) => graph.daughters(&father.name),
        None => match graph.mother(person) {
            Some(mother) => graph.daughters(&mother.name),
            None => Vec::new(),
        },
    };
    remove_self(&mut daughters, person);
    daughters
}

/// Brothers then sisters.
pub fn siblings<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    let mut out = brothers(graph, person);
    out.extend(sisters(graph, person));
    out
}

/// Children of every sibling of either parent. Paternal cousins come
/// first; the two sides are not de-duplicated against each other.
pub fn cousins<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    let mut parent_siblings = Vec::new();
    if let Some(father) = graph.father(person) {
        parent_siblings.extend(siblings(graph, &father.name));
    }
    if let Some(mother) = graph.mother(person) {
        parent_siblings.extend(siblings(graph, &mother.name));
    }
    let mut out = Vec::new();
    for sibling in parent_siblings {
        out.extend(children(graph, &sibling.name));
    }
    out
}

/// Sons of each child, in child order.
pub fn grandsons<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    let mut out = Vec::new();
    for child in children(graph, person) {
        out.extend(graph.sons(&child.name));
    }
    out
}

/// Daughters of each child, in child order.
pub fn granddaughters<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    let mut out = Vec::new();
    for child in children(graph, person) {
        out.extend(graph.daughters(&child.name));
    }
    out
}

/// Grandsons then granddaughters.
pub fn grandchildren<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    let mut out = grandsons(graph, person);
    out.extend(granddaughters(graph, person));
    out
}

/// Husbands of the person's sisters, then the spouse's brothers.
/// Unmarried sisters contribute nothing.
pub fn brothers_in_law<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    let mut out: Vec<&Person> = sisters(graph, person)
        .iter()
        .filter_map(|sister| graph.spouse(&sister.name))
        .collect();
    if let Some(spouse) = graph.spouse(person) {
        out.extend(brothers(graph, &spouse.name));
    }
    out
}

/// Wives of the person's brothers, then the spouse's sisters.
/// Unmarried brothers contribute nothing.
pub fn sisters_in_law<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    let mut out: Vec<&Person> = brothers(graph, person)
        .iter()
        .filter_map(|brother| graph.spouse(&brother.name))
        .collect();
    if let Some(spouse) = graph.spouse(person) {
        out.extend(sisters(graph, &spouse.name));
    }
    out
}

/// The mother's brothers plus her brothers-in-law; empty when the
/// mother is unknown.
pub fn maternal_uncles<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    graph.mother(person).map_or_else(Vec::new, |mother| {
        let mut out = brothers(graph, &mother.name);
        out.extend(brothers_in_law(graph, &mother.name));
        out
    })
}

/// The father's brothers plus his brothers-in-law; empty when the
/// father is unknown.
pub fn paternal_uncles<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    graph.father(person).map_or_else(Vec::new, |father| {
        let mut out = brothers(graph, &father.name);
        out.extend(brothers_in_law(graph, &father.name));
        out
    })
}

/// The mother's sisters plus her sisters-in-law; empty when the mother
/// is unknown.
pub fn maternal_aunts<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    graph.mother(person).map_or_else(Vec::new, |mother| {
        let mut out = sisters(graph, &mother.name);
        out.extend(sisters_in_law(graph, &mother.name));
        out
    })
}

/// The father's sisters plus his sisters-in-law; empty when the father
/// is unknown.
pub fn paternal_aunts<'a>(graph: &'a FamilyGraph, person: &str) -> Vec<&'a Person> {
    graph.father(person).map_or_else(Vec::new, |father| {
        let mut out = sisters(graph, &father.name);
        out.extend(sisters_in_law(graph, &father.name));
        out
    })
}

/// Remove at most one occurrence of the person from a relation set.
fn remove_self(set: &mut Vec<&Person>, person: &str) {
    if let Some(pos) = set.iter().position(|p| p.name == person) {
        set.remove(pos);
    }
}
