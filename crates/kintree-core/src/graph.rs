//! Graph data model for the family tree.
//!
//! The graph is an arena of [`RelationRecord`]s keyed by person name.
//! Relation fields hold names into that arena, never owned references,
//! so the cyclic parent↔child and spouse↔spouse shapes carry no
//! ownership at all. Both directions of every link are maintained by
//! the builder mutations ([`FamilyGraph::add_couple`],
//! [`FamilyGraph::add_child`]).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::GraphError;

/// Binary gender attribute carried by every person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A member of the family.
///
/// Identity is the name alone: two persons with the same name are the
/// same person regardless of gender. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub gender: Gender,
}

impl Person {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Person {}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Which parent a child is being attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRole {
    Father,
    Mother,
}

impl ParentRole {
    /// The opposite role, used when mirroring a child onto the spouse.
    pub fn other(self) -> Self {
        match self {
            ParentRole::Father => ParentRole::Mother,
            ParentRole::Mother => ParentRole::Father,
        }
    }
}

/// Which child list a new child lands in. Implies the child's gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRole {
    Son,
    Daughter,
}

impl ChildRole {
    pub fn gender(self) -> Gender {
        match self {
            ChildRole::Son => Gender::Male,
            ChildRole::Daughter => Gender::Female,
        }
    }
}

/// Per-person bundle of direct relation links.
///
/// Sparse by design: fields are only ever set or appended to, never
/// cleared. The `sons`/`daughters` lists keep insertion order.
#[derive(Debug, Clone)]
pub struct RelationRecord {
    pub person: Person,
    pub father: Option<String>,
    pub mother: Option<String>,
    pub husband: Option<String>,
    pub wife: Option<String>,
    pub sons: Vec<String>,
    pub daughters: Vec<String>,
}

impl RelationRecord {
    pub fn new(person: Person) -> Self {
        Self {
            person,
            father: None,
            mother: None,
            husband: None,
            wife: None,
            sons: Vec::new(),
            daughters: Vec::new(),
        }
    }
}

/// The family tree: an arena of relation records keyed by person name.
#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    pub records: BTreeMap<String, RelationRecord>,
}

impl FamilyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent upsert: the existing person wins and the supplied
    /// gender is ignored on re-invocation. Never fails.
    pub fn get_or_create(&mut self, name: &str, gender: Gender) -> Person {
        self.records
            .entry(name.to_string())
            .or_insert_with(|| RelationRecord::new(Person::new(name, gender)))
            .person
            .clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn person(&self, name: &str) -> Option<&Person> {
        self.records.get(name).map(|rec| &rec.person)
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.records.values().map(|rec| &rec.person)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Marry two persons, creating either side as needed (the husband
    /// is created male, the wife female). An existing spouse link is
    /// overwritten silently; there is no divorce tracking.
    ///
    /// If exactly one side already has children, those children are
    /// also appended onto the childless side's lists. When both sides
    /// have children nothing moves.
    pub fn add_couple(&mut self, husband: &str, wife: &str) {
        let husband = self.get_or_create(husband, Gender::Male);
        let wife = self.get_or_create(wife, Gender::Female);
        tracing::debug!(husband = %husband.name, wife = %wife.name, "adding couple");

        if let Some(rec) = self.records.get_mut(&wife.name) {
            rec.husband = Some(husband.name.clone());
        }
        if let Some(rec) = self.records.get_mut(&husband.name) {
            rec.wife = Some(wife.name.clone());
        }

        // One-directional merge: whichever side had children first
        // wins. Lists only; the children keep their existing parent
        // fields.
        let h_kids = self.child_names(&husband.name);
        let w_kids = self.child_names(&wife.name);
        if !w_kids.is_empty() && h_kids.is_empty() {
            self.append_children(&husband.name, &w_kids);
        } else if !h_kids.is_empty() && w_kids.is_empty() {
            self.append_children(&wife.name, &h_kids);
        }
    }

    /// Attach a child to a registered parent, creating the child as
    /// needed with the gender its role implies.
    ///
    /// The link is set in both directions, and when the parent has a
    /// registered spouse it is mirrored onto them too, so the child
    /// ends up with both parent fields set and both parents list the
    /// child. Fails only when the parent is not yet in the tree; the
    /// graph is left untouched in that case.
    pub fn add_child(
        &mut self,
        parent_role: ParentRole,
        parent: &str,
        child_role: ChildRole,
        child: &str,
    ) -> Result<(), GraphError> {
        if !self.records.contains_key(parent) {
            return Err(GraphError::UnknownParent {
                name: parent.to_string(),
            });
        }
        let child = self.get_or_create(child, child_role.gender());
        tracing::debug!(parent, child = %child.name, "adding child");

        let spouse = match parent_role {
            ParentRole::Father => self.records.get(parent).and_then(|rec| rec.wife.clone()),
            ParentRole::Mother => self.records.get(parent).and_then(|rec| rec.husband.clone()),
        };

        self.push_child(parent, child_role, &child.name);
        self.set_parent(&child.name, parent_role, parent);

        if let Some(spouse) = spouse {
            self.push_child(&spouse, child_role, &child.name);
            self.set_parent(&child.name, parent_role.other(), &spouse);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Base accessors: pure reads, empty when the person or the link is
    // absent.
    // ------------------------------------------------------------------

    pub fn father(&self, name: &str) -> Option<&Person> {
        let father = self.records.get(name)?.father.as_deref()?;
        self.person(father)
    }

    pub fn mother(&self, name: &str) -> Option<&Person> {
        let mother = self.records.get(name)?.mother.as_deref()?;
        self.person(mother)
    }

    /// Gender-dependent: the husband of a female person, the wife of a
    /// male one.
    pub fn spouse(&self, name: &str) -> Option<&Person> {
        let rec = self.records.get(name)?;
        let spouse = match rec.person.gender {
            Gender::Female => rec.husband.as_deref()?,
            Gender::Male => rec.wife.as_deref()?,
        };
        self.person(spouse)
    }

    pub fn sons(&self, name: &str) -> Vec<&Person> {
        self.records.get(name).map_or_else(Vec::new, |rec| {
            rec.sons.iter().filter_map(|n| self.person(n)).collect()
        })
    }

    pub fn daughters(&self, name: &str) -> Vec<&Person> {
        self.records.get(name).map_or_else(Vec::new, |rec| {
            rec.daughters.iter().filter_map(|n| self.person(n)).collect()
        })
    }

    // ------------------------------------------------------------------
    // Internal link plumbing.
    // ------------------------------------------------------------------

    fn child_names(&self, name: &str) -> Vec<String> {
        self.records.get(name).map_or_else(Vec::new, |rec| {
            rec.sons.iter().chain(rec.daughters.iter()).cloned().collect()
        })
    }

    /// Append children onto a parent's lists, routed by each child's
    /// own gender.
    fn append_children(&mut self, parent: &str, children: &[String]) {
        let mut sons = Vec::new();
        let mut daughters = Vec::new();
        for child in children {
            match self.person(child).map(|p| p.gender) {
                Some(Gender::Male) => sons.push(child.clone()),
                Some(Gender::Female) => daughters.push(child.clone()),
                None => {}
            }
        }
        if let Some(rec) = self.records.get_mut(parent) {
            rec.sons.extend(sons);
            rec.daughters.extend(daughters);
        }
    }

    fn push_child(&mut self, parent: &str, role: ChildRole, child: &str) {
        if let Some(rec) = self.records.get_mut(parent) {
            match role {
                ChildRole::Son => rec.sons.push(child.to_string()),
                ChildRole::Daughter => rec.daughters.push(child.to_string()),
            }
        }
    }

    fn set_parent(&mut self, child: &str, role: ParentRole, parent: &str) {
        if let Some(rec) = self.records.get_mut(child) {
            match role {
                ParentRole::Father => rec.father = Some(parent.to_string()),
                ParentRole::Mother => rec.mother = Some(parent.to_string()),
            }
        }
    }
}
