//! Built-in sample family tree used when no document is supplied.

use kintree_core::error::GraphError;
use kintree_core::graph::ChildRole::{Daughter, Son};
use kintree_core::graph::FamilyGraph;
use kintree_core::graph::ParentRole::Father;

/// Build the canonical four-generation tree (Shan/Anga lineage).
pub fn sample_tree() -> Result<FamilyGraph, GraphError> {
    let mut tree = FamilyGraph::new();

    // First generation
    tree.add_couple("Shan", "Anga");

    // Second generation
    tree.add_child(Father, "Shan", Son, "Ish")?;
    tree.add_child(Father, "Shan", Son, "Chit")?;
    tree.add_child(Father, "Shan", Son, "Vich")?;
    tree.add_child(Father, "Shan", Daughter, "Satya")?;

    tree.add_couple("Chit", "Ambi");
    tree.add_couple("Vich", "Lika");
    tree.add_couple("Vyan", "Satya");

    // Third generation
    tree.add_child(Father, "Chit", Son, "Drita")?;
    tree.add_child(Father, "Chit", Son, "Vrita")?;
    tree.add_child(Father, "Vich", Son, "Vila")?;
    tree.add_child(Father, "Vich", Daughter, "Chika")?;
    tree.add_child(Father, "Satya", Daughter, "Satvy")?;
    tree.add_child(Father, "Satya", Son, "Savya")?;
    tree.add_child(Father, "Satya", Son, "Sayaan")?;

    tree.add_couple("Drita", "Jaya");
    tree.add_couple("Vila", "Jnki");
    tree.add_couple("Kpilla", "Chika");
    tree.add_couple("Asva", "Satvy");
    tree.add_couple("Savya", "Krpi");
    tree.add_couple("Sayaan", "Mina");

    // Fourth generation
    tree.add_child(Father, "Drita", Son, "Jata")?;
    tree.add_child(Father, "Drita", Daughter, "Driya")?;
    tree.add_child(Father, "Vila", Daughter, "Lavnya")?;
    tree.add_child(Father, "Savya", Son, "Kriya")?;
    tree.add_child(Father, "Sayaan", Son, "Misa")?;

    tree.add_couple("Mnu", "Driya");
    tree.add_couple("Gru", "Lavnya");

    Ok(tree)
}
