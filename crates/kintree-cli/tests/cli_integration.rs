//! Integration tests for kintree-cli functionality.
//! Tests the underlying library functions that the CLI commands invoke.

use kintree_core::graph::{ChildRole, FamilyGraph, ParentRole};
use kintree_core::schema;
use kintree_query::lookup::{Relation, find_relative};

fn demo_tree() -> FamilyGraph {
    use ChildRole::{Daughter, Son};
    use ParentRole::Father;

    let mut tree = FamilyGraph::new();
    tree.add_couple("Shan", "Anga");
    tree.add_child(Father, "Shan", Son, "Ish").unwrap();
    tree.add_child(Father, "Shan", Son, "Chit").unwrap();
    tree.add_child(Father, "Shan", Son, "Vich").unwrap();
    tree.add_couple("Vich", "Lika");
    tree.add_child(Father, "Vich", Son, "Vila").unwrap();
    tree.add_couple("Vila", "Jnki");
    tree.add_child(Father, "Vila", Daughter, "Lavnya").unwrap();
    tree.add_couple("Gru", "Lavnya");
    tree
}

#[test]
fn test_query_flow_renders_comma_joined_names() {
    let tree = demo_tree();
    let relation: Relation = "brothers".parse().unwrap();
    assert_eq!(
        find_relative(&tree, "Ish", relation),
        Some("Chit, Vich".to_string())
    );
}

#[test]
fn test_query_flow_rejects_unknown_label() {
    assert!("stepmother".parse::<Relation>().is_err());
}

#[test]
fn test_demo_flow_newborn_reaches_grandmother() {
    let mut tree = demo_tree();
    tree.add_child(ParentRole::Mother, "Lavnya", ChildRole::Daughter, "Vanya")
        .unwrap();

    let grandchildren = find_relative(&tree, "Jnki", Relation::Grandchildren).unwrap();
    assert!(grandchildren.contains("Vanya"));
}

#[test]
fn test_tree_dump_loads_back() {
    let tree = demo_tree();
    let json = schema::to_json(&tree).unwrap();

    // the dumped document drives --tree loading
    let loaded = schema::from_json(&json).unwrap();
    assert_eq!(loaded.len(), tree.len());
    assert_eq!(
        find_relative(&loaded, "Ish", Relation::Brothers),
        Some("Chit, Vich".to_string())
    );
}

#[test]
fn test_tree_dump_is_keyed_by_person_name() {
    let tree = demo_tree();
    let json = schema::to_json(&tree).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.get("Shan").is_some());
    assert_eq!(value["Shan"]["self"]["gender"], "male");
}
