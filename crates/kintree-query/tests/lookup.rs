use kintree_core::graph::{ChildRole, FamilyGraph, Gender, ParentRole};
use kintree_query::lookup::{Relation, find_relative};

fn small_tree() -> FamilyGraph {
    let mut tree = FamilyGraph::new();
    tree.add_couple("Shan", "Anga");
    tree.add_child(ParentRole::Father, "Shan", ChildRole::Son, "Ish")
        .unwrap();
    tree.add_child(ParentRole::Father, "Shan", ChildRole::Son, "Chit")
        .unwrap();
    tree.add_child(ParentRole::Father, "Shan", ChildRole::Son, "Vich")
        .unwrap();
    tree.add_child(ParentRole::Father, "Shan", ChildRole::Daughter, "Satya")
        .unwrap();
    tree
}

#[test]
fn test_every_label_parses_back_to_itself() {
    for relation in Relation::ALL {
        let parsed: Relation = relation.label().parse().unwrap();
        assert_eq!(parsed, relation);
    }
}

#[test]
fn test_unknown_label_is_a_parse_error() {
    assert!("uncle".parse::<Relation>().is_err());
    assert!("".parse::<Relation>().is_err());
    // labels are exact, not case-folded
    assert!("Mother".parse::<Relation>().is_err());
}

#[test]
fn test_single_valued_relations_render_as_name() {
    let tree = small_tree();
    assert_eq!(
        find_relative(&tree, "Ish", Relation::Mother),
        Some("Anga".to_string())
    );
    assert_eq!(
        find_relative(&tree, "Satya", Relation::Father),
        Some("Shan".to_string())
    );
    // absent single-valued relation: no result
    assert_eq!(find_relative(&tree, "Shan", Relation::Father), None);
}

#[test]
fn test_multi_valued_relations_render_comma_joined() {
    let tree = small_tree();
    assert_eq!(
        find_relative(&tree, "Ish", Relation::Brothers),
        Some("Chit, Vich".to_string())
    );
    assert_eq!(
        find_relative(&tree, "Shan", Relation::Children),
        Some("Ish, Chit, Vich, Satya".to_string())
    );
}

#[test]
fn test_empty_multi_valued_relation_renders_empty_string() {
    let tree = small_tree();
    assert_eq!(
        find_relative(&tree, "Ish", Relation::Grandsons),
        Some(String::new())
    );
}

#[test]
fn test_unknown_person_yields_nothing() {
    let tree = small_tree();
    assert_eq!(find_relative(&tree, "Ghost", Relation::Brothers), None);
}

#[test]
fn test_son_and_daughter_labels_split_by_gender() {
    let mut tree = small_tree();
    tree.get_or_create("Lone", Gender::Male);

    assert_eq!(
        find_relative(&tree, "Shan", Relation::Son),
        Some("Ish, Chit, Vich".to_string())
    );
    assert_eq!(
        find_relative(&tree, "Shan", Relation::Daughter),
        Some("Satya".to_string())
    );
    assert_eq!(
        find_relative(&tree, "Lone", Relation::Son),
        Some(String::new())
    );
}

#[test]
fn test_display_matches_label() {
    assert_eq!(Relation::MaternalUncle.to_string(), "maternal-uncle");
    assert_eq!(Relation::BrotherInLaw.to_string(), "brother-in-law");
}
