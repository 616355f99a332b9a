use kintree_core::graph::*;
use kintree_core::schema;

fn small_tree() -> FamilyGraph {
    let mut graph = FamilyGraph::new();
    graph.add_couple("Shan", "Anga");
    graph
        .add_child(ParentRole::Father, "Shan", ChildRole::Son, "Chit")
        .unwrap();
    graph
        .add_child(ParentRole::Father, "Shan", ChildRole::Daughter, "Satya")
        .unwrap();
    graph
}

#[test]
fn test_roundtrip_preserves_names_and_genders() {
    let graph = small_tree();
    let json = schema::to_json(&graph).unwrap();
    let loaded = schema::from_json(&json).unwrap();

    assert_eq!(loaded.len(), graph.len());
    for person in graph.persons() {
        let back = loaded.person(&person.name).unwrap();
        assert_eq!(back.gender, person.gender);
    }
}

#[test]
fn test_roundtrip_preserves_relation_links() {
    let graph = small_tree();
    let loaded = schema::from_json(&schema::to_json(&graph).unwrap()).unwrap();

    assert_eq!(loaded.father("Chit").unwrap().name, "Shan");
    assert_eq!(loaded.mother("Satya").unwrap().name, "Anga");
    assert_eq!(loaded.spouse("Shan").unwrap().name, "Anga");
    assert_eq!(loaded.sons("Anga").len(), 1);
    assert_eq!(loaded.daughters("Shan").len(), 1);
}

#[test]
fn test_absent_fields_are_omitted() {
    let mut graph = FamilyGraph::new();
    graph.get_or_create("Ish", Gender::Male);
    let json = schema::to_json(&graph).unwrap();

    assert!(json.contains("\"self\""));
    assert!(!json.contains("\"father\""));
    assert!(!json.contains("\"sons\""));
}

#[test]
fn test_references_are_flattened_to_name_and_gender() {
    let graph = small_tree();
    let json = schema::to_json(&graph).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["Chit"]["father"]["name"], "Shan");
    assert_eq!(value["Chit"]["father"]["gender"], "male");
    assert_eq!(value["Shan"]["wife"]["name"], "Anga");
    assert_eq!(value["Shan"]["wife"]["gender"], "female");
    assert_eq!(value["Shan"]["sons"][0]["name"], "Chit");
}

#[test]
fn test_from_json_rejects_malformed_input() {
    assert!(schema::from_json("not json").is_err());
}
