//! Integration tests for saving and loading bases as JSON files

use nmms::{
    BaseError, MaterialBase, OntoBase, PersistentBase, PropositionalBase, RdfsBase, Reasoner,
    Sequent,
};
use tempfile::tempdir;

const NONE: [&str; 0] = [];

#[test]
fn test_propositional_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("base.json");

    let mut base = PropositionalBase::new();
    base.add_atom("r").unwrap();
    base.add_consequence(["p"], ["q"]).unwrap();
    base.add_consequence(["s", "t"], NONE).unwrap();
    base.annotate("p", "it is raining");
    base.to_file(&path).unwrap();

    let loaded = PropositionalBase::from_file(&path).unwrap();
    assert_eq!(loaded.language(), base.language());
    assert_eq!(loaded.consequences(), base.consequences());
    assert_eq!(loaded.annotation("p"), Some("it is raining"));

    let mut reasoner = Reasoner::new(loaded);
    for sequent in base.consequences() {
        assert!(reasoner.derives_sequent(sequent).derivable);
    }
    assert!(reasoner.query(NONE, ["~(s & t)"]));
}

#[test]
fn test_file_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("base.json");

    let mut base = OntoBase::new();
    base.add_atom("Man(socrates)").unwrap();
    base.register_subclass("Man", "Mortal", None);
    base.register_joint_commitment(["A", "B"], "C", Some("both"))
        .unwrap();
    base.to_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["language"], serde_json::json!(["Man(socrates)"]));
    assert_eq!(value["individuals"], serde_json::json!(["socrates"]));

    let schemas = value["onto_schemas"].as_array().unwrap();
    assert_eq!(schemas[0]["type"], "subClassOf");
    assert_eq!(schemas[0]["arg1"], "Man");
    assert!(schemas[0].get("annotation").is_none());
    assert_eq!(schemas[1]["arg1"], serde_json::json!(["A", "B"]));
    assert_eq!(schemas[1]["annotation"], "both");
    assert!(value.get("rdfs_schemas").is_none());
}

#[test]
fn test_structured_round_trip_preserves_schemas() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("onto.json");

    let mut base = OntoBase::new();
    base.add_atom("hasChild(alice,bob)").unwrap();
    base.register_range("hasChild", "Person", Some("children are people"));
    base.register_disjoint("Man", "Woman", None);
    base.to_file(&path).unwrap();

    let loaded = OntoBase::from_file(&path).unwrap();
    assert_eq!(loaded.schemas(), base.schemas());
    assert_eq!(loaded.vocabulary(), base.vocabulary());
    assert!(loaded.is_axiom(&Sequent::new(["hasChild(alice,bob)"], ["Person(bob)"])));
    assert!(loaded.is_axiom(&Sequent::new(["Man(x)", "Woman(x)"], NONE)));
}

#[test]
fn test_rdfs_file_rejects_disjointness() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("onto.json");

    let mut base = OntoBase::new();
    base.register_disjoint("Man", "Woman", None);
    base.to_file(&path).unwrap();

    let err = RdfsBase::from_file(&path).unwrap_err();
    assert!(matches!(err, BaseError::UnsupportedSchema { .. }));
}

#[test]
fn test_rdfs_file_loads_into_onto_base() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rdfs.json");

    let mut base = RdfsBase::new();
    base.register_subclass("Man", "Mortal", None);
    base.to_file(&path).unwrap();

    let loaded = OntoBase::from_file(&path).unwrap();
    assert_eq!(loaded.schemas().len(), 1);
    assert!(loaded.is_axiom(&Sequent::new(["Man(a)"], ["Mortal(a)"])));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = PropositionalBase::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, BaseError::Io(_)));
}

#[test]
fn test_invalid_language_is_rejected_on_load() {
    let doc = r#"{"language": ["p & q"], "consequences": [], "annotations": {}}"#;
    let err = PropositionalBase::from_json_str(doc).unwrap_err();
    assert!(matches!(err, BaseError::NotAtomic { .. }));
}
