//! Integration tests for the ontology dialects and their schemas

use nmms::{BaseError, OntoBase, RdfsBase, Reasoner, Schema, SchemaKind};

const NONE: [&str; 0] = [];

fn rdfs_base() -> RdfsBase {
    let mut base = RdfsBase::new();
    base.add_atom("Man(socrates)").unwrap();
    base.add_atom("hasChild(alice,bob)").unwrap();
    base.register_subclass("Man", "Mortal", Some("all men are mortal"));
    base.register_subclass("Mortal", "Physical", None);
    base.register_range("hasChild", "Person", None);
    base.register_domain("hasChild", "Parent", None);
    base.register_subproperty("hasChild", "hasDescendant", None);
    base
}

#[test]
fn test_subclass_instances() {
    let mut reasoner = Reasoner::new(rdfs_base());
    assert!(reasoner.query(["Man(socrates)"], ["Mortal(socrates)"]));
    assert!(reasoner.query(["Man(plato)"], ["Mortal(plato)"]));
    assert!(!reasoner.query(["Man(socrates)"], ["Mortal(plato)"]));
    assert!(!reasoner.query(["Mortal(socrates)"], ["Man(socrates)"]));
}

#[test]
fn test_schemas_do_not_chain() {
    let mut reasoner = Reasoner::new(rdfs_base());
    assert!(reasoner.query(["Mortal(socrates)"], ["Physical(socrates)"]));
    assert!(!reasoner.query(["Man(socrates)"], ["Physical(socrates)"]));
}

#[test]
fn test_extra_premise_defeats_schema() {
    let mut reasoner = Reasoner::new(rdfs_base());
    assert!(!reasoner.query(
        ["Man(socrates)", "Immortal(socrates)"],
        ["Mortal(socrates)"]
    ));
    assert!(!reasoner.query(
        ["Man(socrates)"],
        ["Mortal(socrates)", "Immortal(socrates)"]
    ));
}

#[test]
fn test_role_schemas() {
    let mut reasoner = Reasoner::new(rdfs_base());
    assert!(reasoner.query(["hasChild(alice,bob)"], ["Person(bob)"]));
    assert!(reasoner.query(["hasChild(alice,bob)"], ["Parent(alice)"]));
    assert!(reasoner.query(["hasChild(alice, bob)"], ["hasDescendant(alice,bob)"]));
    assert!(!reasoner.query(["hasChild(alice,bob)"], ["Person(alice)"]));
    assert!(!reasoner.query(["hasChild(alice,bob)"], ["hasDescendant(bob,alice)"]));
}

#[test]
fn test_schemas_compose_with_connectives() {
    let mut reasoner = Reasoner::new(rdfs_base());
    assert!(reasoner.query(NONE, ["Man(socrates) -> Mortal(socrates)"]));
    assert!(reasoner.query(["~Mortal(socrates)"], ["~Man(socrates)"]));
    assert!(!reasoner.query(NONE, ["Man(socrates) -> Physical(socrates)"]));
}

#[test]
fn test_rdfs_rejects_onto_schemas() {
    let mut base = RdfsBase::new();
    let err = base
        .register(
            Schema::binary(SchemaKind::DisjointWith, "Man", "Woman").unwrap(),
            None,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        BaseError::UnsupportedSchema {
            kind: SchemaKind::DisjointWith,
            ..
        }
    ));
    assert!(base.schemas().is_empty());
}

#[test]
fn test_structured_bases_reject_bare_propositions() {
    let mut base = OntoBase::new();
    assert!(matches!(
        base.add_atom("p"),
        Err(BaseError::NotAtomic { .. })
    ));
    assert!(base.add_consequence(["Man(s)"], ["p"]).is_err());
    assert!(base.consequences().is_empty());
    assert!(base.language().is_empty());
}

#[test]
fn test_disjointness() {
    let mut base = OntoBase::new();
    base.register_disjoint("Man", "Woman", None);
    base.register_disjoint_properties("hasParent", "hasChild", None);
    let mut reasoner = Reasoner::new(base);

    assert!(reasoner.query(["Woman(s)", "Man(s)"], NONE));
    assert!(!reasoner.query(["Man(s)", "Woman(t)"], NONE));
    assert!(reasoner.query(NONE, ["~(Man(s) & Woman(s))"]));
    assert!(reasoner.query(["hasParent(a,b)", "hasChild(a,b)"], NONE));
    assert!(!reasoner.query(["hasParent(a,b)", "hasChild(b,a)"], NONE));
}

#[test]
fn test_joint_commitment() {
    let mut base = OntoBase::new();
    base.register_joint_commitment(["ChestPain", "ElevatedTroponin"], "MI", None)
        .unwrap();
    let mut reasoner = Reasoner::new(base);

    assert!(reasoner.query(["ChestPain(p)", "ElevatedTroponin(p)"], ["MI(p)"]));
    assert!(!reasoner.query(["ChestPain(p)"], ["MI(p)"]));
    assert!(!reasoner.query(["ChestPain(p)", "ElevatedTroponin(q)"], ["MI(p)"]));
    assert!(!reasoner.query(
        ["ChestPain(p)", "ElevatedTroponin(p)", "Fever(p)"],
        ["MI(p)"]
    ));
    assert!(reasoner.query(["ChestPain(p)"], ["ElevatedTroponin(p) -> MI(p)"]));
}

#[test]
fn test_joint_commitment_needs_two_concepts() {
    let mut base = OntoBase::new();
    let err = base
        .register_joint_commitment(["ChestPain", "ChestPain"], "MI", None)
        .unwrap_err();
    assert!(matches!(err, BaseError::JointCommitmentArity { count: 1 }));
    assert!(base.schemas().is_empty());
}

#[test]
fn test_explicit_consequences_alongside_schemas() {
    let mut base = OntoBase::new();
    base.add_consequence(["Penguin(tweety)"], ["Bird(tweety)"]).unwrap();
    base.register_subclass("Bird", "Flier", None);
    assert!(base.individuals().contains("tweety"));
    assert!(base.concepts().contains("Penguin"));

    let mut reasoner = Reasoner::new(base);
    assert!(reasoner.query(["Penguin(tweety)"], ["Bird(tweety)"]));
    assert!(reasoner.query(["Bird(tweety)"], ["Flier(tweety)"]));
    assert!(!reasoner.query(["Penguin(tweety)"], ["Flier(tweety)"]));
}
