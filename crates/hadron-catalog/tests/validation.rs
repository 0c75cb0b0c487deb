use hadron_catalog::{CatalogDef, SpeciesCatalog};
use hadron_cg::ClebschGordanCache;
use hadron_core::{DecayChannelSource, PdgCode};

fn build(yaml: &str) -> Result<SpeciesCatalog, hadron_core::HadronError> {
    let def = CatalogDef::from_yaml_str(yaml)?;
    SpeciesCatalog::new(def, &ClebschGordanCache::new())
}

#[test]
fn duplicate_species_rejected() {
    let err = build(
        r#"
species:
  - { name: a, pdg: 1, mass: 1.0 }
  - { name: b, pdg: 1, mass: 2.0 }
"#,
    )
    .unwrap_err();
    assert_eq!(err.info().code, "duplicate-species");
}

#[test]
fn unknown_daughter_rejected() {
    let err = build(
        r#"
species:
  - name: r
    pdg: 5
    mass: 1.0
    width: 0.1
    decays:
      - { products: [7, 8], ratio: 1.0 }
"#,
    )
    .unwrap_err();
    assert_eq!(err.info().code, "unknown-daughter");
    assert_eq!(err.info().context.get("daughter").map(String::as_str), Some("7"));
}

#[test]
fn negative_ratio_rejected() {
    let err = build(
        r#"
species:
  - { name: x, pdg: 2, mass: 0.1 }
  - name: r
    pdg: 5
    mass: 1.0
    width: 0.1
    decays:
      - { products: [2, 2], ratio: -0.5 }
"#,
    )
    .unwrap_err();
    assert_eq!(err.info().code, "invalid-species");
}

#[test]
fn isospin_weighting_needs_two_daughters() {
    let err = build(
        r#"
species:
  - { name: x, pdg: 2, mass: 0.1, isospin: 2, isospin3: 0 }
  - name: r
    pdg: 5
    mass: 1.0
    width: 0.1
    decays:
      - { products: [2, 2, 2], ratio: 1.0, isospin_weighted: true }
"#,
    )
    .unwrap_err();
    assert_eq!(err.info().code, "isospin-weight-arity");
}

#[test]
fn charge_violating_weighted_mode_is_closed() {
    let catalog = build(
        r#"
species:
  - { name: x, pdg: 2, mass: 0.1, isospin: 2, isospin3: 2 }
  - name: r
    pdg: 5
    mass: 1.0
    width: 0.1
    isospin: 2
    isospin3: 0
    decays:
      - { products: [2, 2], ratio: 1.0, isospin_weighted: true }
"#,
    )
    .unwrap();
    assert!(catalog
        .partial_widths(PdgCode::new(5), 1.0)
        .unwrap()
        .is_empty());
}

#[test]
fn width_without_modes_is_stable() {
    let catalog = build("species:\n  - { name: s, pdg: 9, mass: 1.0, width: 0.2 }\n").unwrap();
    assert!(catalog.is_stable(PdgCode::new(9)).unwrap());
}

#[test]
fn oversized_isospin_is_rejected() {
    let err = build(
        r#"
species:
  - { name: x, pdg: 2, mass: 0.1, isospin: 66, isospin3: 0 }
  - name: r
    pdg: 5
    mass: 1.0
    width: 0.1
    isospin: 0
    isospin3: 0
    decays:
      - { products: [2, 2], ratio: 1.0, isospin_weighted: true }
"#,
    )
    .unwrap_err();
    assert!(matches!(err, hadron_core::HadronError::Catalog(_)));
    assert_eq!(err.info().code, "spin-out-of-range");
    assert_eq!(err.info().context.get("parent").map(String::as_str), Some("5"));
}
