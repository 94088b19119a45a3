use rstest::rstest;

use super::{builder, q, record};
use crate::base::QName;
use crate::schema::{
    AttributeGroup, AttributeItem, AttributeUse, ComplexType, ElementDecl, Particle,
    SchemaCollection, TypeRef,
};
use crate::walker::{DEFAULT_MAX_DEPTH, EventRecorder, SchemaWalker, WalkError, WalkerConfig};

#[test]
fn test_unknown_root_is_unresolved() {
    let schemas = builder().build().unwrap();
    let error = record(&schemas, "missing").unwrap_err();
    assert_eq!(
        error,
        WalkError::Unresolved {
            kind: "element",
            name: "{urn:fleet}missing".to_string(),
            context: "walk root".to_string(),
        }
    );
}

#[test]
fn test_unknown_element_type_names_the_element() {
    let mut b = builder();
    b.element(ElementDecl::new(q("engine")).with_type(q("EngineType")));
    let schemas = b.build().unwrap();

    let error = record(&schemas, "engine").unwrap_err();
    assert_eq!(
        error,
        WalkError::Unresolved {
            kind: "type",
            name: "{urn:fleet}EngineType".to_string(),
            context: "element {urn:fleet}engine".to_string(),
        }
    );
    assert!(error.is_resolution_error());
}

#[rstest]
#[case(Particle::element_ref(q("wheel")), "element")]
#[case(Particle::group_ref(q("parts")), "group")]
fn test_unknown_particle_reference(#[case] particle: Particle, #[case] kind: &str) {
    let mut b = builder();
    let car = b.anonymous_type(ComplexType::new().with_particle(Particle::sequence(vec![particle])));
    b.element(ElementDecl::new(q("car")).with_type(car));
    let schemas = b.build().unwrap();

    match record(&schemas, "car").unwrap_err() {
        WalkError::Unresolved {
            kind: found,
            context,
            ..
        } => {
            assert_eq!(found, kind);
            assert_eq!(context, "content of element {urn:fleet}car");
        }
        other => panic!("Expected unresolved reference, got {other:?}"),
    }
}

#[test]
fn test_unknown_type_in_nested_element_stops_walk() {
    let mut b = builder();
    let bad = b.local_element(ElementDecl::new(q("bad")).with_type(q("Nope")));
    let good = b.local_element(ElementDecl::new(q("good")).with_type(TypeRef::builtin("string")));
    let root = b.anonymous_type(ComplexType::new().with_particle(Particle::sequence(vec![
        Particle::element(good),
        Particle::element(bad),
    ])));
    b.element(ElementDecl::new(q("root")).with_type(root));
    let schemas = b.build().unwrap();

    let mut recorder = EventRecorder::new();
    let result = SchemaWalker::new(&schemas).walk_global(&q("root"), &mut recorder);
    assert!(matches!(result, Err(WalkError::Unresolved { kind: "type", .. })));
    assert_eq!(recorder.entered_elements(), 2);
}

#[test]
fn test_unknown_attribute_ref() {
    let mut b = builder();
    let car = b.anonymous_type(ComplexType::new().with_attribute(AttributeItem::Ref {
        name: q("vin"),
        usage: AttributeUse::Required,
    }));
    b.element(ElementDecl::new(q("car")).with_type(car));
    let schemas = b.build().unwrap();

    assert!(matches!(
        record(&schemas, "car"),
        Err(WalkError::Unresolved {
            kind: "attribute",
            ..
        })
    ));
}

#[test]
fn test_model_group_including_itself() {
    let mut b = builder();
    b.model_group(
        q("loop"),
        crate::schema::ModelGroup::new(
            crate::schema::Compositor::Sequence,
            vec![Particle::group_ref(q("loop"))],
        ),
    );
    let root = b.anonymous_type(ComplexType::new().with_particle(Particle::group_ref(q("loop"))));
    b.element(ElementDecl::new(q("root")).with_type(root));
    let schemas = b.build().unwrap();

    assert_eq!(
        record(&schemas, "root").unwrap_err(),
        WalkError::GroupCycle {
            kind: "group",
            name: q("loop"),
        }
    );
}

#[test]
fn test_model_group_reused_below_an_element_is_fine() {
    let mut b = builder();
    b.model_group(
        q("tree"),
        crate::schema::ModelGroup::new(
            crate::schema::Compositor::Sequence,
            vec![Particle::element_ref(q("branch"))],
        ),
    );
    let branch = b.anonymous_type(ComplexType::new().with_particle(Particle::group_ref(q("tree"))));
    b.element(ElementDecl::new(q("branch")).with_type(branch));
    let schemas = b.build().unwrap();

    let recorder = record(&schemas, "branch").unwrap();
    assert_eq!(recorder.entered_elements(), 2);
}

#[test]
fn test_attribute_group_including_itself() {
    let mut b = builder();
    b.attribute_group(AttributeGroup {
        name: q("common"),
        attributes: vec![AttributeItem::Group(q("common"))],
        any_attribute: None,
    });
    let root = b.anonymous_type(ComplexType::new().with_attribute(AttributeItem::Group(q("common"))));
    b.element(ElementDecl::new(q("root")).with_type(root));
    let schemas = b.build().unwrap();

    assert_eq!(
        record(&schemas, "root").unwrap_err(),
        WalkError::GroupCycle {
            kind: "attributeGroup",
            name: q("common"),
        }
    );
}

#[test]
fn test_derivation_cycle_is_an_error() {
    let mut b = builder();
    b.complex_type(q("A"), ComplexType::new().extending(q("B")));
    b.complex_type(q("B"), ComplexType::new().extending(q("A")));
    b.element(ElementDecl::new(q("root")).with_type(q("A")));
    let schemas = b.build().unwrap();

    assert!(matches!(
        record(&schemas, "root"),
        Err(WalkError::DerivationCycle { .. })
    ));
}

#[test]
fn test_depth_limit() {
    let mut b = builder();
    let leaf = b.local_element(ElementDecl::new(q("c")).with_type(TypeRef::builtin("string")));
    let mut next = leaf;
    for name in ["b", "a"] {
        let ty = b.anonymous_type(
            ComplexType::new().with_particle(Particle::sequence(vec![Particle::element(next)])),
        );
        next = b.local_element(ElementDecl::new(q(name)).with_type(ty));
    }
    let root = b.anonymous_type(
        ComplexType::new().with_particle(Particle::sequence(vec![Particle::element(next)])),
    );
    b.element(ElementDecl::new(q("root")).with_type(root));
    let schemas = b.build().unwrap();

    let shallow = WalkerConfig {
        max_depth: 2,
        ..WalkerConfig::default()
    };
    let mut recorder = EventRecorder::new();
    let error = SchemaWalker::new(&schemas)
        .with_config(shallow)
        .walk_global(&q("root"), &mut recorder)
        .unwrap_err();
    assert_eq!(
        error,
        WalkError::DepthExceeded {
            limit: 2,
            element: q("b"),
        }
    );

    let mut walker = SchemaWalker::new(&schemas);
    walker.config_mut().max_depth = 3;
    let mut recorder = EventRecorder::new();
    walker.walk_global(&q("root"), &mut recorder).unwrap();
    assert_eq!(recorder.entered_elements(), 4);
}

/// Global elements `e0 .. e{len-1}`, each containing the next through a
/// `sequence[choice[ref]]`; the last one has empty complex content.
fn chain(len: usize) -> SchemaCollection {
    let mut b = builder();
    for index in 0..len {
        let content = if index + 1 < len {
            ComplexType::new().with_particle(Particle::sequence(vec![Particle::choice(vec![
                Particle::element_ref(q(&format!("e{}", index + 1))),
            ])]))
        } else {
            ComplexType::new()
        };
        let ty = b.anonymous_type(content);
        b.element(ElementDecl::new(q(&format!("e{index}"))).with_type(ty));
    }
    b.build().unwrap()
}

#[test]
fn test_default_depth_limit_allows_full_depth() {
    let schemas = chain(DEFAULT_MAX_DEPTH);
    let recorder = record(&schemas, "e0").unwrap();
    assert_eq!(recorder.entered_elements(), DEFAULT_MAX_DEPTH);
}

#[test]
fn test_default_depth_limit_reports_error_instead_of_overflowing() {
    let schemas = chain(DEFAULT_MAX_DEPTH + 1);
    let last = q(&format!("e{DEFAULT_MAX_DEPTH}"));

    assert_eq!(
        record(&schemas, "e0").unwrap_err(),
        WalkError::DepthExceeded {
            limit: DEFAULT_MAX_DEPTH,
            element: last.clone(),
        }
    );

    let results = SchemaWalker::new(&schemas)
        .walk_roots_par(&[q("e0"), q("e1")], |_: &QName| EventRecorder::new());
    assert_eq!(
        results[0].as_ref().unwrap_err(),
        &WalkError::DepthExceeded {
            limit: DEFAULT_MAX_DEPTH,
            element: last,
        }
    );
    assert_eq!(
        results[1].as_ref().unwrap().entered_elements(),
        DEFAULT_MAX_DEPTH
    );
}
