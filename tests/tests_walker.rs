#![allow(clippy::unwrap_used)]

#[path = "helpers/mod.rs"]
mod helpers;

use helpers::schema_fixtures::{FLEET, fleet};
use rstest::rstest;
use xmlschema_walker::schema::{AttributeUse, ElementDecl};
use xmlschema_walker::walker::{
    EventRecorder, SchemaVisitor, SchemaWalker, TypeInfo, VisitResult, WalkEvent, WalkerConfig,
};

fn walk_fleet() -> EventRecorder {
    let mut recorder = EventRecorder::new();
    SchemaWalker::new(&FLEET)
        .walk_global(&fleet("fleet"), &mut recorder)
        .unwrap();
    recorder
}

/// Counts element entries without keeping any events.
#[derive(Debug, Default)]
struct ElementCounter {
    entered: usize,
    recursive: usize,
}

impl SchemaVisitor for ElementCounter {
    fn on_enter_element(
        &mut self,
        _element: &ElementDecl,
        _type_info: &TypeInfo,
        previously_visited: bool,
    ) -> VisitResult {
        self.entered += 1;
        if previously_visited {
            self.recursive += 1;
        }
        Ok(())
    }
}

// ============================================================================
// TRAVERSAL
// ============================================================================

#[test]
fn test_fleet_root_enters_21_elements() {
    let recorder = walk_fleet();
    assert_eq!(recorder.entered_elements(), 21);

    let names: Vec<&str> = recorder
        .element_names()
        .into_iter()
        .map(|name| name.local.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "fleet", "owner", "name", "address", "street", "city", "zip", "car", "plate",
            "service", "part", "partName", "part", "seats", "truck", "plate", "service", "part",
            "partName", "part", "axles",
        ]
    );
}

#[test]
fn test_enter_and_exit_calls_balance() {
    let recorder = walk_fleet();
    let exits = recorder
        .events()
        .iter()
        .filter(|event| matches!(event, WalkEvent::ExitElement { .. }))
        .count();
    assert_eq!(exits, recorder.entered_elements());

    let opened = recorder
        .events()
        .iter()
        .filter(|event| matches!(event, WalkEvent::EnterGroup { .. }))
        .count();
    let closed = recorder
        .events()
        .iter()
        .filter(|event| matches!(event, WalkEvent::ExitGroup { .. }))
        .count();
    assert_eq!(opened, closed);
}

#[test]
fn test_repeated_walks_are_identical() {
    let walker = SchemaWalker::new(&FLEET);
    let mut first = EventRecorder::new();
    let mut second = EventRecorder::new();
    walker.walk_global(&fleet("fleet"), &mut first).unwrap();
    walker.walk_global(&fleet("fleet"), &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_recursive_part_is_flagged_once_per_branch() {
    let recorder = walk_fleet();
    let flags: Vec<bool> = recorder
        .events()
        .iter()
        .filter_map(|event| match event {
            WalkEvent::EnterElement {
                name,
                previously_visited,
                ..
            } if name.local.as_str() == "part" => Some(*previously_visited),
            _ => None,
        })
        .collect();
    assert_eq!(flags, [false, true, false, true]);
}

#[test]
fn test_abstract_head_brackets_both_members() {
    let recorder = walk_fleet();
    let events = recorder.events();
    let enter = events
        .iter()
        .position(|e| *e == WalkEvent::EnterSubstitutionGroup { head: fleet("vehicle") })
        .unwrap();
    let exit = events
        .iter()
        .position(|e| *e == WalkEvent::ExitSubstitutionGroup { head: fleet("vehicle") })
        .unwrap();

    let members: Vec<&str> = events[enter..exit]
        .iter()
        .filter_map(|event| match event {
            WalkEvent::EnterElement { name, .. } if matches!(name.local.as_str(), "car" | "truck") => {
                Some(name.local.as_str())
            }
            WalkEvent::EnterElement { name, .. } if name.local.as_str() == "vehicle" => {
                panic!("Abstract head should not be entered")
            }
            _ => None,
        })
        .collect();
    assert_eq!(members, ["car", "truck"]);
}

#[test]
fn test_required_attributes_reach_visitor() {
    let recorder = walk_fleet();
    let car_attributes: Vec<(&str, AttributeUse)> = recorder
        .events()
        .iter()
        .filter_map(|event| match event {
            WalkEvent::Attribute { element, attribute } if element.local.as_str() == "car" => Some((
                attribute.attribute.name.local.as_str(),
                attribute.attribute.usage,
            )),
            _ => None,
        })
        .collect();
    assert_eq!(car_attributes, [("vin", AttributeUse::Required)]);

    let wildcards = recorder
        .events()
        .iter()
        .filter(|event| matches!(event, WalkEvent::AnyAttribute { element, .. } if element.local.as_str() == "part"))
        .count();
    assert_eq!(wildcards, 2);
}

// ============================================================================
// PROVENANCE
// ============================================================================

#[test]
fn test_every_entered_element_carries_a_location() {
    let recorder = walk_fleet();
    for event in recorder.events() {
        let WalkEvent::EnterElement { name, location, .. } = event else {
            continue;
        };
        let location = location
            .as_ref()
            .unwrap_or_else(|| panic!("{name} has no location"));
        assert!(location.line() >= 1, "{name} at {location}");
        assert!(location.column() >= 1, "{name} at {location}");
    }
}

#[rstest]
#[case::common_global("owner", "common.xsd", 16, 4)]
#[case::common_local("street", "common.xsd", 5, 8)]
#[case::fleet_global("fleet", "fleet.xsd", 50, 4)]
#[case::fleet_local("seats", "fleet.xsd", 27, 12)]
#[case::member("truck", "fleet.xsd", 41, 4)]
fn test_location_names_declaring_document(
    #[case] local: &str,
    #[case] system_id: &str,
    #[case] line: u32,
    #[case] column: u32,
) {
    let recorder = walk_fleet();
    let location = recorder
        .events()
        .iter()
        .find_map(|event| match event {
            WalkEvent::EnterElement { name, location, .. } if name.local.as_str() == local => {
                location.clone()
            }
            _ => None,
        })
        .unwrap();
    assert_eq!(location.system_id(), system_id);
    assert_eq!((location.line(), location.column()), (line, column));
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_disabled_expansion_enters_head_only() {
    let walker = SchemaWalker::new(&FLEET).with_config(WalkerConfig {
        expand_substitution_groups: false,
        ..WalkerConfig::default()
    });
    let mut counter = ElementCounter::default();
    walker.walk_global(&fleet("fleet"), &mut counter).unwrap();

    // fleet, owner subtree (6), vehicle, plate, service, part, partName, part
    assert_eq!(counter.entered, 13);
    assert_eq!(counter.recursive, 1);
}

// ============================================================================
// PARALLEL WALKS
// ============================================================================

#[test]
fn test_walk_roots_par_keeps_root_order() {
    let roots = [fleet("fleet"), fleet("owner"), fleet("part"), fleet("missing")];
    let results =
        SchemaWalker::new(&FLEET).walk_roots_par(&roots, |_| ElementCounter::default());

    assert_eq!(results.len(), 4);
    let counts: Vec<usize> = results[..3]
        .iter()
        .map(|result| result.as_ref().unwrap().entered)
        .collect();
    assert_eq!(counts, [21, 6, 3]);
    assert!(results[3].as_ref().unwrap_err().is_resolution_error());
}

#[test]
fn test_walk_globals_par_matches_sequential_walks() {
    let walker = SchemaWalker::new(&FLEET);
    let results = walker.walk_globals_par(|_| EventRecorder::new());

    let names: Vec<&str> = results.iter().map(|(name, _)| name.local.as_str()).collect();
    assert_eq!(names, ["owner", "part", "vehicle", "car", "truck", "fleet"]);

    for (name, result) in &results {
        let mut sequential = EventRecorder::new();
        walker.walk_global(name, &mut sequential).unwrap();
        assert_eq!(result.as_ref().unwrap(), &sequential, "walk of {name}");
    }

    let counts: Vec<usize> = results
        .iter()
        .map(|(_, result)| result.as_ref().unwrap().entered_elements())
        .collect();
    assert_eq!(counts, [6, 3, 14, 7, 7, 21]);
}
