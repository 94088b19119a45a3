#![allow(clippy::unwrap_used)]

mod tests_failures;

use crate::base::QName;
use crate::schema::{SchemaCollection, SchemaBuilder};
use crate::walker::{EventRecorder, SchemaWalker, WalkError, WalkEvent};

const NS: &str = "urn:fleet";

fn q(local: &str) -> QName {
    QName::new(NS, local)
}

fn builder() -> SchemaBuilder {
    SchemaBuilder::new(Some(NS), "fleet.xsd")
}

fn record(schemas: &SchemaCollection, root: &str) -> Result<EventRecorder, WalkError> {
    let mut recorder = EventRecorder::new();
    SchemaWalker::new(schemas).walk_global(&q(root), &mut recorder)?;
    Ok(recorder)
}

/// Entered element local names with their `previously_visited` flag.
fn entered(recorder: &EventRecorder) -> Vec<(String, bool)> {
    recorder
        .events()
        .iter()
        .filter_map(|event| match event {
            WalkEvent::EnterElement {
                name,
                previously_visited,
                ..
            } => Some((name.local.to_string(), *previously_visited)),
            _ => None,
        })
        .collect()
}
