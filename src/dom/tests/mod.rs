#![allow(clippy::unwrap_used)]


use crate::base::Location;

fn at(line: u32, column: u32) -> Location {
    Location::new(line, column, "memo.xml")
}
