mod line;
mod point;
mod polyline;
mod vector;

pub use line::{unit_direction, Line};
pub use point::Point;
pub use polyline::{Polyline, MIN_POINTS};
pub use vector::Vector;

/// Formats coordinates separated by single spaces.
fn join_coords(coords: &[f64]) -> String {
    coords
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
