use alloc::string::{String, ToString};

use offscreen::Geometry;

/// Errors from [`parse_geometry`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseGeometryError {
    #[error("geometry attribute is empty")]
    Empty,
    #[error("invalid number {value:?} at position {index}")]
    InvalidNumber { index: usize, value: String },
    #[error("expected at most 2 values, found {0}")]
    TooManyValues(usize),
}

/// Parses a geometry attribute of the form `"inner_height"` or `"inner_height, margins"`.
///
/// Values are pixels; whitespace around each value is ignored. Missing margins default to `0`.
pub fn parse_geometry(input: &str) -> Result<Geometry, ParseGeometryError> {
    if input.trim().is_empty() {
        return Err(ParseGeometryError::Empty);
    }

    let count = input.split(',').count();
    if count > 2 {
        return Err(ParseGeometryError::TooManyValues(count));
    }

    let mut values = [0.0f64; 2];
    for (index, raw) in input.split(',').enumerate() {
        let raw = raw.trim();
        values[index] = raw
            .parse::<f64>()
            .map_err(|_| ParseGeometryError::InvalidNumber {
                index,
                value: raw.to_string(),
            })?;
    }
    Ok(Geometry::new(values[0], values[1]))
}
