//! Human-readable lattice parameters: `"(a, b, c), (alpha, beta, gamma)"`.

use crate::error::LatticeError;
use crate::interfaces::N_DIM;
use crate::lattice::lattice_types::LatticeParameters;
use crate::Result;

pub fn format_readable(params: &LatticeParameters) -> String {
    params.to_string()
}

/// Strips parentheses and spaces, splits on commas and reads six floats in order.
pub fn parse_readable(readable: &str) -> Result<LatticeParameters> {
    let cleaned: String = readable
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | ' '))
        .collect();

    let values = cleaned
        .split(',')
        .map(|token| token.parse::<f64>().map_err(LatticeError::from))
        .collect::<Result<Vec<f64>>>()?;

    let values: [f64; N_DIM] = values.try_into().map_err(|values: Vec<f64>| {
        LatticeError::Parse(format!(
            "expected {N_DIM} values, found {} in {readable:?}",
            values.len()
        ))
    })?;
    Ok(LatticeParameters::from_array(values))
}
