//! Input parsing and random input generation.
//!
//! The 2..=20 element bounds are a visualization constraint, not an engine
//! one: the trace engine handles any finite input, but step-by-step playback
//! of more than 20 elements stops being readable.

use viz_core::rng::{UniformSource, VizRng};
use viz_core::types::InputError;

/// Minimum number of input values the visualization supports.
pub const MIN_ELEMENTS: usize = 2;

/// Maximum number of input values the visualization supports.
pub const MAX_ELEMENTS: usize = 20;

/// Parses a comma-separated number list.
///
/// Tokens are trimmed and blank tokens are skipped, so `"3, 1,, 2"` parses
/// as `[3.0, 1.0, 2.0]`.
///
/// # Errors
///
/// Returns `InputError` for malformed literals, non-finite values, and
/// element counts outside `[2, 20]`.
pub fn parse_number_list(input: &str) -> Result<Vec<f64>, InputError> {
    let mut values = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| InputError::MalformedNumber {
            token: token.to_string(),
        })?;
        if !value.is_finite() {
            return Err(InputError::NonFiniteValue {
                index: values.len(),
                value,
            });
        }
        values.push(value);
    }

    if values.len() < MIN_ELEMENTS {
        return Err(InputError::TooFewElements {
            got: values.len(),
            need: MIN_ELEMENTS,
        });
    }
    if values.len() > MAX_ELEMENTS {
        return Err(InputError::TooManyElements {
            got: values.len(),
            limit: MAX_ELEMENTS,
        });
    }
    Ok(values)
}

/// Generates a random input: integers in `[0, 100)`, sized 5 to 14 unless
/// an explicit size is given.
///
/// # Errors
///
/// Returns `InputError` if an explicit size falls outside `[2, 20]`.
pub fn random_input(size: Option<usize>) -> Result<Vec<f64>, InputError> {
    let mut rng = VizRng::from_entropy();

    let size = match size {
        Some(n) if n < MIN_ELEMENTS => {
            return Err(InputError::TooFewElements {
                got: n,
                need: MIN_ELEMENTS,
            })
        }
        Some(n) if n > MAX_ELEMENTS => {
            return Err(InputError::TooManyElements {
                got: n,
                limit: MAX_ELEMENTS,
            })
        }
        Some(n) => n,
        None => rng.pick_index(5, 14),
    };

    Ok((0..size)
        .map(|_| (rng.next_uniform() * 100.0).floor())
        .collect())
}
