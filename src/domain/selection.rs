use super::ports::RandomSource;
use crate::error::{RentalError, Result};

/// Picks a uniformly distributed position in `items`.
///
/// The result is always a valid index, i.e. in `0..items.len()`. An empty
/// slice has no valid position and is rejected.
pub fn random_position<T>(items: &[T], random: &dyn RandomSource) -> Result<usize> {
    if items.is_empty() {
        return Err(RentalError::InvalidArgument(
            "cannot pick a position from an empty sequence".to_string(),
        ));
    }
    let position = random.next_index(items.len());
    if position >= items.len() {
        return Err(RentalError::InvalidArgument(format!(
            "random source returned position {position} for a sequence of length {}",
            items.len()
        )));
    }
    Ok(position)
}
