//! The round processor: one full pass of meetings over a population.

use crate::agent::Agent;
use crate::error::MingleError;
use crate::log::{debug, trace};
use crate::meeting::meet;

/// Runs one round of meetings over `population` and returns the next
/// population listing.
///
/// Bystanders (`Healthy` and `Dead` agents) never meet and pass through
/// unchanged, keeping their relative order. The remaining agents pair off two
/// at a time in listing order and each pair is resolved by
/// [`meet`](crate::meeting::meet); with an odd count, the last agent finds no
/// one to meet and is carried through untouched.
///
/// The output groups bystanders first, then the meeting outcomes in pairing
/// order, then the odd agent out. It has the same length as the input but
/// does not reproduce the input's interleaving.
///
/// # Errors
/// Propagates `MingleError` from the meeting rule. The partition contract
/// keeps `Dead` agents out of meetings, so this does not happen in practice,
/// but a bounds violation is surfaced rather than swallowed.
pub fn process_round(population: &[Agent]) -> Result<Vec<Agent>, MingleError> {
    trace!("processing a round over {} agents", population.len());

    let (active, bystanders): (Vec<&Agent>, Vec<&Agent>) =
        population.iter().partition(|agent| agent.is_active());
    debug!(
        "{} bystanders, {} agents meeting",
        bystanders.len(),
        active.len()
    );

    let mut next_round: Vec<Agent> = Vec::with_capacity(population.len());
    next_round.extend(bystanders.into_iter().cloned());

    let mut pairs = active.chunks_exact(2);
    for pair in pairs.by_ref() {
        let (first, second) = meet(pair[0], pair[1])?;
        next_round.push(first);
        next_round.push(second);
    }
    if let [odd_one_out] = pairs.remainder() {
        trace!("{odd_one_out} found no one to meet");
        next_round.push((*odd_one_out).clone());
    }

    debug_assert_eq!(next_round.len(), population.len());
    Ok(next_round)
}
