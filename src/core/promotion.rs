//! Identity promotion simulation
//!
//! Models an upstream system that issues match keys to participants it
//! previously could not match, while still sending a temporary-form
//! participant id. The registration API then has to reconcile those records
//! on the secondary key (first name, last name, email) instead of the id.

use crate::core::models::Participant;
use crate::core::models::identity::{promoted_match_key, promoted_participant_id};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Assign match keys to up to `count` records that have none.
///
/// Records are drawn uniformly without replacement from those currently
/// lacking a key; asking for more than are eligible promotes all of them.
/// Returns how many records were promoted.
pub fn promote_match_keys<R: Rng + ?Sized>(
    participants: &mut [Participant],
    count: usize,
    rng: &mut R,
) -> usize {
    let mut eligible: Vec<usize> = participants
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.has_match_key())
        .map(|(position, _)| position)
        .collect();

    let take = count.min(eligible.len());
    if take < count {
        debug!(
            requested = count,
            eligible = eligible.len(),
            "Fewer records eligible for promotion than requested"
        );
    }
    if take == 0 {
        return 0;
    }

    let (chosen, _) = eligible.partial_shuffle(rng, take);
    for &position in chosen.iter() {
        promote(&mut participants[position], position);
    }

    take
}

fn promote(participant: &mut Participant, position: usize) {
    let mut new_id = promoted_participant_id(position);
    // The new id must differ from the old one even if the input already used it
    if new_id == participant.participant_id {
        new_id.push_str("-b");
    }
    debug!(
        from = %participant.participant_id,
        to = %new_id,
        "Promoting participant"
    );
    participant.match_key = Some(promoted_match_key(position));
    participant.participant_id = new_id;
}
