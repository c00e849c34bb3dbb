//! Identifier forms for participants
//!
//! A participant is keyed either by a durable id derived from an issued match
//! key (`mid-100042` for `MID-100042`) or by a temporary id generated before
//! any match key is known. Promotion assigns a `MID-PROMO-*` key but keeps a
//! temporary-form id, which is what forces reconciliation on name and email.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Offset added to a record position when deriving numeric identifiers
pub const ID_OFFSET: usize = 100_000;

const DURABLE_ID_PREFIX: &str = "mid-";
const TEMP_ID_PREFIX: &str = "temp-";
const TEMP_SLUG_LEN: usize = 6;

/// Which form a participant id takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdForm {
    Durable,
    Temporary,
}

impl IdForm {
    /// Classify an id by its prefix. Anything that is not durable is treated
    /// as temporary.
    pub fn of(participant_id: &str) -> Self {
        if participant_id.starts_with(DURABLE_ID_PREFIX) {
            IdForm::Durable
        } else {
            IdForm::Temporary
        }
    }
}

/// Match key issued at creation for the record at `position`
pub fn durable_match_key(position: usize) -> String {
    format!("MID-{}", ID_OFFSET + position)
}

/// Participant id that accompanies [`durable_match_key`]
pub fn durable_participant_id(position: usize) -> String {
    format!("{}{}", DURABLE_ID_PREFIX, ID_OFFSET + position)
}

/// Match key assigned by a later promotion of the record at `position`
pub fn promoted_match_key(position: usize) -> String {
    format!("MID-PROMO-{}", ID_OFFSET + position)
}

/// Replacement temporary id sent alongside a promoted match key
pub fn promoted_participant_id(position: usize) -> String {
    format!("{}day2-{}", TEMP_ID_PREFIX, position)
}

/// Fresh temporary id with a random lowercase alphanumeric slug
pub fn temporary_participant_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let slug: String = (0..TEMP_SLUG_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
        .collect();
    format!("{}{}", TEMP_ID_PREFIX, slug)
}
