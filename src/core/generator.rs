//! Fake participant dataset generation
//!
//! Produces reproducible datasets for exercising the registration API. A
//! share of the records is issued a match key up front; the rest start out
//! with temporary ids and are candidates for later promotion.

use crate::config::{GeneratorConfig, Validate};
use crate::core::models::identity::{
    durable_match_key, durable_participant_id, temporary_participant_id,
};
use crate::core::models::{AttendanceStatus, Participant};
use crate::utils::error::{Result, UploadError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, json};
use std::path::Path;
use tracing::info;

const FIRST_NAMES: [&str; 15] = [
    "John", "Ava", "Noah", "Mia", "Ethan", "Ella", "Liam", "Zoe", "Lucas", "Ivy", "Aria", "Leo",
    "Nora", "Jack", "Lily",
];

const LAST_NAMES: [&str; 15] = [
    "Doe", "Smith", "Johnson", "Brown", "Taylor", "Lee", "Martin", "Davis", "Clark", "Walker",
    "Young", "White", "Hall", "King", "Allen",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Generate `config.count` participants from `config.seed`
pub fn generate_participants(config: &GeneratorConfig) -> Result<Vec<Participant>> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    generate_with_rng(
        &mut rng,
        config.count,
        &config.event,
        config.match_key_ratio,
    )
}

/// Generate participants from a caller-supplied random source
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    event: &str,
    match_key_ratio: f64,
) -> Result<Vec<Participant>> {
    if !(0.0..=1.0).contains(&match_key_ratio) {
        return Err(UploadError::invalid_configuration(format!(
            "match key ratio must be within [0, 1], got: {}",
            match_key_ratio
        )));
    }
    Ok((0..count)
        .map(|position| generate_one(rng, position, event, match_key_ratio))
        .collect())
}

fn generate_one<R: Rng + ?Sized>(
    rng: &mut R,
    position: usize,
    event: &str,
    match_key_ratio: f64,
) -> Participant {
    let first = pick(rng, &FIRST_NAMES);
    let last = pick(rng, &LAST_NAMES);
    let email = format!("{}.{}.{}@example.com", first, last, position).to_lowercase();

    let (participant_id, match_key) = if rng.gen_bool(match_key_ratio) {
        (
            durable_participant_id(position),
            Some(durable_match_key(position)),
        )
    } else {
        (temporary_participant_id(rng), None)
    };

    let phone = format!(
        "+1-555-{}-{}",
        rng.gen_range(100..=999),
        rng.gen_range(1000..=9999)
    );
    let username = format!(
        "{}{}{}",
        first[..1].to_lowercase(),
        last.to_lowercase(),
        position
    );
    let attendance_status =
        AttendanceStatus::ALL[rng.gen_range(0..AttendanceStatus::ALL.len())].clone();

    Participant {
        participant_id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email,
        match_key,
        attendance_status,
        extra: Map::new(),
    }
    .with_attribute("phone", phone)
    .with_attribute("username", username)
    .with_attribute("metadata", json!({ "eventId": event }))
}

/// Write participants as pretty JSON, creating parent directories
pub async fn write_participants<P: AsRef<Path>>(path: P, participants: &[Participant]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(participants)?;
    tokio::fs::write(path, json).await?;
    info!(count = participants.len(), path = %path.display(), "Wrote participants");
    Ok(())
}
