//! Participant data model and identifier forms

pub mod identity;
pub mod participant;

pub use identity::IdForm;
pub use participant::{AttendanceStatus, Participant, SecondaryKey};
