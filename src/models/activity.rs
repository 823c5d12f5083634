//! Activity model for the in-memory catalog and API.

use serde::{Deserialize, Serialize};

/// An extracurricular activity with a capacity-bounded roster.
///
/// The activity's name is the key in the catalog map, not a field here.
/// Invariant: `participants.len() <= max_participants` and no email appears
/// twice in one roster. The registry enforces both on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// What the activity is about
    pub description: String,
    /// Human-readable meeting schedule
    pub schedule: String,
    /// Roster capacity
    pub max_participants: u32,
    /// Enrolled student emails, in enrollment order
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seed an activity with an initial roster.
    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}
