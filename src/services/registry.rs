// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity catalog with capacity-enforcing enrollment.
//!
//! The catalog is seeded once at startup and only mutated through
//! [`ActivityRegistry::enroll`] and [`ActivityRegistry::withdraw`]. All
//! access goes through one registry-wide `RwLock`; the write guard covers
//! the whole check-then-act sequence, so overlapping requests cannot push
//! a roster past its capacity.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::models::Activity;

/// Shared, lock-guarded catalog of activities keyed by name.
#[derive(Clone)]
pub struct ActivityRegistry {
    activities: Arc<RwLock<HashMap<String, Activity>>>,
}

impl ActivityRegistry {
    pub fn new(activities: HashMap<String, Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// The school's standard catalog of extracurricular activities.
    pub fn with_default_catalog() -> Self {
        let mut activities = HashMap::new();

        activities.insert(
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        );
        activities.insert(
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        );
        activities.insert(
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        );
        activities.insert(
            "Soccer Team".to_string(),
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(&["liam@mergington.edu", "noah@mergington.edu"]),
        );
        activities.insert(
            "Basketball Team".to_string(),
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(&["ava@mergington.edu", "mia@mergington.edu"]),
        );
        activities.insert(
            "Art Club".to_string(),
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(&["amelia@mergington.edu", "harper@mergington.edu"]),
        );
        activities.insert(
            "Drama Club".to_string(),
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(&["ella@mergington.edu", "scarlett@mergington.edu"]),
        );
        activities.insert(
            "Math Club".to_string(),
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(&["james@mergington.edu", "benjamin@mergington.edu"]),
        );
        activities.insert(
            "Debate Team".to_string(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(&["charlotte@mergington.edu", "henry@mergington.edu"]),
        );
        activities.insert(
            "GitHub Skills".to_string(),
            Activity::new(
                "Learn practical coding and collaboration skills through GitHub. \
                 Part of our GitHub Certifications program to help with college applications.",
                "Mondays, 3:30 PM - 4:30 PM",
                25,
            ),
        );

        Self::new(activities)
    }

    /// Snapshot of the full catalog.
    pub async fn list(&self) -> HashMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Sign a student up for an activity.
    ///
    /// Check order: existence, then duplicate membership, then capacity.
    /// Duplicate before capacity means enrolling an email already on a full
    /// roster reports `AlreadyEnrolled` rather than `AtCapacity`.
    pub async fn enroll(&self, name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;

        let activity = activities
            .get_mut(name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(AppError::AlreadyEnrolled);
        }

        if activity.is_full() {
            return Err(AppError::AtCapacity);
        }

        activity.participants.push(email.to_string());

        tracing::info!(activity = name, email, "Student enrolled");
        Ok(())
    }

    /// Remove a student from an activity's roster.
    pub async fn withdraw(&self, name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;

        let activity = activities
            .get_mut(name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(AppError::NotEnrolled)?;

        activity.participants.remove(position);

        tracing::info!(activity = name, email, "Student withdrawn");
        Ok(())
    }
}
