// ABOUTME: User record consumed by the planning core
// ABOUTME: Bundles identity, optional body profile with targets, and dietary constraints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{UserConstraints, UserProfile};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as seen by the planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User identifier
    pub id: Uuid,
    /// Login name
    pub username: String,
    /// Body profile; absent for users who have not filled one in
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Dietary constraints
    #[serde(default)]
    pub constraints: UserConstraints,
}

impl UserRecord {
    /// New user with no profile and no constraints
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            profile: None,
            constraints: UserConstraints::default(),
        }
    }

    /// Attach a profile
    #[must_use]
    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Replace constraints
    #[must_use]
    pub fn with_constraints(mut self, constraints: UserConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Resolved daily calorie target, if any
    #[must_use]
    pub fn calorie_target(&self) -> Option<u32> {
        self.profile.as_ref().and_then(UserProfile::calorie_target)
    }
}
