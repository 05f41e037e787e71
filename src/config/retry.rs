// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bounded retry policy for whole-portfolio loads
//!
//! The default policy makes a single attempt, which is the viewer's normal
//! behaviour: a failed load lands in the failed state and waits for the
//! user. A larger `max_attempts` lets a deployment opt in to automatic
//! retries without touching the controller.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ConfigError;

/// Named retry configuration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts including the first one (>= 1)
    pub max_attempts: u32,
    /// Delay before attempt n+1, in milliseconds. The last value repeats
    /// for any further attempts; an empty schedule means no delay.
    pub backoff_ms: Vec<u64>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::single_attempt()
    }
}

impl RetryPolicy {
    /// One attempt, no automatic retry
    pub fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            backoff_ms: Vec::new(),
        }
    }

    /// Policy with the given attempt count and backoff schedule
    pub fn new(max_attempts: u32, backoff: &[Duration]) -> Self {
        Self {
            max_attempts,
            backoff_ms: backoff.iter().map(|d| d.as_millis() as u64).collect(),
        }
    }

    /// Returns true if another attempt may follow attempt number `attempt` (1-based)
    pub fn allows_another(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Delay to wait after failed attempt number `attempt` (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let index = attempt.saturating_sub(1) as usize;
        self.backoff_ms
            .get(index)
            .or_else(|| self.backoff_ms.last())
            .map(|ms| Duration::from_millis(*ms))
            .unwrap_or(Duration::ZERO)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidRetryPolicy(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
