use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

pub const SECONDS_PER_WEEK: i64 = 604_800;

/// Default campaign period: May 9 2025 09:00 GMT through May 16 2025 09:00 GMT.
pub const DEFAULT_CHALLENGE_START: i64 = 1_746_781_200;
pub const DEFAULT_CHALLENGE_END: i64 = 1_747_386_000;

/// Age-relative leaderboard cohorts.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TimeWindow {
    /// Vaults created within the last 7 days.
    ThisWeek,
    /// Vaults created 8 to 14 days ago.
    LastWeek,
    #[default]
    AllTime,
}

impl TimeWindow {
    pub const fn admits(self, age_in_second: i64) -> bool {
        match self {
            Self::ThisWeek => age_in_second <= SECONDS_PER_WEEK,
            Self::LastWeek => {
                age_in_second > SECONDS_PER_WEEK && age_in_second <= 2 * SECONDS_PER_WEEK
            }
            Self::AllTime => true,
        }
    }
}

/// A fixed calendar period used for a time-boxed competition.
///
/// Membership is evaluated against vault age relative to a caller-supplied
/// "now": the admitted age interval shifts as real time advances, keeping
/// the calendar period fixed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeWindow {
    pub start_ts: i64,
    pub end_ts: i64,
}

impl Default for ChallengeWindow {
    fn default() -> Self {
        Self {
            start_ts: DEFAULT_CHALLENGE_START,
            end_ts: DEFAULT_CHALLENGE_END,
        }
    }
}

impl ChallengeWindow {
    /// Whether a vault of the given age was created inside the campaign
    /// period, as seen from `now` (seconds since the UNIX epoch).
    pub const fn admits(&self, age_in_second: i64, now: i64) -> bool {
        age_in_second <= now - self.start_ts && age_in_second >= now - self.end_ts
    }
}

/// Metric a challenge "top N" board ranks by.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChallengeMetric {
    #[default]
    Fees,
    Tvl,
    Users,
}
