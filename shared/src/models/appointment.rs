//! Appointment Model (预约/排队)
//!
//! The appointment row is the reservation ledger entry: one row per booking
//! attempt, carrying the time window, the status and the queue number
//! assigned at creation time (NULL = seated immediately).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Appointment lifecycle status
///
/// Transitions are monotonic: `pending → confirmed → completed`, with
/// `canceled` reachable from `pending`/`confirmed` only. `completed` and
/// `canceled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Canceled,
}

impl AppointmentStatus {
    /// All known statuses (purge allow-list)
    pub const ALL: [AppointmentStatus; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Completed,
        Self::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }

    /// Active appointments occupy capacity (overlap counting)
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Terminal statuses never occupy capacity and are eligible for retention
    /// purge once their date has passed
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }

    /// Whether a transition to `next` is allowed
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Completed)
                | (Self::Confirmed, Self::Completed)
                | (Self::Pending, Self::Canceled)
                | (Self::Confirmed, Self::Canceled)
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "canceled" => Ok(Self::Canceled),
            other => Err(format!("Unknown appointment status: {}", other)),
        }
    }
}

/// Appointment entity (ledger row)
///
/// `date` is `YYYY-MM-DD`, `time` is `HH:MM`. `start_at` is the same instant
/// as epoch milliseconds, denormalized at insert so the overlap counter works
/// on integers. `duration` is minutes; NULL falls back to the server default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Appointment {
    pub id: i64,
    pub user_id: i64,
    pub branch_id: i64,
    pub type_id: i64,
    pub date: String,
    pub time: String,
    pub start_at: i64,
    pub duration: Option<i64>,
    pub guest_count: i64,
    pub deposit_amount: f64,
    pub note: Option<String>,
    pub status: AppointmentStatus,
    pub employee_id: Option<i64>,
    pub queue_no: Option<i64>,
    pub created_at: i64,
}

/// Appointment with joined display names (staff/admin listings)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AppointmentDetail {
    pub id: i64,
    pub user_id: i64,
    pub branch_id: i64,
    pub type_id: i64,
    pub date: String,
    pub time: String,
    pub duration: Option<i64>,
    pub guest_count: i64,
    pub deposit_amount: f64,
    pub note: Option<String>,
    pub status: AppointmentStatus,
    pub employee_id: Option<i64>,
    pub queue_no: Option<i64>,
    pub created_at: i64,
    pub branch_name: String,
    pub brand_name: Option<String>,
    pub type_name: String,
}

/// Customer-facing appointment row, augmented with `queues_before`
///
/// `queues_before` counts other still-active appointments on the exact same
/// (branch, table type, date, time) slot created strictly earlier; it is 0
/// whenever `queue_no` is NULL. Recomputed on every read, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AppointmentWithQueue {
    pub id: i64,
    pub branch_id: i64,
    pub type_id: i64,
    pub date: String,
    pub time: String,
    pub duration: Option<i64>,
    pub guest_count: i64,
    pub deposit_amount: f64,
    pub note: Option<String>,
    pub status: AppointmentStatus,
    pub queue_no: Option<i64>,
    pub created_at: i64,
    pub branch_name: String,
    pub type_name: String,
    pub queues_before: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in AppointmentStatus::ALL {
            assert_eq!(status.as_str().parse::<AppointmentStatus>(), Ok(status));
        }
        assert!("seated".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn test_active_and_terminal() {
        assert!(AppointmentStatus::Pending.is_active());
        assert!(AppointmentStatus::Confirmed.is_active());
        assert!(!AppointmentStatus::Completed.is_active());
        assert!(!AppointmentStatus::Canceled.is_active());

        assert!(AppointmentStatus::Completed.is_terminal());
        assert!(AppointmentStatus::Canceled.is_terminal());
        assert!(!AppointmentStatus::Pending.is_terminal());
    }

    #[test]
    fn test_transition_matrix() {
        use AppointmentStatus::*;

        // Forward moves
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Pending.can_transition_to(Canceled));
        assert!(Confirmed.can_transition_to(Canceled));

        // No backward moves
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Pending));

        // Terminal statuses are absorbing
        for next in AppointmentStatus::ALL {
            assert!(!Completed.can_transition_to(next));
            assert!(!Canceled.can_transition_to(next));
        }

        // Self-transitions are rejected
        for status in AppointmentStatus::ALL {
            assert!(!status.can_transition_to(status));
        }
    }
}
