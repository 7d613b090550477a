use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use time::OffsetDateTime;

use crate::error::InvalidInput;
use crate::id::TaskId;

/// Status lane of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Not started yet; the lane new tasks land in.
    #[serde(rename = "To Do")]
    ToDo,
    /// Actively being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Completed.
    Done,
}

impl Status {
    /// The three lanes in board order.
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Lane label shown on the board; also the only accepted external
    /// spelling when a drop target is resolved back to a status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "To Do" => Ok(Self::ToDo),
            "In Progress" => Ok(Self::InProgress),
            "Done" => Ok(Self::Done),
            other => Err(InvalidInput::UnknownLane(other.to_owned())),
        }
    }
}

/// One unit of work on the board.
///
/// Constructed only by [`crate::TaskStore::create_task`]; the sole mutation
/// afterwards is the status change performed by the move operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, unique within the store, never reused.
    pub id: TaskId,
    /// Display title, fixed at creation.
    pub title: String,
    /// Estimated duration in canonical `H:MM` form.
    pub eta: String,
    /// Current lane.
    pub status: Status,
    #[serde(with = "time::serde::rfc3339")]
    /// Creation instant in UTC.
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_labels_roundtrip() {
        for status in Status::ALL {
            let parsed: Status = status.label().parse().expect("label must parse");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn unknown_lane_label_is_rejected() {
        let err = "Doing".parse::<Status>().expect_err("must reject label");
        assert_eq!(err, InvalidInput::UnknownLane("Doing".to_owned()));
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert!("to do".parse::<Status>().is_err());
        assert!("DONE".parse::<Status>().is_err());
    }

    #[test]
    fn status_serializes_as_its_label() {
        let json = serde_json::to_string(&Status::InProgress).expect("must serialize");
        assert_eq!(json, "\"In Progress\"");
    }
}
