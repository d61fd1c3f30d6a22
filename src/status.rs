use std::fmt;


/// Outcome codes shared by every producer implementation
/// These travel in the `status_code` field of a report, so the numbers are fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Success,
    InvalidHeuristic,
    StartNotFound,
    GoalNotFound,
    GoalUnreachable,
    MultipleStarts,
    MultipleGoals,
    InputFailure,
    OutputFailure, // report could not be produced or written
}

impl StatusCode {
    pub const ALL: [StatusCode; 9] = [
        StatusCode::Success,
        StatusCode::InvalidHeuristic,
        StatusCode::StartNotFound,
        StatusCode::GoalNotFound,
        StatusCode::GoalUnreachable,
        StatusCode::MultipleStarts,
        StatusCode::MultipleGoals,
        StatusCode::InputFailure,
        StatusCode::OutputFailure,
    ];

    pub fn code(self) -> i32 {
        match self {
            StatusCode::Success => 200,
            StatusCode::InvalidHeuristic => 401,
            StatusCode::StartNotFound => 402,
            StatusCode::GoalNotFound => 403,
            StatusCode::GoalUnreachable => 404,
            StatusCode::MultipleStarts => 422,
            StatusCode::MultipleGoals => 433,
            StatusCode::InputFailure => 500,
            StatusCode::OutputFailure => 509,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Process exit status for a producer binary
    /// Success exits 0, everything else keeps the low byte of its code
    pub fn exit_code(self) -> u8 {
        match self {
            StatusCode::Success => 0,
            other => (other.code() & 0xff) as u8,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
