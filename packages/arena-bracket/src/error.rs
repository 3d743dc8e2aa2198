use cosmwasm_std::StdError;
use thiserror::Error;

use crate::state::{MatchId, TeamId};

#[derive(Error, Debug, PartialEq)]
pub enum BracketError {
    #[error("{0}")]
    StdError(#[from] StdError),

    #[error("Invalid slot position {position}, expected 1 or 2")]
    InvalidPosition { position: u8 },

    #[error("Match {id} appears more than once in the snapshot")]
    DuplicateMatch { id: MatchId },

    #[error("Match {id} advances to match {next_match_id} which is not in the snapshot")]
    UnknownNextMatch { id: MatchId, next_match_id: MatchId },

    #[error("Match {id} has winner {winner_id} which is not one of its participants")]
    WinnerNotParticipant { id: MatchId, winner_id: TeamId },

    #[error("Match {id} is part of a progression cycle")]
    ProgressionCycle { id: MatchId },
}
