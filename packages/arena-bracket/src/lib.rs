mod bracket;
mod error;
mod graph;
mod msg;
mod podium;
mod progression;
mod ranking;
mod state;

pub use bracket::{BracketView, RoundColumn};
pub use error::BracketError;
pub use graph::{check_consistency, FeederGraph};
pub use msg::{parse_matches, BracketSide, MatchRecord, TeamRecord};
pub use podium::{podium, Podium};
pub use progression::{resolve_slot_label, Slot, SlotLabel};
pub use ranking::{compute_rankings, MatchHistoryEntry, Outcome, TeamRanking};
pub use state::{
    LosersFeed, Match, MatchId, MatchKind, Position, Team, TeamId, CHAMPIONSHIP_RESET_ROUND,
    CHAMPIONSHIP_ROUND,
};
