use cosmwasm_schema::cw_serde;

use crate::BracketError;

pub type MatchId = u64;
pub type TeamId = u64;

/// Round reserved for the match between the winners and losers bracket champions.
pub const CHAMPIONSHIP_ROUND: u32 = 98;
/// Round reserved for the second final, played only if the losers bracket champion wins the first.
pub const CHAMPIONSHIP_RESET_ROUND: u32 = 99;

#[cw_serde]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub seed: Option<u32>, // Display only
}

/// Where a losers bracket slot is filled from.
#[cw_serde]
pub struct LosersFeed {
    /// The slot receives a team dropping down from the winners bracket, otherwise the winner of
    /// an earlier losers bracket match
    pub from_winners: bool,
    pub round: Option<u32>,
    pub match_number: Option<u32>,
}

#[cw_serde]
pub enum MatchKind {
    Winners,
    Losers {
        team_1: LosersFeed,
        team_2: LosersFeed,
    },
    Championship,
    ChampionshipReset,
}

impl MatchKind {
    pub fn is_championship_tier(&self) -> bool {
        matches!(self, MatchKind::Championship | MatchKind::ChampionshipReset)
    }

    pub fn is_losers_bracket(&self) -> bool {
        matches!(self, MatchKind::Losers { .. })
    }

    pub fn losers_feed(&self, position: Position) -> Option<&LosersFeed> {
        match self {
            MatchKind::Losers { team_1, team_2 } => Some(match position {
                Position::Team1 => team_1,
                Position::Team2 => team_2,
            }),
            _ => None,
        }
    }
}

#[cw_serde]
pub struct Match {
    pub id: MatchId,
    pub kind: MatchKind,
    pub round: u32,
    pub match_number: u32,
    pub team_1_id: Option<TeamId>,
    pub team_2_id: Option<TeamId>,
    pub team_1: Option<Team>,
    pub team_2: Option<Team>,
    pub winner_id: Option<TeamId>,
    pub next_match_id: Option<MatchId>, // Next match for the winner
}

impl Match {
    pub fn team_id(&self, position: Position) -> Option<TeamId> {
        match position {
            Position::Team1 => self.team_1_id,
            Position::Team2 => self.team_2_id,
        }
    }

    pub fn team(&self, position: Position) -> Option<&Team> {
        match position {
            Position::Team1 => self.team_1.as_ref(),
            Position::Team2 => self.team_2.as_ref(),
        }
    }

    /// The slot has a participant, either by id or by snapshot.
    pub fn is_assigned(&self, position: Position) -> bool {
        self.team_id(position).is_some() || self.team(position).is_some()
    }

    /// Both participants and the winner are known.
    pub fn is_decided(&self) -> bool {
        self.winner_id.is_some() && self.team_1_id.is_some() && self.team_2_id.is_some()
    }

    /// Returns (winner, loser) for a decided match whose winner is one of its participants.
    pub fn outcome(&self) -> Option<(TeamId, TeamId)> {
        let winner = self.winner_id?;
        let team_1 = self.team_1_id?;
        let team_2 = self.team_2_id?;

        if team_1 == team_2 {
            return None;
        }

        if winner == team_1 {
            Some((team_1, team_2))
        } else if winner == team_2 {
            Some((team_2, team_1))
        } else {
            None
        }
    }

    /// Chronological position of the match: (round, match number).
    pub fn sort_key(&self) -> (u32, u32) {
        (self.round, self.match_number)
    }
}

#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum Position {
    Team1,
    Team2,
}

impl TryFrom<u8> for Position {
    type Error = BracketError;

    fn try_from(position: u8) -> Result<Self, Self::Error> {
        match position {
            1 => Ok(Position::Team1),
            2 => Ok(Position::Team2),
            _ => Err(BracketError::InvalidPosition { position }),
        }
    }
}
