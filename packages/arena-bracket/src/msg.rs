use cosmwasm_std::from_json;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{
    LosersFeed, Match, MatchId, MatchKind, Team, TeamId, CHAMPIONSHIP_RESET_ROUND,
    CHAMPIONSHIP_ROUND,
};
use crate::BracketError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BracketSide {
    Winners,
    Losers,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
    pub seed: Option<u32>,
}

/// A match as served by the tournament API.
///
/// Unknown fields are ignored so that records carrying extra server-side columns still decode.
/// Match and team ids must be JSON numbers; string ids are rejected.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MatchRecord {
    pub id: MatchId,
    pub round: u32,
    pub match_number: u32,
    pub bracket: Option<BracketSide>,
    pub team1_id: Option<TeamId>,
    pub team2_id: Option<TeamId>,
    pub winner_id: Option<TeamId>,
    pub next_match_id: Option<MatchId>,
    pub team1: Option<TeamRecord>,
    pub team2: Option<TeamRecord>,
    // Losers bracket only
    pub team1_from_winners: Option<bool>,
    pub team2_from_winners: Option<bool>,
    pub team1_winners_round: Option<u32>,
    pub team1_winners_match_number: Option<u32>,
    pub team2_winners_round: Option<u32>,
    pub team2_winners_match_number: Option<u32>,
}

impl MatchRecord {
    fn has_losers_fields(&self) -> bool {
        self.team1_from_winners.is_some()
            || self.team2_from_winners.is_some()
            || self.team1_winners_round.is_some()
            || self.team1_winners_match_number.is_some()
            || self.team2_winners_round.is_some()
            || self.team2_winners_match_number.is_some()
    }

    fn kind(&self) -> MatchKind {
        if self.round == CHAMPIONSHIP_ROUND {
            return MatchKind::Championship;
        }
        if self.round >= CHAMPIONSHIP_RESET_ROUND {
            return MatchKind::ChampionshipReset;
        }

        let is_losers = match self.bracket {
            Some(side) => side == BracketSide::Losers,
            None => self.has_losers_fields(),
        };

        if is_losers {
            MatchKind::Losers {
                team_1: LosersFeed {
                    from_winners: self.team1_from_winners.unwrap_or(false),
                    round: self.team1_winners_round,
                    match_number: self.team1_winners_match_number,
                },
                team_2: LosersFeed {
                    from_winners: self.team2_from_winners.unwrap_or(false),
                    round: self.team2_winners_round,
                    match_number: self.team2_winners_match_number,
                },
            }
        } else {
            MatchKind::Winners
        }
    }
}

impl From<TeamRecord> for Team {
    fn from(record: TeamRecord) -> Self {
        Team {
            id: record.id,
            name: record.name,
            seed: record.seed,
        }
    }
}

impl From<MatchRecord> for Match {
    fn from(record: MatchRecord) -> Self {
        let kind = record.kind();

        Match {
            id: record.id,
            kind,
            round: record.round,
            match_number: record.match_number,
            team_1_id: record.team1_id,
            team_2_id: record.team2_id,
            team_1: record.team1.map(Team::from),
            team_2: record.team2.map(Team::from),
            winner_id: record.winner_id,
            next_match_id: record.next_match_id,
        }
    }
}

/// Decodes a snapshot of match records. `null` is an empty snapshot, any other non-array
/// document is rejected.
pub fn parse_matches(data: impl AsRef<[u8]>) -> Result<Vec<Match>, BracketError> {
    let records: Option<Vec<MatchRecord>> = from_json(data)?;
    let records = records.unwrap_or_default();
    log::debug!("decoded {} match records", records.len());

    Ok(records.into_iter().map(Match::from).collect())
}
