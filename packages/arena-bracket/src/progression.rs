use std::fmt;

use cosmwasm_schema::cw_serde;

use crate::graph::FeederGraph;
use crate::state::{Match, Position, Team, TeamId, CHAMPIONSHIP_ROUND};

/// Describes where the occupant of a bracket slot will come from.
#[cw_serde]
pub enum SlotLabel {
    WinnersBracketChampion,
    LosersBracketChampion,
    LoserOfWinners { round: u32, match_number: u32 },
    WinnerOfLosers { round: u32, match_number: u32 },
    WinnerOf { match_number: u32 },
    Tbd,
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotLabel::WinnersBracketChampion => write!(f, "Winners Bracket Champion"),
            SlotLabel::LosersBracketChampion => write!(f, "Losers Bracket Champion"),
            SlotLabel::LoserOfWinners {
                round,
                match_number,
            } => write!(f, "Loser of Winners Round {} Match {}", round, match_number),
            SlotLabel::WinnerOfLosers {
                round,
                match_number,
            } => write!(f, "Winner of Losers Round {} Match {}", round, match_number),
            SlotLabel::WinnerOf { match_number } => write!(f, "Winner of Match {}", match_number),
            SlotLabel::Tbd => write!(f, "TBD"),
        }
    }
}

#[cw_serde]
pub enum Slot {
    Assigned { team_id: TeamId, team: Option<Team> },
    Pending(SlotLabel),
}

impl Slot {
    /// The team name when assigned, otherwise the pending label.
    pub fn display_name(&self) -> String {
        match self {
            Slot::Assigned { team: Some(team), .. } => team.name.clone(),
            Slot::Assigned { team_id, .. } => format!("Team {}", team_id),
            Slot::Pending(label) => label.to_string(),
        }
    }
}

impl<'a> FeederGraph<'a> {
    /// Labels the source of a slot. Never fails; unresolvable sources are `Tbd`.
    pub fn slot_label(&self, match_: &Match, position: Position) -> SlotLabel {
        // Slot 1 of a final always holds the winners bracket champion
        if match_.round >= CHAMPIONSHIP_ROUND || match_.kind.is_championship_tier() {
            return match position {
                Position::Team1 => SlotLabel::WinnersBracketChampion,
                Position::Team2 => SlotLabel::LosersBracketChampion,
            };
        }

        if let Some(feed) = match_.kind.losers_feed(position) {
            return match (feed.round, feed.match_number) {
                (Some(round), Some(match_number)) if feed.from_winners => {
                    SlotLabel::LoserOfWinners {
                        round,
                        match_number,
                    }
                }
                (Some(round), Some(match_number)) => SlotLabel::WinnerOfLosers {
                    round,
                    match_number,
                },
                _ => SlotLabel::Tbd,
            };
        }

        self.slot_feeder(match_, position)
            .map_or(SlotLabel::Tbd, |feeder| SlotLabel::WinnerOf {
                match_number: feeder.match_number,
            })
    }

    /// The participant of a slot, or the label of where it will come from.
    pub fn resolve_slot(&self, match_: &Match, position: Position) -> Slot {
        let team = match_.team(position).cloned();

        match match_.team_id(position).or(team.as_ref().map(|x| x.id)) {
            Some(team_id) => Slot::Assigned { team_id, team },
            None => Slot::Pending(self.slot_label(match_, position)),
        }
    }
}

/// Labels one slot of `match_` against the full tournament snapshot.
///
/// Builds a [`FeederGraph`] per call; resolve many slots through a shared graph instead.
pub fn resolve_slot_label(match_: &Match, position: Position, all_matches: &[Match]) -> SlotLabel {
    FeederGraph::new(all_matches).slot_label(match_, position)
}
