use std::cmp::Ordering;
use std::collections::HashMap;

use cosmwasm_schema::cw_serde;
use itertools::Itertools;

use crate::state::{Match, Position, TeamId};

#[cw_serde]
#[derive(Copy)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

#[cw_serde]
pub struct MatchHistoryEntry {
    pub result: Outcome,
    pub round: u32,
    pub match_number: u32,
}

#[cw_serde]
pub struct TeamRanking {
    pub team_id: TeamId,
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub match_history: Vec<MatchHistoryEntry>, // Chronological by (round, match number)
    pub first_loss_round: Option<u32>,
    pub rank: u32,
}

impl TeamRanking {
    fn new(team_id: TeamId, team_name: String) -> Self {
        TeamRanking {
            team_id,
            team_name,
            wins: 0,
            losses: 0,
            match_history: vec![],
            first_loss_round: None,
            rank: 0,
        }
    }

    fn record(&mut self, result: Outcome, match_: &Match) {
        match result {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => {
                self.losses += 1;
                if self.first_loss_round.is_none() {
                    self.first_loss_round = Some(match_.round);
                }
            }
        }

        self.match_history.push(MatchHistoryEntry {
            result,
            round: match_.round,
            match_number: match_.match_number,
        });
    }

    /// Still alive, or the grand finalist of a double elimination bracket.
    pub fn is_contending(&self) -> bool {
        self.losses <= 1
    }

    /// The round of the first loss, where never losing counts as outlasting every round.
    fn survived_until(&self) -> u32 {
        self.first_loss_round.unwrap_or(u32::MAX)
    }
}

/// Placement order. Equal teams compare equal so a stable sort keeps their relative order.
fn compare_standings(a: &TeamRanking, b: &TeamRanking) -> Ordering {
    b.is_contending()
        .cmp(&a.is_contending())
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| b.survived_until().cmp(&a.survived_until()))
}

fn standing<'r>(
    rankings: &'r mut Vec<TeamRanking>,
    index: &mut HashMap<TeamId, usize>,
    names: &HashMap<TeamId, &str>,
    team_id: TeamId,
) -> &'r mut TeamRanking {
    let position = *index.entry(team_id).or_insert_with(|| {
        let name = names
            .get(&team_id)
            .map(|x| x.to_string())
            .unwrap_or_else(|| format!("Team {}", team_id));
        rankings.push(TeamRanking::new(team_id, name));
        rankings.len() - 1
    });

    &mut rankings[position]
}

/// Ranks every team that took part in a decided match.
///
/// Undecided matches are skipped, as are decided matches whose winner is not one of the
/// participants. Ranks are 1-based and unique; ties keep the order in which teams first appear.
pub fn compute_rankings(matches: &[Match]) -> Vec<TeamRanking> {
    let mut names: HashMap<TeamId, &str> = HashMap::new();
    for match_ in matches {
        for position in [Position::Team1, Position::Team2] {
            if let Some(team) = match_.team(position) {
                names.entry(team.id).or_insert(team.name.as_str());
            }
        }
    }

    let decided = matches
        .iter()
        .filter(|x| x.is_decided())
        .filter_map(|x| match x.outcome() {
            Some(outcome) => Some((x, outcome)),
            None => {
                log::warn!(
                    "skipping match {}: winner {:?} is not a distinct participant",
                    x.id,
                    x.winner_id
                );
                None
            }
        })
        .sorted_by_key(|(x, _)| x.sort_key())
        .collect_vec();

    let mut rankings: Vec<TeamRanking> = Vec::new();
    let mut index: HashMap<TeamId, usize> = HashMap::new();

    for (match_, (winner, loser)) in decided.iter() {
        // Register in slot order first so ties keep a bracket-stable order
        for position in [Position::Team1, Position::Team2] {
            if let Some(team_id) = match_.team_id(position) {
                standing(&mut rankings, &mut index, &names, team_id);
            }
        }

        standing(&mut rankings, &mut index, &names, *winner).record(Outcome::Win, match_);
        standing(&mut rankings, &mut index, &names, *loser).record(Outcome::Loss, match_);
    }

    rankings.sort_by(compare_standings);
    for (i, ranking) in rankings.iter_mut().enumerate() {
        ranking.rank = i as u32 + 1;
    }

    log::debug!(
        "ranked {} teams from {} decided matches",
        rankings.len(),
        decided.len()
    );

    rankings
}
