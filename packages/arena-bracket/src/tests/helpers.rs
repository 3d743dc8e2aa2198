use crate::{LosersFeed, Match, MatchId, MatchKind, Team, TeamId};

pub const A: TeamId = 1;
pub const B: TeamId = 2;
pub const C: TeamId = 3;
pub const D: TeamId = 4;

pub fn team(id: TeamId) -> Team {
    Team {
        id,
        name: format!("team {}", id),
        seed: Some(id as u32),
    }
}

pub fn empty_match(id: MatchId, round: u32, match_number: u32) -> Match {
    Match {
        id,
        kind: MatchKind::Winners,
        round,
        match_number,
        team_1_id: None,
        team_2_id: None,
        team_1: None,
        team_2: None,
        winner_id: None,
        next_match_id: None,
    }
}

pub fn with_teams(mut match_: Match, team_1: TeamId, team_2: TeamId) -> Match {
    match_.team_1_id = Some(team_1);
    match_.team_2_id = Some(team_2);
    match_.team_1 = Some(team(team_1));
    match_.team_2 = Some(team(team_2));
    match_
}

pub fn won_by(mut match_: Match, winner: TeamId) -> Match {
    match_.winner_id = Some(winner);
    match_
}

pub fn advancing_to(mut match_: Match, next_match_id: MatchId) -> Match {
    match_.next_match_id = Some(next_match_id);
    match_
}

pub fn of_kind(mut match_: Match, kind: MatchKind) -> Match {
    match_.kind = kind;
    match_
}

pub fn played(
    id: MatchId,
    round: u32,
    match_number: u32,
    team_1: TeamId,
    team_2: TeamId,
    winner: TeamId,
) -> Match {
    won_by(
        with_teams(empty_match(id, round, match_number), team_1, team_2),
        winner,
    )
}

pub fn losers_kind(team_1: LosersFeed, team_2: LosersFeed) -> MatchKind {
    MatchKind::Losers { team_1, team_2 }
}

pub fn feed(from_winners: bool, round: u32, match_number: u32) -> LosersFeed {
    LosersFeed {
        from_winners,
        round: Some(round),
        match_number: Some(match_number),
    }
}

/// Four team double elimination bracket where the losers bracket champion forces a reset.
///
/// A beats D and B, loses the first final to C and wins the reset. C drops to the losers
/// bracket in round 1, then beats D and B.
pub fn double_elimination() -> Vec<Match> {
    vec![
        advancing_to(played(1, 1, 1, A, D, A), 3),
        advancing_to(played(2, 1, 2, B, C, B), 3),
        advancing_to(played(3, 2, 1, A, B, A), 6),
        advancing_to(
            of_kind(
                played(4, 1, 1, D, C, C),
                losers_kind(feed(true, 1, 1), feed(true, 1, 2)),
            ),
            5,
        ),
        advancing_to(
            of_kind(
                played(5, 2, 1, C, B, C),
                losers_kind(feed(false, 1, 1), feed(true, 2, 1)),
            ),
            6,
        ),
        of_kind(played(6, 98, 1, A, C, C), MatchKind::Championship),
        of_kind(played(7, 99, 1, A, C, A), MatchKind::ChampionshipReset),
    ]
}

/// Builds a complete single elimination bracket for `teams` (a power of two) entrants.
///
/// `picks[i]` decides match id `i + 1`: true advances slot 1, false slot 2. Missing picks
/// advance slot 1. Match ids run round by round, so the final has the highest id.
pub fn single_elimination(teams: u32, picks: &[bool]) -> Vec<Match> {
    let mut matches = vec![];
    let mut entrants: Vec<TeamId> = (1..=teams as TeamId).collect();
    let mut round = 1;
    let mut first_id: MatchId = 1;

    while entrants.len() > 1 {
        let round_size = entrants.len() / 2;
        let next_round_first_id = first_id + round_size as MatchId;
        let mut advancing = vec![];

        for (i, pair) in entrants.chunks(2).enumerate() {
            let id = first_id + i as MatchId;
            let winner = if picks.get(id as usize - 1).copied().unwrap_or(true) {
                pair[0]
            } else {
                pair[1]
            };

            let mut match_ = played(id, round, i as u32 + 1, pair[0], pair[1], winner);
            if round_size > 1 {
                match_ = advancing_to(match_, next_round_first_id + (i / 2) as MatchId);
            }

            matches.push(match_);
            advancing.push(winner);
        }

        first_id = next_round_first_id;
        entrants = advancing;
        round += 1;
    }

    matches
}
