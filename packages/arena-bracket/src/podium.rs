use cosmwasm_schema::cw_serde;

use crate::graph::FeederGraph;
use crate::state::{Match, MatchKind, TeamId};

#[cw_serde]
pub struct Podium {
    pub first: TeamId,
    pub second: TeamId,
    pub third: Option<TeamId>, // Only known for double elimination
}

/// Final placements of a finished bracket, or `None` while the deciding match is open.
pub fn podium(matches: &[Match]) -> Option<Podium> {
    match matches
        .iter()
        .find(|x| matches!(x.kind, MatchKind::Championship))
    {
        Some(championship) => double_elimination_podium(matches, championship),
        None => single_elimination_podium(matches),
    }
}

fn double_elimination_podium(matches: &[Match], championship: &Match) -> Option<Podium> {
    let reset = matches
        .iter()
        .find(|x| matches!(x.kind, MatchKind::ChampionshipReset));

    let (first, second) = match reset.and_then(Match::outcome) {
        Some(outcome) => outcome,
        None => {
            let (winner, loser) = championship.outcome()?;

            // The losers bracket champion has to win twice
            if championship.team_1_id != Some(winner) {
                log::debug!(
                    "championship {} won by the losers bracket champion, awaiting reset",
                    championship.id
                );
                return None;
            }

            (winner, loser)
        }
    };

    let graph = FeederGraph::new(matches);
    let losers_final = graph
        .feeders(championship.id)
        .iter()
        .copied()
        .find(|x| x.kind.is_losers_bracket())
        .or_else(|| {
            matches
                .iter()
                .filter(|x| x.kind.is_losers_bracket())
                .max_by_key(|x| x.sort_key())
        });

    Some(Podium {
        first,
        second,
        third: losers_final
            .and_then(Match::outcome)
            .map(|(_, loser)| loser),
    })
}

fn single_elimination_podium(matches: &[Match]) -> Option<Podium> {
    let final_match = matches
        .iter()
        .filter(|x| matches!(x.kind, MatchKind::Winners) && x.next_match_id.is_none())
        .max_by_key(|x| x.sort_key())?;

    let (first, second) = final_match.outcome()?;

    Some(Podium {
        first,
        second,
        third: None,
    })
}
