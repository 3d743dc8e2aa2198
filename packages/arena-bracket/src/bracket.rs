use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;
use itertools::Itertools;

use crate::state::Match;

#[cw_serde]
pub struct RoundColumn {
    pub round: u32,
    pub matches: Vec<Match>, // Ordered by match number
}

/// A snapshot grouped the way a bracket is drawn: winners columns, losers columns, then the
/// championship tier.
#[cw_serde]
pub struct BracketView {
    pub winners: Vec<RoundColumn>,
    pub losers: Vec<RoundColumn>,
    pub championship: Vec<Match>, // Championship, then the reset match if one exists
    pub decided_matches: u32,
    pub total_matches: u32,
}

fn columns<'a>(matches: impl Iterator<Item = &'a Match>) -> Vec<RoundColumn> {
    let mut rounds: BTreeMap<u32, Vec<Match>> = BTreeMap::new();
    for match_ in matches {
        rounds.entry(match_.round).or_default().push(match_.clone());
    }

    rounds
        .into_iter()
        .map(|(round, mut matches)| {
            matches.sort_by_key(|x| (x.match_number, x.id));
            RoundColumn { round, matches }
        })
        .collect()
}

impl BracketView {
    pub fn new(matches: &[Match]) -> Self {
        let winners = columns(
            matches
                .iter()
                .filter(|x| !x.kind.is_losers_bracket() && !x.kind.is_championship_tier()),
        );
        let losers = columns(matches.iter().filter(|x| x.kind.is_losers_bracket()));
        let championship = matches
            .iter()
            .filter(|x| x.kind.is_championship_tier())
            .sorted_by_key(|x| (x.round, x.match_number, x.id))
            .cloned()
            .collect_vec();

        BracketView {
            winners,
            losers,
            championship,
            decided_matches: matches.iter().filter(|x| x.is_decided()).count() as u32,
            total_matches: matches.len() as u32,
        }
    }

    pub fn is_double_elimination(&self) -> bool {
        !self.losers.is_empty() || !self.championship.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.total_matches > 0 && self.decided_matches == self.total_matches
    }
}
