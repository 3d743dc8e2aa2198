use std::collections::{BTreeMap, BTreeSet};

use crate::state::{Match, MatchId, Position};
use crate::BracketError;

/// Progression edges of a bracket snapshot, keyed by the match a winner advances to.
#[derive(Debug, Clone)]
pub struct FeederGraph<'a> {
    matches: BTreeMap<MatchId, &'a Match>,
    feeders: BTreeMap<MatchId, Vec<&'a Match>>,
}

impl<'a> FeederGraph<'a> {
    pub fn new(matches: &'a [Match]) -> Self {
        let mut by_id = BTreeMap::new();
        let mut feeders: BTreeMap<MatchId, Vec<&'a Match>> = BTreeMap::new();

        for match_ in matches {
            // First occurrence wins on duplicate ids
            by_id.entry(match_.id).or_insert(match_);

            if let Some(next_match_id) = match_.next_match_id {
                feeders.entry(next_match_id).or_default().push(match_);
            }
        }

        // Bracket order, independent of the order the snapshot arrived in
        for list in feeders.values_mut() {
            list.sort_by_key(|x| (x.round, x.match_number, x.id));
        }

        log::debug!(
            "built feeder graph with {} matches and {} progression targets",
            by_id.len(),
            feeders.len()
        );

        Self {
            matches: by_id,
            feeders,
        }
    }

    pub fn get(&self, id: MatchId) -> Option<&'a Match> {
        self.matches.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Every match whose winner advances into `id`, from any round.
    pub fn feeders(&self, id: MatchId) -> &[&'a Match] {
        self.feeders.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Feeders from the round directly before `match_`, ordered by match number.
    pub fn direct_feeders(&self, match_: &Match) -> Vec<&'a Match> {
        if match_.round < 2 {
            return vec![];
        }
        let previous_round = match_.round - 1;

        self.feeders(match_.id)
            .iter()
            .copied()
            .filter(|x| x.round == previous_round)
            .collect()
    }

    /// The feeder whose winner takes the given slot of a winners bracket match.
    ///
    /// The lower numbered feeder supplies slot 1 and the higher numbered one slot 2. Extra
    /// feeders between those two are ignored. A lone feeder supplies the empty slot when the
    /// other one was filled by a bye, and slot 1 otherwise.
    pub fn slot_feeder(&self, match_: &Match, position: Position) -> Option<&'a Match> {
        let feeders = self.direct_feeders(match_);

        match feeders.as_slice() {
            [] => None,
            [only] => {
                // Not the lowest/highest rule: a lone feeder leaves the other slot open
                let target = if match_.is_assigned(Position::Team1)
                    && !match_.is_assigned(Position::Team2)
                {
                    Position::Team2
                } else {
                    Position::Team1
                };

                (position == target).then_some(*only)
            }
            [first, .., last] => {
                if feeders.len() > 2 {
                    log::warn!(
                        "match {} has {} feeders from round {}, using matches {} and {}",
                        match_.id,
                        feeders.len(),
                        match_.round - 1,
                        first.match_number,
                        last.match_number
                    );
                }

                Some(match position {
                    Position::Team1 => *first,
                    Position::Team2 => *last,
                })
            }
        }
    }

    /// Returns a match id that lies on a `next_match_id` cycle, if any.
    pub fn find_cycle(&self) -> Option<MatchId> {
        let mut acyclic = BTreeSet::new();

        for &start in self.matches.keys() {
            let mut path = BTreeSet::new();
            let mut current = Some(start);

            while let Some(id) = current {
                if acyclic.contains(&id) {
                    break;
                }
                if !path.insert(id) {
                    return Some(id);
                }
                current = self.get(id).and_then(|x| x.next_match_id);
            }

            acyclic.extend(path);
        }

        None
    }
}

/// Validates the structure of a snapshot.
///
/// The resolver and the ranking engine tolerate every violation reported here; this is for
/// tooling that wants to surface bad server data.
pub fn check_consistency(matches: &[Match]) -> Result<(), BracketError> {
    let mut ids = BTreeSet::new();
    for match_ in matches {
        if !ids.insert(match_.id) {
            return Err(BracketError::DuplicateMatch { id: match_.id });
        }
    }

    for match_ in matches {
        if let Some(next_match_id) = match_.next_match_id {
            if !ids.contains(&next_match_id) {
                return Err(BracketError::UnknownNextMatch {
                    id: match_.id,
                    next_match_id,
                });
            }
        }

        if let Some(winner_id) = match_.winner_id {
            if match_.team_1_id != Some(winner_id) && match_.team_2_id != Some(winner_id) {
                return Err(BracketError::WinnerNotParticipant {
                    id: match_.id,
                    winner_id,
                });
            }
        }
    }

    match FeederGraph::new(matches).find_cycle() {
        Some(id) => Err(BracketError::ProgressionCycle { id }),
        None => Ok(()),
    }
}
