use std::collections::HashMap;

use anyhow::bail;
use arena_bracket::{
    check_consistency, compute_rankings, podium, BracketView, FeederGraph, Match, MatchKind,
    Outcome, Position, TeamId, TeamRanking,
};
use itertools::Itertools;

pub fn run(command: &str, matches: &[Match]) -> anyhow::Result<String> {
    match command {
        "rankings" => Ok(rankings_table(&compute_rankings(matches))),
        "labels" => Ok(slot_labels(matches)),
        "bracket" => Ok(serde_json::to_string_pretty(&BracketView::new(matches))?),
        "podium" => Ok(podium_summary(matches)),
        "validate" => {
            check_consistency(matches)?;
            Ok(format!("snapshot is consistent ({} matches)", matches.len()))
        }
        _ => bail!(
            "unknown command {}, expected rankings, labels, bracket, podium or validate",
            command
        ),
    }
}

fn history(ranking: &TeamRanking) -> String {
    ranking
        .match_history
        .iter()
        .map(|x| {
            let result = match x.result {
                Outcome::Win => 'W',
                Outcome::Loss => 'L',
            };
            format!("{} R{} M{}", result, x.round, x.match_number)
        })
        .join(", ")
}

pub fn rankings_table(rankings: &[TeamRanking]) -> String {
    let header = format!("{:>4}  {:<24} {:>3} {:>3}  History", "Rank", "Team", "W", "L");

    std::iter::once(header)
        .chain(rankings.iter().map(|x| {
            format!(
                "{:>4}  {:<24} {:>3} {:>3}  {}",
                x.rank,
                x.team_name,
                x.wins,
                x.losses,
                history(x)
            )
        }))
        .join("\n")
}

pub fn slot_labels(matches: &[Match]) -> String {
    let graph = FeederGraph::new(matches);
    let view = BracketView::new(matches);

    let line = |title: String, match_: &Match| {
        format!(
            "{}: {} vs {}",
            title,
            graph.resolve_slot(match_, Position::Team1).display_name(),
            graph.resolve_slot(match_, Position::Team2).display_name()
        )
    };

    let winners = view.winners.iter().flat_map(|column| {
        column.matches.iter().map(move |x| {
            (
                format!("Winners Round {} Match {}", column.round, x.match_number),
                x,
            )
        })
    });
    let losers = view.losers.iter().flat_map(|column| {
        column.matches.iter().map(move |x| {
            (
                format!("Losers Round {} Match {}", column.round, x.match_number),
                x,
            )
        })
    });
    let championship = view.championship.iter().map(|x| {
        let title = match x.kind {
            MatchKind::ChampionshipReset => "Championship Reset",
            _ => "Championship",
        };
        (title.to_string(), x)
    });

    winners
        .chain(losers)
        .chain(championship)
        .map(|(title, x)| line(title, x))
        .join("\n")
}

pub fn podium_summary(matches: &[Match]) -> String {
    let names: HashMap<TeamId, String> = compute_rankings(matches)
        .into_iter()
        .map(|x| (x.team_id, x.team_name))
        .collect();
    let name = |id: TeamId| {
        names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Team {}", id))
    };

    match podium(matches) {
        Some(podium) => {
            let mut lines = vec![
                format!("1st: {}", name(podium.first)),
                format!("2nd: {}", name(podium.second)),
            ];
            if let Some(third) = podium.third {
                lines.push(format!("3rd: {}", name(third)));
            }
            lines.join("\n")
        }
        None => "bracket is not final yet".to_string(),
    }
}
