
pub(crate) const SNAPSHOT: &str = r#"[
    {
        "id": 1, "round": 1, "match_number": 1,
        "team1_id": 1, "team2_id": 2, "winner_id": 1, "next_match_id": 3,
        "team1": {"id": 1, "name": "Red", "seed": 1},
        "team2": {"id": 2, "name": "Blue", "seed": 4}
    },
    {
        "id": 2, "round": 1, "match_number": 2,
        "team1_id": 3, "team2_id": 4, "winner_id": 4, "next_match_id": 3,
        "team1": {"id": 3, "name": "Green", "seed": 2},
        "team2": {"id": 4, "name": "Gold", "seed": 3}
    },
    {
        "id": 3, "round": 2, "match_number": 1,
        "team1_id": 1, "team2_id": 4, "winner_id": 1, "next_match_id": null,
        "team1": {"id": 1, "name": "Red", "seed": 1},
        "team2": {"id": 4, "name": "Gold", "seed": 3}
    }
]"#;

pub(crate) const PENDING_SNAPSHOT: &str = r#"[
    {
        "id": 1, "round": 1, "match_number": 1,
        "team1_id": 1, "team2_id": 2, "winner_id": null, "next_match_id": 3,
        "team1": {"id": 1, "name": "Red", "seed": 1},
        "team2": {"id": 2, "name": "Blue", "seed": 4}
    },
    {
        "id": 2, "round": 1, "match_number": 2,
        "team1_id": 3, "team2_id": 4, "winner_id": null, "next_match_id": 3
    },
    {"id": 3, "round": 2, "match_number": 1}
]"#;
