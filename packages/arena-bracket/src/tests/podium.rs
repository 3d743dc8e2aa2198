use crate::tests::helpers::{
    advancing_to, double_elimination, empty_match, played, single_elimination, A, B, C, D,
};
use crate::{podium, Podium};

#[test]
fn test_double_elimination_after_reset() {
    assert_eq!(
        podium(&double_elimination()),
        Some(Podium {
            first: A,
            second: C,
            third: Some(B),
        })
    );
}

#[test]
fn test_double_elimination_awaiting_reset() {
    let mut matches = double_elimination();
    matches.pop();

    // The losers bracket champion took the first final, the reset is still to come
    assert_eq!(podium(&matches), None);
}

#[test]
fn test_double_elimination_winners_champion_takes_first_final() {
    let mut matches = double_elimination();
    matches.pop();
    matches[5].winner_id = Some(A);

    assert_eq!(
        podium(&matches),
        Some(Podium {
            first: A,
            second: C,
            third: Some(B),
        })
    );
}

#[test]
fn test_double_elimination_undecided_final() {
    let mut matches = double_elimination();
    matches.pop();
    matches[5].winner_id = None;

    assert_eq!(podium(&matches), None);
}

#[test]
fn test_single_elimination() {
    let matches = vec![
        advancing_to(played(1, 1, 1, A, B, A), 3),
        advancing_to(played(2, 1, 2, C, D, D), 3),
        played(3, 2, 1, A, D, D),
    ];

    assert_eq!(
        podium(&matches),
        Some(Podium {
            first: D,
            second: A,
            third: None,
        })
    );
}

#[test]
fn test_single_elimination_in_progress() {
    let matches = vec![
        advancing_to(played(1, 1, 1, A, B, A), 3),
        advancing_to(played(2, 1, 2, C, D, D), 3),
        empty_match(3, 2, 1),
    ];

    assert_eq!(podium(&matches), None);
    assert_eq!(podium(&[]), None);
}

#[test]
fn test_single_elimination_generated() {
    let matches = single_elimination(8, &[]);

    // Slot 1 always advances, so team 1 beats team 5 in the final
    assert_eq!(
        podium(&matches),
        Some(Podium {
            first: 1,
            second: 5,
            third: None,
        })
    );
}
