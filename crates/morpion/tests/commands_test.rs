//! Tests for the headless commands.

use morpion::{analyse, self_play};
use morpion_core::{Position, Score};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_analyse_takes_the_win() {
    let mut rng = StdRng::seed_from_u64(3);
    let report = analyse("OO.XX....", &mut rng).unwrap();
    assert_eq!(report.chosen.position, Position::TopRight);
    assert_eq!(report.chosen.score, Score::Win);
    assert_eq!(report.scores[8], Some(Score::Loss));
}

#[test]
fn test_analyse_report_serializes() {
    let mut rng = StdRng::seed_from_u64(3);
    let report = analyse("XX..O....", &mut rng).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["chosen"]["position"], "TopRight");
    assert_eq!(json["chosen"]["score"], "Draw");
    assert!(json["scores"][0].is_null());
}

#[test]
fn test_self_play_never_loses() {
    let mut rng = StdRng::seed_from_u64(21);
    let scores = self_play(6, &mut rng).unwrap();
    assert_eq!(scores.rounds(), 6);
    assert_eq!(*scores.x_wins(), 0);
}
