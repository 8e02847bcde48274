//! Unit tests for bonus point allocation

use super::*;
use crate::fpl::types::{FixtureStat, LiveStats};
use serde_json::json;

fn bps(rows: &[(u32, i32)]) -> BTreeMap<PlayerId, i32> {
    rows.iter()
        .map(|&(id, value)| (PlayerId::new(id), value))
        .collect()
}

fn awarded(rows: &[(u32, u8)]) -> BTreeMap<PlayerId, u8> {
    rows.iter()
        .map(|&(id, value)| (PlayerId::new(id), value))
        .collect()
}

fn entries(rows: &[(u32, i32)]) -> Vec<StatEntry> {
    rows.iter()
        .map(|&(id, value)| StatEntry {
            element: PlayerId::new(id),
            value,
        })
        .collect()
}

fn award(id: u32, value: u8) -> BonusAward {
    BonusAward {
        element: PlayerId::new(id),
        value,
    }
}

#[cfg(test)]
mod allocation_tests {
    use super::*;

    #[test]
    fn test_clear_top_three() {
        let result = allocate_bonus(&bps(&[(1, 40), (2, 32), (3, 28), (4, 20)]));
        assert_eq!(result, awarded(&[(1, 3), (2, 2), (3, 1)]));
    }

    #[test]
    fn test_tie_for_second_gets_no_third_tier() {
        let result = allocate_bonus(&bps(&[(1, 30), (2, 25), (3, 25), (4, 10)]));
        assert_eq!(result, awarded(&[(1, 3), (2, 2), (3, 2)]));
    }

    #[test]
    fn test_three_way_tie_for_first() {
        let result = allocate_bonus(&bps(&[(1, 30), (2, 30), (3, 30), (4, 10)]));
        assert_eq!(result, awarded(&[(1, 3), (2, 3), (3, 3)]));
    }

    #[test]
    fn test_two_way_tie_for_first_then_clear_second() {
        let result = allocate_bonus(&bps(&[(1, 30), (2, 30), (3, 20), (4, 10)]));
        assert_eq!(result, awarded(&[(1, 3), (2, 3), (3, 2)]));
    }

    #[test]
    fn test_two_way_tie_for_first_then_tie_for_second() {
        let result = allocate_bonus(&bps(&[(1, 30), (2, 30), (3, 20), (4, 20), (5, 5)]));
        assert_eq!(result, awarded(&[(1, 3), (2, 3), (3, 2), (4, 2)]));
    }

    #[test]
    fn test_tie_for_third_shares_one_point() {
        let result = allocate_bonus(&bps(&[(1, 30), (2, 25), (3, 20), (4, 20), (5, 3)]));
        assert_eq!(result, awarded(&[(1, 3), (2, 2), (3, 1), (4, 1)]));
    }

    #[test]
    fn test_second_place_tie_after_clear_winner() {
        let result = allocate_bonus(&bps(&[(1, 30), (2, 20), (3, 20), (4, 10)]));
        assert_eq!(result, awarded(&[(1, 3), (2, 2), (3, 2)]));
    }

    #[test]
    fn test_fewer_than_three_distinct_values() {
        assert_eq!(allocate_bonus(&bps(&[(1, 12)])), awarded(&[(1, 3)]));
        assert_eq!(
            allocate_bonus(&bps(&[(1, 12), (2, 8)])),
            awarded(&[(1, 3), (2, 2)])
        );
        assert_eq!(
            allocate_bonus(&bps(&[(1, 12), (2, 12)])),
            awarded(&[(1, 3), (2, 3)])
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(allocate_bonus(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_zero_and_negative_scores_earn_nothing() {
        assert!(allocate_bonus(&bps(&[(1, 0), (2, 0), (3, 0)])).is_empty());
        assert_eq!(
            allocate_bonus(&bps(&[(1, 6), (2, 0), (3, -3)])),
            awarded(&[(1, 3)])
        );
    }

    #[test]
    fn test_input_not_modified() {
        let input = bps(&[(1, 30), (2, 25)]);
        let copy = input.clone();
        let _ = allocate_bonus(&input);
        assert_eq!(input, copy);
    }
}

#[cfg(test)]
mod fixture_tests {
    use super::*;

    fn fixture(started: Option<bool>, finished: bool) -> Fixture {
        Fixture {
            id: 1,
            event: None,
            team_h: 12,
            team_a: 13,
            started,
            finished,
            stats: vec![
                FixtureStat {
                    identifier: "bps".to_string(),
                    home: entries(&[(10, 35), (11, 22)]),
                    away: entries(&[(20, 35), (21, 18)]),
                },
                FixtureStat {
                    identifier: "bonus".to_string(),
                    home: entries(&[(10, 3)]),
                    away: entries(&[(20, 3), (21, 1)]),
                },
            ],
        }
    }

    #[test]
    fn test_provisional_bonus_pools_both_sides() {
        let table = MatchBps {
            home: entries(&[(10, 35), (11, 22)]),
            away: entries(&[(20, 35), (21, 18)]),
        };

        let awards = table.provisional_bonus();
        assert_eq!(awards.home, vec![award(10, 3), award(11, 2)]);
        assert_eq!(awards.away, vec![award(20, 3)]);
    }

    #[test]
    fn test_provisional_bonus_orders_by_value() {
        let table = MatchBps {
            home: entries(&[(5, 10), (6, 30), (7, 20)]),
            away: vec![],
        };
        let awards = table.provisional_bonus();
        assert_eq!(awards.home, vec![award(6, 3), award(7, 2), award(5, 1)]);
        assert!(awards.away.is_empty());
    }

    #[test]
    fn test_finished_fixture_uses_official_bonus() {
        let awards = fixture(Some(true), true).bonus(true);
        assert_eq!(awards.home, vec![award(10, 3)]);
        assert_eq!(awards.away, vec![award(20, 3), award(21, 1)]);
    }

    #[test]
    fn test_started_fixture_provisional_only_on_request() {
        let live = fixture(Some(true), false);
        assert!(live.bonus(false).is_empty());

        let awards = live.bonus(true);
        assert_eq!(awards.iter().count(), 3);
    }

    #[test]
    fn test_unstarted_fixture_has_no_bonus() {
        assert!(fixture(None, false).bonus(true).is_empty());
        assert!(fixture(Some(false), false).bonus(true).is_empty());
    }

    #[test]
    fn test_fixture_without_stats() {
        let mut empty = fixture(Some(true), false);
        empty.stats.clear();
        assert!(empty.bonus(true).is_empty());
        assert_eq!(empty.match_bps(), MatchBps::default());
    }

    #[test]
    fn test_side_awards_wire_format() {
        let awards = SideAwards {
            home: vec![award(10, 3)],
            away: vec![],
        };
        assert_eq!(
            serde_json::to_value(&awards).unwrap(),
            json!({"h": [{"element": 10, "value": 3}], "a": []})
        );
    }
}

#[cfg(test)]
mod live_bonus_tests {
    use super::*;

    fn live(rows: &[(u32, i32, u8)]) -> LiveIndex {
        rows.iter()
            .map(|&(id, points, bonus)| {
                (
                    PlayerId::new(id),
                    LiveStats {
                        minutes: 90,
                        total_points: points,
                        bps: 0,
                        bonus,
                    },
                )
            })
            .collect()
    }

    fn in_play() -> Fixture {
        Fixture {
            id: 7,
            event: None,
            team_h: 1,
            team_a: 2,
            started: Some(true),
            finished: false,
            stats: vec![FixtureStat {
                identifier: "bps".to_string(),
                home: entries(&[(1, 40), (2, 30)]),
                away: entries(&[(3, 20), (4, 10)]),
            }],
        }
    }

    #[test]
    fn test_provisional_bonus_added_to_live_points() {
        let before = live(&[(1, 8, 0), (2, 6, 0), (3, 2, 0), (4, 2, 0)]);
        let after = apply_provisional_bonus(&before, &[in_play()]);

        assert_eq!(after[&PlayerId::new(1)].total_points, 11);
        assert_eq!(after[&PlayerId::new(1)].bonus, 3);
        assert_eq!(after[&PlayerId::new(2)].total_points, 8);
        assert_eq!(after[&PlayerId::new(3)].total_points, 3);
        assert_eq!(after[&PlayerId::new(4)].total_points, 2);
        // Input untouched
        assert_eq!(before[&PlayerId::new(1)].total_points, 8);
    }

    #[test]
    fn test_confirmed_bonus_not_added_twice() {
        let before = live(&[(1, 11, 3), (2, 6, 0)]);
        let after = apply_provisional_bonus(&before, &[in_play()]);

        assert_eq!(after[&PlayerId::new(1)].total_points, 11);
        assert_eq!(after[&PlayerId::new(2)].total_points, 8);
    }

    #[test]
    fn test_finished_fixtures_are_skipped() {
        let mut done = in_play();
        done.finished = true;
        let before = live(&[(1, 8, 0)]);
        assert_eq!(apply_provisional_bonus(&before, &[done]), before);
    }
}
