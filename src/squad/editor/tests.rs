//! Unit tests for lineup edits

use super::*;
use crate::error::FplError;
use crate::squad::test_support::*;

fn p(id: u32) -> PlayerId {
    PlayerId::new(id)
}

fn slot_of(lineup: &Lineup, id: u32) -> u8 {
    lineup.get(p(id)).unwrap().slot
}

fn edit_error(result: Result<Lineup>) -> EditError {
    match result {
        Err(FplError::Edit(err)) => err,
        Err(other) => panic!("Expected edit rejection, got {:?}", other),
        Ok(_) => panic!("Expected edit rejection, got a lineup"),
    }
}

fn armbands(lineup: &Lineup) -> (usize, usize) {
    (
        lineup.picks().iter().filter(|p| p.is_captain).count(),
        lineup.picks().iter().filter(|p| p.is_vice_captain).count(),
    )
}

#[cfg(test)]
mod substitute_tests {
    use super::*;

    #[test]
    fn test_same_position_swap_exchanges_slots() {
        let lineup = sample_lineup();
        let edited = substitute(&lineup, &[p(13)], &[p(3)]).unwrap();

        assert_eq!(slot_of(&edited, 13), 3);
        assert_eq!(slot_of(&edited, 3), 13);
        assert_eq!(edited.formation().to_string(), "4-4-2");
        assert_eq!(edited.captain().unwrap().player_id, p(6));
    }

    #[test]
    fn test_same_position_swap_keeps_flags_with_player() {
        let lineup = sample_lineup();
        let edited = substitute(&lineup, &[p(14)], &[p(6)]).unwrap();

        assert_eq!(slot_of(&edited, 14), 6);
        assert!(edited.get(p(6)).unwrap().is_captain);
        assert!(edited.get(p(6)).unwrap().is_bench());
    }

    #[test]
    fn test_cross_position_swap_moves_armband_with_slot() {
        let lineup = sample_lineup();
        let edited = substitute(&lineup, &[p(13)], &[p(6)]).unwrap();

        assert_eq!(
            ids(edited.starters()),
            vec![1, 2, 3, 4, 5, 13, 7, 8, 9, 10, 11]
        );
        assert_eq!(ids(edited.bench()), vec![12, 6, 14, 15]);
        assert_eq!(edited.formation().to_string(), "5-3-2");
        assert_eq!(edited.captain().unwrap().player_id, p(13));
        assert!(!edited.get(p(6)).unwrap().is_captain);
    }

    #[test]
    fn test_cross_position_swap_resorts_starters() {
        let lineup = sample_lineup();
        let edited = substitute(&lineup, &[p(14)], &[p(2)]).unwrap();

        assert_eq!(
            ids(edited.starters()),
            vec![1, 3, 4, 5, 14, 6, 7, 8, 9, 10, 11]
        );
        assert_eq!(edited.formation().to_string(), "3-5-2");
        assert_eq!(slot_of(&edited, 14), 5);
        assert_eq!(slot_of(&edited, 2), 14);
        for (i, pick) in edited.picks().iter().enumerate() {
            assert_eq!(pick.slot as usize, i + 1);
        }
    }

    #[test]
    fn test_goalkeeper_swap() {
        let lineup = sample_lineup();
        let edited = substitute(&lineup, &[p(12)], &[p(1)]).unwrap();

        assert_eq!(edited.starters()[0].player_id, p(12));
        assert_eq!(edited.bench_goalkeeper().player_id, p(1));
    }

    #[test]
    fn test_multiple_swaps() {
        let lineup = sample_lineup();
        let edited = substitute(&lineup, &[p(13), p(15)], &[p(7), p(8)]).unwrap();

        assert_eq!(edited.formation().to_string(), "5-2-3");
        assert_eq!(ids(edited.bench()), vec![12, 7, 14, 8]);
    }

    #[test]
    fn test_swap_then_reverse_restores_lineup() {
        let lineup = sample_lineup();

        let there = substitute(&lineup, &[p(13)], &[p(3)]).unwrap();
        let back = substitute(&there, &[p(3)], &[p(13)]).unwrap();
        assert_eq!(back, lineup);

        let there = substitute(&lineup, &[p(13)], &[p(6)]).unwrap();
        let back = substitute(&there, &[p(6)], &[p(13)]).unwrap();
        assert_eq!(back, lineup);

        let there = substitute(&lineup, &[p(15)], &[p(9)]).unwrap();
        let back = substitute(&there, &[p(9)], &[p(15)]).unwrap();
        assert_eq!(back, lineup);
    }

    #[test]
    fn test_empty_request_is_identity() {
        let lineup = sample_lineup();
        assert_eq!(substitute(&lineup, &[], &[]).unwrap(), lineup);
    }
}

#[cfg(test)]
mod rejection_tests {
    use super::*;

    #[test]
    fn test_too_many_substitutions() {
        let lineup = sample_lineup();
        let players_in = [p(12), p(13), p(14), p(15), p(16)];
        let players_out = [p(1), p(2), p(3), p(4), p(5)];

        assert_eq!(
            edit_error(substitute(&lineup, &players_in, &players_out)),
            EditError::TooManySubstitutions { count: 5, max: 4 }
        );
    }

    #[test]
    fn test_unbalanced_lists() {
        let lineup = sample_lineup();
        assert_eq!(
            edit_error(substitute(&lineup, &[p(13), p(14)], &[p(3)])),
            EditError::UnbalancedSubstitution {
                players_in: 2,
                players_out: 1
            }
        );
    }

    #[test]
    fn test_lists_must_be_disjoint() {
        let lineup = sample_lineup();
        assert_eq!(
            edit_error(substitute(&lineup, &[p(13)], &[p(13)])),
            EditError::NotDisjoint(p(13))
        );
    }

    #[test]
    fn test_repeated_incoming_player() {
        let lineup = sample_lineup();
        assert_eq!(
            edit_error(substitute(&lineup, &[p(13), p(13)], &[p(2), p(3)])),
            EditError::DuplicatePlayer(p(13))
        );
    }

    #[test]
    fn test_repeated_outgoing_player() {
        let lineup = sample_lineup();
        assert_eq!(
            edit_error(substitute(&lineup, &[p(13), p(14)], &[p(2), p(2)])),
            EditError::DuplicatePlayer(p(2))
        );
    }

    #[test]
    fn test_outgoing_must_be_starters() {
        let lineup = sample_lineup();
        assert_eq!(
            edit_error(substitute(&lineup, &[p(14)], &[p(13)])),
            EditError::NotAStarter(p(13))
        );
    }

    #[test]
    fn test_incoming_must_be_on_bench() {
        let lineup = sample_lineup();
        assert_eq!(
            edit_error(substitute(&lineup, &[p(4)], &[p(3)])),
            EditError::NotOnBench(p(4))
        );
    }

    #[test]
    fn test_players_must_be_in_squad() {
        let lineup = sample_lineup();
        assert_eq!(
            edit_error(substitute(&lineup, &[p(13)], &[p(99)])),
            EditError::NotInSquad(p(99))
        );
        assert_eq!(
            edit_error(substitute(&lineup, &[p(99)], &[p(3)])),
            EditError::NotInSquad(p(99))
        );
    }

    #[test]
    fn test_illegal_formation_rejects_whole_edit() {
        let lineup = sample_lineup();
        let err = edit_error(substitute(&lineup, &[p(13), p(14)], &[p(10), p(11)]));

        match err {
            EditError::IllegalFormation(formation) => {
                assert_eq!(formation.forwards, 0);
                assert_eq!(formation.to_string(), "5-5-0");
            }
            other => panic!("Expected IllegalFormation, got {:?}", other),
        }
        assert_eq!(lineup, sample_lineup());
    }

    #[test]
    fn test_outfield_player_for_goalkeeper_is_illegal() {
        let lineup = sample_lineup();
        assert!(matches!(
            edit_error(substitute(&lineup, &[p(13)], &[p(1)])),
            EditError::IllegalFormation(_)
        ));
    }
}

#[cfg(test)]
mod captaincy_tests {
    use super::*;

    #[test]
    fn test_set_captain_moves_armband() {
        let lineup = sample_lineup();
        let edited = set_captain(&lineup, p(7)).unwrap();

        assert_eq!(edited.captain().unwrap().player_id, p(7));
        assert_eq!(edited.vice_captain().unwrap().player_id, p(10));
        assert_eq!(armbands(&edited), (1, 1));
    }

    #[test]
    fn test_set_captain_on_vice_captain_swaps_roles() {
        let lineup = sample_lineup();
        let edited = set_captain(&lineup, p(10)).unwrap();

        assert_eq!(edited.captain().unwrap().player_id, p(10));
        assert_eq!(edited.vice_captain().unwrap().player_id, p(6));
    }

    #[test]
    fn test_set_vice_captain_on_captain_swaps_roles() {
        let lineup = sample_lineup();
        let edited = set_vice_captain(&lineup, p(6)).unwrap();

        assert_eq!(edited.captain().unwrap().player_id, p(10));
        assert_eq!(edited.vice_captain().unwrap().player_id, p(6));
    }

    #[test]
    fn test_set_captain_on_current_captain_is_noop() {
        let lineup = sample_lineup();
        assert_eq!(set_captain(&lineup, p(6)).unwrap(), lineup);
    }

    #[test]
    fn test_captain_must_be_in_squad() {
        let lineup = sample_lineup();
        assert_eq!(
            edit_error(set_captain(&lineup, p(42))),
            EditError::NotInSquad(p(42))
        );
        assert_eq!(
            edit_error(set_vice_captain(&lineup, p(42))),
            EditError::NotInSquad(p(42))
        );
    }

    #[test]
    fn test_captain_then_vice_to_previous_captain() {
        let lineup = sample_lineup();
        let previous = lineup.captain().unwrap().player_id;

        let edited = set_captain(&lineup, p(8)).unwrap();
        let edited = set_vice_captain(&edited, previous).unwrap();

        assert_eq!(edited.captain().unwrap().player_id, p(8));
        assert_eq!(edited.vice_captain().unwrap().player_id, previous);
        assert_eq!(armbands(&edited), (1, 1));
    }

    #[test]
    fn test_captain_vice_round_trip_from_vice() {
        let lineup = sample_lineup();
        let previous = lineup.captain().unwrap().player_id;

        // New captain is the current vice: the old captain becomes vice already
        let edited = set_captain(&lineup, p(10)).unwrap();
        let edited = set_vice_captain(&edited, previous).unwrap();

        assert_eq!(edited.captain().unwrap().player_id, p(10));
        assert_eq!(edited.vice_captain().unwrap().player_id, previous);
        assert_eq!(armbands(&edited), (1, 1));
    }
}

#[cfg(test)]
mod bench_and_request_tests {
    use super::*;

    #[test]
    fn test_reorder_bench() {
        let lineup = sample_lineup();
        let edited = reorder_bench(&lineup, p(13), p(15)).unwrap();

        assert_eq!(ids(edited.bench()), vec![12, 15, 14, 13]);
        assert_eq!(edited.starters(), lineup.starters());
    }

    #[test]
    fn test_reorder_bench_rejects_goalkeeper_and_starters() {
        let lineup = sample_lineup();
        assert_eq!(
            edit_error(reorder_bench(&lineup, p(12), p(13))),
            EditError::BenchGoalkeeperFixed(p(12))
        );
        assert_eq!(
            edit_error(reorder_bench(&lineup, p(13), p(2))),
            EditError::NotOnBench(p(2))
        );
    }

    #[test]
    fn test_apply_edit_sets_captain_then_substitutes() {
        let lineup = sample_lineup();
        let request = EditRequest {
            players_in: vec![p(13)],
            players_out: vec![p(3)],
            captain: Some(p(7)),
            vice_captain: Some(p(13)),
        };

        let edited = apply_edit(&lineup, &request).unwrap();
        assert_eq!(edited.captain().unwrap().player_id, p(7));
        assert_eq!(edited.vice_captain().unwrap().player_id, p(13));
        assert_eq!(slot_of(&edited, 13), 3);
    }

    #[test]
    fn test_apply_edit_is_all_or_nothing() {
        let lineup = sample_lineup();
        let request = EditRequest {
            players_in: vec![p(13), p(14)],
            players_out: vec![p(10), p(11)],
            captain: Some(p(7)),
            vice_captain: None,
        };

        assert!(matches!(
            edit_error(apply_edit(&lineup, &request)),
            EditError::IllegalFormation(_)
        ));
        assert_eq!(lineup.captain().unwrap().player_id, p(6));
    }

    #[test]
    fn test_edit_request_deserializes_with_defaults() {
        let request: EditRequest =
            serde_json::from_str(r#"{"players_in": [13], "players_out": [3]}"#).unwrap();
        assert_eq!(request.players_in, vec![p(13)]);
        assert!(request.captain.is_none());
    }
}
