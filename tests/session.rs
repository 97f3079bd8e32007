//! Game session integration tests.

use cgrs::{
    AdvanceError, Card, Feedback, GameOptions, GameSession, GameState, Guess, GuessError,
    GuessMode, GuessOutcome, Hint, HintError, RankBand, Suit, Tick,
};

fn suit_session(seed: u64) -> GameSession {
    GameSession::new(GameOptions::default(), seed)
}

fn rank_session(seed: u64) -> GameSession {
    GameSession::new(
        GameOptions::default().with_guess_mode(GuessMode::Rank),
        seed,
    )
}

fn current_target(session: &GameSession) -> Card {
    session.current_level().unwrap().targets()[session.active_guess_index()]
}

fn correct_guess(session: &GameSession) -> Guess {
    let target = current_target(session);
    match session.options.guess_mode {
        GuessMode::Suit => Guess::Suit(target.suit),
        GuessMode::Rank => Guess::Rank(target.rank),
    }
}

fn wrong_guess(session: &GameSession) -> Guess {
    let target = current_target(session);
    match session.options.guess_mode {
        GuessMode::Suit => Guess::Suit(if target.suit == Suit::Hearts {
            Suit::Spades
        } else {
            Suit::Hearts
        }),
        GuessMode::Rank => Guess::Rank(if target.rank == 2 { 3 } else { 2 }),
    }
}

/// Guesses correctly until the level (or game) is over.
fn clear_level(session: &mut GameSession) -> GuessOutcome {
    loop {
        match session.submit_guess(Some(correct_guess(session))).unwrap() {
            GuessOutcome::FirstTargetCorrect => {}
            outcome => return outcome,
        }
    }
}

#[test]
fn start_enters_awaiting_guess_with_full_timer() {
    let mut session = suit_session(1);
    assert_eq!(session.state(), GameState::Idle);

    session.start(1).unwrap();
    assert_eq!(session.state(), GameState::AwaitingGuess);
    assert_eq!(session.level_number(), 1);
    assert_eq!(session.seconds_left(), 15);
    assert_eq!(session.hints_remaining(), 3);
    assert_eq!(session.score(), 0);
    assert_eq!(session.active_guess_index(), 0);
    assert_eq!(session.current_level().unwrap().targets().len(), 1);
}

#[test]
fn start_rejects_out_of_range_levels() {
    let mut session = suit_session(2);

    assert_eq!(session.start(0).unwrap_err(), cgrs::StartError::InvalidLevel);
    assert_eq!(
        session.start(11).unwrap_err(),
        cgrs::StartError::InvalidLevel
    );
    assert_eq!(session.state(), GameState::Idle);
}

#[test]
fn full_game_flow_to_win() {
    let mut session = rank_session(42);
    session.start(1).unwrap();

    let mut expected_score = 0;
    for level in 1..=10u8 {
        assert_eq!(session.level_number(), level);
        let expected_targets = if level == 10 { 2 } else { 1 };
        assert_eq!(
            session.current_level().unwrap().targets().len(),
            expected_targets
        );

        let outcome = clear_level(&mut session);
        let expected_award = 10 + u32::from(level);
        expected_score += expected_award;

        if level < 10 {
            assert_eq!(
                outcome,
                GuessOutcome::LevelComplete {
                    awarded: expected_award
                }
            );
            assert_eq!(session.state(), GameState::LevelComplete);
            assert_eq!(session.advance().unwrap(), level + 1);
        } else {
            assert_eq!(outcome, GuessOutcome::GameWon { awarded: 20 });
            assert_eq!(session.state(), GameState::Won);
            assert_eq!(session.feedback(), Feedback::Win);
        }
    }

    assert_eq!(session.score(), expected_score);
    assert_eq!(expected_score, 155);
}

#[test]
fn incorrect_then_correct_rank_guess_at_level_three() {
    let mut session = rank_session(7);
    session.start(3).unwrap();

    let target = current_target(&session);
    assert_eq!(
        session.submit_guess(Some(wrong_guess(&session))).unwrap(),
        GuessOutcome::Incorrect
    );
    assert_eq!(session.state(), GameState::AwaitingGuess);
    assert_eq!(session.feedback(), Feedback::Incorrect);
    assert_eq!(session.score(), 0);

    assert_eq!(
        session.submit_guess(Some(Guess::Rank(target.rank))).unwrap(),
        GuessOutcome::LevelComplete { awarded: 13 }
    );
    assert_eq!(session.score(), 13);
    assert_eq!(session.advance().unwrap(), 4);
    assert_eq!(session.level_number(), 4);
}

#[test]
fn final_level_requires_two_sequential_guesses_and_rearms_timer() {
    let mut session = suit_session(9);
    session.start(10).unwrap();
    assert_eq!(session.current_level().unwrap().targets().len(), 2);

    session.tick();
    session.tick();
    assert_eq!(session.seconds_left(), 13);
    assert_eq!(session.active_guess_index(), 0);

    assert_eq!(
        session.submit_guess(Some(correct_guess(&session))).unwrap(),
        GuessOutcome::FirstTargetCorrect
    );
    assert_eq!(session.active_guess_index(), 1);
    assert_eq!(session.seconds_left(), 15);
    assert_eq!(session.state(), GameState::AwaitingGuess);
    assert_eq!(session.feedback(), Feedback::Correct);

    assert_eq!(
        session.submit_guess(Some(correct_guess(&session))).unwrap(),
        GuessOutcome::GameWon { awarded: 20 }
    );
    assert_eq!(session.state(), GameState::Won);
    assert_eq!(session.score(), 20);
}

#[test]
fn scoring_with_and_without_hint_for_every_level() {
    for level in 1..=10u8 {
        let mut session = rank_session(u64::from(level) + 100);
        session.start(level).unwrap();
        let outcome = clear_level(&mut session);
        let awarded = match outcome {
            GuessOutcome::LevelComplete { awarded } | GuessOutcome::GameWon { awarded } => awarded,
            other => panic!("unexpected outcome {other:?}"),
        };
        assert_eq!(awarded, 10 + u32::from(level), "level {level} without hint");

        let mut session = rank_session(u64::from(level) + 200);
        session.start(level).unwrap();
        if level == 10 {
            // The hint must land on the scoring guess, which is the second
            // one on the final level.
            assert_eq!(
                session.submit_guess(Some(correct_guess(&session))).unwrap(),
                GuessOutcome::FirstTargetCorrect
            );
        }
        session.use_hint().unwrap();
        let outcome = clear_level(&mut session);
        let awarded = match outcome {
            GuessOutcome::LevelComplete { awarded } | GuessOutcome::GameWon { awarded } => awarded,
            other => panic!("unexpected outcome {other:?}"),
        };
        assert_eq!(awarded, 5, "level {level} with hint");
    }
}

#[test]
fn hint_on_final_level_first_guess_does_not_reduce_score() {
    let mut session = suit_session(5);
    session.start(10).unwrap();

    session.use_hint().unwrap();
    assert_eq!(session.hints_remaining(), 2);

    assert_eq!(
        session.submit_guess(Some(correct_guess(&session))).unwrap(),
        GuessOutcome::FirstTargetCorrect
    );
    assert_eq!(
        session.submit_guess(Some(correct_guess(&session))).unwrap(),
        GuessOutcome::GameWon { awarded: 20 }
    );
}

#[test]
fn hints_reveal_the_right_category() {
    let mut session = suit_session(8);
    session.start(2).unwrap();
    let target = current_target(&session);
    match session.use_hint().unwrap() {
        Hint::SuitColor(color) => assert_eq!(color, target.suit.color()),
        other => panic!("expected a suit color hint, got {other:?}"),
    }
    assert_eq!(session.feedback(), Feedback::Hint);

    let mut session = rank_session(8);
    session.start(2).unwrap();
    let target = current_target(&session);
    match session.use_hint().unwrap() {
        Hint::RankBand(band) => assert_eq!(band, RankBand::of(target.rank)),
        other => panic!("expected a rank band hint, got {other:?}"),
    }
}

#[test]
fn hint_pool_is_shared_across_levels_and_exhausts() {
    let mut session = suit_session(12);
    session.start(1).unwrap();

    session.use_hint().unwrap();
    assert_eq!(session.hints_remaining(), 2);
    assert_eq!(session.use_hint().unwrap_err(), HintError::AlreadyHinted);
    assert_eq!(session.hints_remaining(), 2);

    clear_level(&mut session);
    session.advance().unwrap();
    session.use_hint().unwrap();
    assert_eq!(session.hints_remaining(), 1);

    clear_level(&mut session);
    session.advance().unwrap();
    session.use_hint().unwrap();
    assert_eq!(session.hints_remaining(), 0);

    clear_level(&mut session);
    session.advance().unwrap();
    let score_before = session.score();
    assert_eq!(
        session.use_hint().unwrap_err(),
        HintError::NoHintsRemaining
    );
    assert_eq!(session.hints_remaining(), 0);
    assert_eq!(session.score(), score_before);
    assert_eq!(session.state(), GameState::AwaitingGuess);
}

#[test]
fn timeout_loses_the_attempt_without_score_change() {
    let mut session = suit_session(20);
    session.start(2).unwrap();

    for _ in 0..14 {
        assert!(matches!(session.tick(), Tick::Counting(_)));
    }
    assert_eq!(session.seconds_left(), 1);

    assert_eq!(session.tick(), Tick::TimedOut);
    assert_eq!(session.state(), GameState::Lost);
    assert_eq!(session.feedback(), Feedback::Timeout);
    assert_eq!(session.score(), 0);

    let snapshot = session.snapshot();
    let revealed = snapshot.revealed.expect("targets revealed on loss");
    assert_eq!(revealed, session.current_level().unwrap().targets().to_vec());
}

#[test]
fn stale_ticks_after_a_level_ends_are_ignored() {
    let mut session = suit_session(21);
    session.start(1).unwrap();
    clear_level(&mut session);
    assert_eq!(session.state(), GameState::LevelComplete);

    assert_eq!(session.tick(), Tick::Ignored);
    assert_eq!(session.state(), GameState::LevelComplete);
    assert_eq!(session.seconds_left(), 15);

    // Same once the game is lost.
    session.start(1).unwrap();
    for _ in 0..15 {
        session.tick();
    }
    assert_eq!(session.state(), GameState::Lost);
    assert_eq!(session.tick(), Tick::Ignored);
    assert_eq!(session.state(), GameState::Lost);
}

#[test]
fn restart_resets_score_hints_and_level() {
    let mut session = rank_session(30);
    session.start(1).unwrap();
    session.use_hint().unwrap();
    clear_level(&mut session);
    session.advance().unwrap();
    session.tick();
    assert_eq!(session.score(), 5);

    session.restart().unwrap();
    assert_eq!(session.score(), 0);
    assert_eq!(session.hints_remaining(), 3);
    assert_eq!(session.level_number(), 1);
    assert_eq!(session.state(), GameState::AwaitingGuess);
    assert_eq!(session.seconds_left(), 15);
    assert_eq!(session.active_guess_index(), 0);
}

#[test]
fn quit_returns_to_idle_and_rejects_further_commands() {
    let mut session = suit_session(31);
    session.start(1).unwrap();
    session.quit();

    assert_eq!(session.state(), GameState::Idle);
    assert!(session.current_level().is_none());
    assert_eq!(
        session
            .submit_guess(Some(Guess::Suit(Suit::Hearts)))
            .unwrap_err(),
        GuessError::InvalidState
    );
    assert_eq!(session.use_hint().unwrap_err(), HintError::InvalidState);
    assert_eq!(session.tick(), Tick::Ignored);
}

#[test]
fn guess_before_any_level_is_rejected() {
    let mut session = suit_session(32);
    assert_eq!(
        session.submit_guess(None).unwrap_err(),
        GuessError::InvalidState
    );
}

#[test]
fn no_selection_and_wrong_kind_guesses_count_as_incorrect() {
    let mut session = suit_session(33);
    session.start(1).unwrap();

    assert_eq!(session.submit_guess(None).unwrap(), GuessOutcome::Incorrect);

    // A rank guess in suit mode can never match.
    let target = current_target(&session);
    assert_eq!(
        session.submit_guess(Some(Guess::Rank(target.rank))).unwrap(),
        GuessOutcome::Incorrect
    );
    assert_eq!(session.state(), GameState::AwaitingGuess);
}

#[test]
fn advance_requires_a_completed_level() {
    let mut session = suit_session(34);
    assert_eq!(session.advance().unwrap_err(), AdvanceError::InvalidState);

    session.start(1).unwrap();
    assert_eq!(session.advance().unwrap_err(), AdvanceError::InvalidState);
}

#[test]
fn lives_rule_loses_after_exhaustion() {
    let options = GameOptions::default().with_lives(Some(2));
    let mut session = GameSession::new(options, 35);
    session.start(1).unwrap();
    assert_eq!(session.lives_remaining(), Some(2));

    assert_eq!(session.submit_guess(None).unwrap(), GuessOutcome::Incorrect);
    assert_eq!(session.lives_remaining(), Some(1));

    assert_eq!(session.submit_guess(None).unwrap(), GuessOutcome::OutOfLives);
    assert_eq!(session.state(), GameState::Lost);
    assert_eq!(session.feedback(), Feedback::Loss);

    session.restart().unwrap();
    assert_eq!(session.lives_remaining(), Some(2));
}

#[test]
fn snapshot_hides_targets_while_a_guess_is_awaited() {
    let mut session = suit_session(36);
    session.start(1).unwrap();
    assert!(session.snapshot().revealed.is_none());

    clear_level(&mut session);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.state, GameState::LevelComplete);
    assert!(snapshot.revealed.is_some());
}

#[test]
fn same_seed_replays_the_same_game() {
    let mut a = suit_session(77);
    let mut b = suit_session(77);
    a.start(1).unwrap();
    b.start(1).unwrap();

    assert_eq!(
        a.current_level().unwrap().targets(),
        b.current_level().unwrap().targets()
    );
}

#[test]
fn deck_is_not_reshuffled_between_levels() {
    let mut session = suit_session(40);
    session.start(1).unwrap();
    assert_eq!(session.cards_remaining(), 51);

    clear_level(&mut session);
    session.advance().unwrap();
    assert_eq!(session.cards_remaining(), 50);
}
