//! CLI card-guessing example.
//!
//! Runs the engine under `Arc<Mutex<_>>` with a background 1 Hz ticker
//! thread, the serialized-host setup the session is designed for.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use cgrs::{
    Card, GameOptions, GameSession, GameState, Guess, GuessMode, GuessOutcome, Hint, RankBand,
    Suit, SuitColor, Tick,
};

fn main() {
    println!("Card guesser CLI example (type 'quit' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mode = loop {
        let input = prompt_line("Difficulty - [e]asy (guess the suit) or [h]ard (guess the rank): ");
        match input.as_str() {
            "e" | "easy" => break GuessMode::Suit,
            "h" | "hard" => break GuessMode::Rank,
            "q" | "quit" => return,
            _ => println!("Unknown difficulty."),
        }
    };

    let options = GameOptions::default().with_guess_mode(mode);
    let session = Arc::new(Mutex::new(GameSession::new(options, seed)));

    if let Err(err) = session.lock().unwrap().start(1) {
        println!("Could not start the game: {err}");
        return;
    }
    println!("\n=== Level 1 ===");

    // The mutex serializes the ticker against guesses, and the engine
    // ignores any tick that lands after a level has already ended.
    let ticker_session = Arc::clone(&session);
    thread::spawn(move || {
        loop {
            thread::sleep(Duration::from_secs(1));
            let mut session = ticker_session.lock().unwrap();
            match session.tick() {
                Tick::TimedOut => {
                    let snapshot = session.snapshot();
                    if let Some(revealed) = snapshot.revealed {
                        println!("\nTime's up! The card was: {}", format_cards(&revealed));
                        println!("Score: {}. Press Enter to continue.", snapshot.score);
                    }
                }
                Tick::Counting(5) => println!("\n5 seconds left!"),
                Tick::Counting(_) | Tick::Ignored => {}
            }
        }
    });

    loop {
        let state = session.lock().unwrap().state();
        match state {
            GameState::AwaitingGuess => play_one_prompt(&session, mode),
            GameState::LevelComplete => {
                // Short pause before the next level comes up.
                thread::sleep(Duration::from_millis(750));
                let mut session = session.lock().unwrap();
                match session.advance() {
                    Ok(level) => println!("\n=== Level {level} ==="),
                    Err(err) => {
                        println!("Could not start the next level: {err}");
                        session.quit();
                    }
                }
            }
            GameState::Won => {
                let input = prompt_line("Play again? [n]ew game or [q]uit: ");
                match input.as_str() {
                    "n" | "new" => {
                        if restart(&session).is_err() {
                            return;
                        }
                    }
                    _ => return,
                }
            }
            GameState::Lost => {
                let level = session.lock().unwrap().level_number();
                let input =
                    prompt_line(&format!("[r]etry level {level}, [n]ew game, or [q]uit: "));
                match input.as_str() {
                    "r" | "retry" => {
                        let mut session = session.lock().unwrap();
                        if let Err(err) = session.start(level) {
                            println!("Could not restart the level: {err}");
                            return;
                        }
                    }
                    "n" | "new" => {
                        if restart(&session).is_err() {
                            return;
                        }
                    }
                    _ => return,
                }
            }
            GameState::Idle => return,
        }
    }
}

fn restart(session: &Arc<Mutex<GameSession>>) -> Result<(), ()> {
    let mut session = session.lock().unwrap();
    match session.restart() {
        Ok(()) => {
            println!("\n=== Level 1 ===");
            Ok(())
        }
        Err(err) => {
            println!("Could not restart the game: {err}");
            Err(())
        }
    }
}

fn play_one_prompt(session: &Arc<Mutex<GameSession>>, mode: GuessMode) {
    {
        let session = session.lock().unwrap();
        print_status(&session);
    }

    let input = match mode {
        GuessMode::Suit => prompt_line(
            "Guess suit [h]earts/[d]iamonds/[c]lubs/[s]pades, '?' for a hint, 'restart', 'quit': ",
        ),
        GuessMode::Rank => prompt_line(
            "Guess rank (2-14, 11=J 12=Q 13=K 14=A), '?' for a hint, 'restart', 'quit': ",
        ),
    };

    let mut session = session.lock().unwrap();
    match input.as_str() {
        "quit" => session.quit(),
        "restart" => {
            if let Err(err) = session.restart() {
                println!("Could not restart the game: {err}");
            } else {
                println!("\n=== Level 1 ===");
            }
        }
        "?" | "hint" => match session.use_hint() {
            Ok(hint) => println!("{}", colorize(&format!("Hint: {}", format_hint(hint)), "33")),
            Err(err) => println!("Hint error: {err}"),
        },
        "" => {}
        other => {
            let guess = parse_guess(other, mode);
            match session.submit_guess(guess) {
                Ok(outcome) => report_outcome(&session, outcome),
                Err(err) => println!("Guess error: {err}"),
            }
        }
    }
}

fn report_outcome(session: &GameSession, outcome: GuessOutcome) {
    match outcome {
        GuessOutcome::Incorrect => println!("{}", colorize("Incorrect! Try again.", "31")),
        GuessOutcome::OutOfLives => println!("{}", colorize("Out of lives!", "31")),
        GuessOutcome::FirstTargetCorrect => println!(
            "{}",
            colorize("First card correct! Now guess the second card.", "36")
        ),
        GuessOutcome::LevelComplete { awarded } => {
            let revealed = session.snapshot().revealed.unwrap_or_default();
            println!(
                "{} The card was {}. +{awarded} points.",
                colorize("Correct!", "32"),
                format_cards(&revealed)
            );
        }
        GuessOutcome::GameWon { awarded } => {
            let snapshot = session.snapshot();
            let revealed = snapshot.revealed.unwrap_or_default();
            println!(
                "{} The cards were {}. +{awarded} points.",
                colorize("You beat the final level!", "32"),
                format_cards(&revealed)
            );
            println!("Final score: {}", snapshot.score);
        }
    }
}

fn print_status(session: &GameSession) {
    let lives = session
        .lives_remaining()
        .map_or(String::new(), |lives| format!(" | Lives: {lives}"));
    println!(
        "\nLevel: {} | Score: {} | Hints: {}{} | Time: {}s",
        session.level_number(),
        session.score(),
        session.hints_remaining(),
        lives,
        session.seconds_left()
    );
}

fn parse_guess(input: &str, mode: GuessMode) -> Option<Guess> {
    match mode {
        GuessMode::Suit => {
            let suit = match input {
                "h" | "hearts" => Suit::Hearts,
                "d" | "diamonds" => Suit::Diamonds,
                "c" | "clubs" => Suit::Clubs,
                "s" | "spades" => Suit::Spades,
                _ => return None,
            };
            Some(Guess::Suit(suit))
        }
        GuessMode::Rank => {
            let rank = match input {
                "j" | "jack" => 11,
                "queen" => 12,
                "k" | "king" => 13,
                "a" | "ace" => 14,
                other => other.parse::<u8>().ok()?,
            };
            Some(Guess::Rank(rank))
        }
    }
}

fn format_hint(hint: Hint) -> &'static str {
    match hint {
        Hint::SuitColor(SuitColor::Red) => "the suit is red (Hearts/Diamonds)",
        Hint::SuitColor(SuitColor::Black) => "the suit is black (Clubs/Spades)",
        Hint::RankBand(RankBand::Low) => "the rank is low (2-6)",
        Hint::RankBand(RankBand::Medium) => "the rank is medium (7-10)",
        Hint::RankBand(RankBand::High) => "the rank is high (Jack-Ace)",
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" and ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
