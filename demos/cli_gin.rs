//! CLI gin rummy against the built-in bot.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use ginrs::{
    ActionError, Bot, BotAction, Card, DrawChoice, GameOptions, Hand, HandAnalysis, Round,
    RoundOutcome, RoundResult, RoundState, ScoreBoard, Seat, Suit,
};
use tracing_subscriber::EnvFilter;

const PLAYER: Seat = Seat::First;
const BOT: Seat = Seat::Second;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("Gin rummy CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut bot = Bot::new(options, seed ^ 0x5eed);
    let mut board = ScoreBoard::new(options.target_score);

    for round_number in 0.. {
        let mut round = match Round::deal(options, seed.wrapping_add(round_number)) {
            Ok(round) => round,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };

        println!("\n=== Round {} ===", round_number + 1);

        while round.state() == RoundState::InProgress {
            let played = if round.turn() == PLAYER {
                player_turn(&mut round)
            } else {
                bot_turn(&mut round, &mut bot);
                true
            };
            if !played {
                println!("Goodbye.");
                return;
            }
        }

        match round.settle() {
            Ok(result) => {
                print_result(&round, &result);
                board.record(&result);
            }
            Err(err) => println!("Settle error: {err}"),
        }

        println!(
            "Score: you {} | bot {} (playing to {})",
            board.score(PLAYER),
            board.score(BOT),
            options.target_score
        );

        if let Some(winner) = board.winner() {
            if winner == PLAYER {
                println!("You win the game!");
            } else {
                println!("The bot wins the game.");
            }
            break;
        }
    }
}

/// Plays the human seat's turn. Returns `false` when the player quits.
fn player_turn(round: &mut Round) -> bool {
    print_table(round);

    loop {
        let input = prompt_line("Draw from [s]tock or [d]iscard pile: ");
        let drawn = match input.as_str() {
            "s" | "stock" => round.draw_stock(PLAYER),
            "d" | "discard" => round.draw_discard(PLAYER),
            "q" | "quit" => return false,
            _ => {
                println!("Unknown choice.");
                continue;
            }
        };

        match drawn {
            Ok(card) => {
                println!("You drew {}", format_card(card));
                break;
            }
            Err(ActionError::StockExhausted) => {
                println!("The stock ran out.");
                return true;
            }
            Err(err) => println!("Draw error: {err}"),
        }
    }

    print_hand(round.hand(PLAYER), round.options());

    loop {
        let input = prompt_line("Action ([x] <card> discard, [k] <card> knock, [g] <card> gin): ");
        if input == "q" || input == "quit" {
            return false;
        }

        let Some((verb, text)) = input.split_once(' ') else {
            println!("Name a card, e.g. 'x kh'.");
            continue;
        };
        let card = match text.parse::<Card>() {
            Ok(card) => card,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let outcome = match verb {
            "x" | "discard" => round.discard(PLAYER, card).map(|()| None),
            "k" | "knock" => round.knock(PLAYER, card).map(Some),
            "g" | "gin" => round.gin(PLAYER, card).map(Some),
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match outcome {
            Ok(Some(state)) => {
                println!("You end the round ({state:?}).");
                return true;
            }
            Ok(None) => return true,
            Err(err) => println!("Action error: {err}"),
        }
    }
}

fn bot_turn(round: &mut Round, bot: &mut Bot) {
    let choice = bot.choose_draw(round.hand(BOT), round.top_discard());
    let drawn = match choice {
        DrawChoice::DiscardPile => round.draw_discard(BOT),
        DrawChoice::Stock => round.draw_stock(BOT),
    };

    match drawn {
        Ok(card) if choice == DrawChoice::DiscardPile => {
            println!("Bot takes {} from the discard pile.", format_card(card));
        }
        Ok(_) => println!("Bot draws from the stock."),
        Err(ActionError::StockExhausted) => {
            println!("The stock ran out.");
            return;
        }
        Err(err) => {
            println!("Bot draw error: {err}");
            return;
        }
    }

    let Some(action) = bot.choose_discard(round.hand(BOT)) else {
        return;
    };
    let card = action.card();

    let declared = match action {
        BotAction::Discard(_) => None,
        BotAction::Knock(_) => Some(round.knock(BOT, card)),
        BotAction::Gin(_) => Some(round.gin(BOT, card)),
    };

    match declared {
        Some(Ok(state)) => println!(
            "Bot discards {} and ends the round ({state:?}).",
            format_card(card)
        ),
        Some(Err(_)) | None => match round.discard(BOT, card) {
            Ok(()) => println!("Bot discards {}", format_card(card)),
            Err(err) => println!("Bot discard error: {err}"),
        },
    }
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

fn print_table(round: &Round) {
    println!("\nStock: {} cards remaining", round.stock_len());

    let top = round
        .top_discard()
        .map_or_else(|| "(empty)".to_string(), format_card);
    println!("Discard pile: {top}");

    print_hand(round.hand(PLAYER), round.options());
}

fn print_hand(hand: &Hand, options: &GameOptions) {
    let analysis = HandAnalysis::of_hand(hand, options);

    let melds = analysis
        .grouping
        .melds()
        .iter()
        .map(|meld| format_cards(meld.cards()))
        .collect::<Vec<_>>();
    println!("\nYour hand: {}", format_cards(&hand.sorted()));
    if !melds.is_empty() {
        println!("  Melds: {}", melds.join(" | "));
    }
    println!(
        "  Deadwood: {} (value {})",
        format_cards(&analysis.deadwood.cards()),
        analysis.deadwood_total()
    );
}

fn print_result(round: &Round, result: &RoundResult) {
    println!("\nBot hand: {}", format_cards(&round.hand(BOT).sorted()));

    if result.outcome == RoundOutcome::Exhausted {
        println!("Round over with no score.");
        return;
    }

    for layoff in &result.layoffs {
        println!(
            "Laid off {} on meld {}",
            format_card(layoff.card),
            layoff.meld_index + 1
        );
    }

    let winner = match result.winner {
        Some(PLAYER) => "You",
        Some(_) => "Bot",
        None => "Nobody",
    };
    println!(
        "{:?}: knocker deadwood {}, defender deadwood {}. {winner} scores {}.",
        result.outcome, result.knocker_deadwood, result.defender_deadwood, result.points
    );
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
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
