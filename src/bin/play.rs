//! Interactive console front end for the Diamonds auction game.
//!
//! Menu-driven: play against a randomly chosen bot, or watch two chosen
//! bots fight. Malformed rank input is re-prompted locally and never
//! reaches the engine.

use clap::Parser;
use colored::Colorize;
use dialoguer::{Input, Select};

use diamonds::{
    Card, ConservativeStrategy, GameError, GameRegistry, GameRng, Hand, MirrorBluffStrategy,
    MirrorStrategy, Player, Rank, RandomStrategy, RoundContext, Strategy, ThresholdStrategy,
};

#[derive(Parser)]
#[command(name = "play", about = "Play the Diamonds auction game in the console")]
struct Args {
    /// Seed for a fully reproducible game.
    #[arg(long)]
    seed: Option<u64>,
}

const BOT_NAMES: [&str; 5] = ["Random", "Mirror", "Threshold", "Conservative", "MirrorBluff"];

fn make_bot(index: usize, rng: GameRng) -> Box<dyn Strategy> {
    match index {
        0 => Box::new(RandomStrategy::new(rng)),
        1 => Box::new(MirrorStrategy::new(rng)),
        2 => Box::new(ThresholdStrategy::new()),
        3 => Box::new(ConservativeStrategy::new()),
        _ => Box::new(MirrorBluffStrategy::new(rng)),
    }
}

/// Prompts the player for a rank each round; re-prompts until the input
/// parses and names a card still in hand.
struct HumanStrategy;

impl Strategy for HumanStrategy {
    fn play(&mut self, hand: &mut Hand, diamond: Card, ctx: &RoundContext) -> Card {
        let total = ctx.round + ctx.remaining - 1;
        println!();
        println!(
            "Round {}/{} — up for auction: {} (worth {})",
            ctx.round,
            total,
            diamond.to_string().yellow().bold(),
            diamond.rank.value()
        );

        loop {
            let ranks = hand.available_ranks();
            let shown: Vec<String> = ranks.iter().map(Rank::to_string).collect();
            println!("Your cards: {}", shown.join(" ").cyan());

            let raw: String = Input::new()
                .with_prompt("Bid a rank (1-13)")
                .interact_text()
                .expect("console input");

            match raw.trim().parse::<u8>().ok().and_then(Rank::new) {
                Some(rank) if hand.contains(rank) => {
                    return hand.take(rank).expect("rank checked present");
                }
                Some(_) => println!("{}", "Not in your hand. Try again.".red()),
                None => println!("{}", "Enter a rank number from your cards.".red()),
            }
        }
    }

    fn observe(&mut self, diamond: Card, played: Card, points: f64, _ctx: &RoundContext) {
        let gained = if points > 0.0 {
            format!("won {:.2}", points).green()
        } else {
            "won nothing".red()
        };
        println!("You bid {} on {} and {}.", played, diamond, gained);
    }
}

fn run_game(players: Vec<Player>, seed: u64) -> Result<(), GameError> {
    let mut registry = GameRegistry::new();
    let id = registry.create_game(players, Some(seed))?;

    registry.start(id)?;
    while registry.step(id)? {}

    let outcome = registry.result(id)?;
    println!();
    println!("{}", "Final standings".bold());
    for (place, standing) in outcome.standings.iter().enumerate() {
        println!("  {}. {} — {:.2}", place + 1, standing.player, standing.score);
    }
    println!("(game {} with seed {})", id, seed);
    Ok(())
}

fn main() -> Result<(), GameError> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = args.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    let seed = rng.seed();

    println!("{}", "Diamond Auction Game".bold());
    let mode = Select::new()
        .with_prompt("Mode")
        .items(&["Human vs bot", "Bot vs bot"])
        .default(0)
        .interact()
        .expect("console input");

    if mode == 0 {
        let indices: Vec<usize> = (0..BOT_NAMES.len()).collect();
        let pick = *rng.choose(&indices).expect("bot list is not empty");
        println!("You will play against: {}", BOT_NAMES[pick].bold());

        let players = vec![
            Player::new("You", Box::new(HumanStrategy)),
            Player::new(BOT_NAMES[pick], make_bot(pick, rng.fork())),
        ];
        run_game(players, seed)
    } else {
        let first = Select::new()
            .with_prompt("First bot")
            .items(&BOT_NAMES)
            .default(0)
            .interact()
            .expect("console input");
        let second = Select::new()
            .with_prompt("Second bot")
            .items(&BOT_NAMES)
            .default(0)
            .interact()
            .expect("console input");

        println!("Running: {} vs {}", BOT_NAMES[first].bold(), BOT_NAMES[second].bold());
        let players = vec![
            Player::new(format!("{}-1", BOT_NAMES[first]), make_bot(first, rng.fork())),
            Player::new(format!("{}-2", BOT_NAMES[second]), make_bot(second, rng.fork())),
        ];
        run_game(players, seed)
    }
}
