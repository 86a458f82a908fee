//! rust-war - Console entry point
//!
//! Sets up logging and the game session from the command line, then runs
//! the attack menu until the player quits or completes the mission.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use rust_war::core::{Dice, GameConfig, MissionChoice, SameOwnerPolicy};
use rust_war::game::{AttackReport, WarGame, WarGameBuilder};
use rust_war::rules::MissionStatus;

/// Territory conquest with dice battles and a secret mission
#[derive(Parser, Debug)]
#[command(name = "rust-war")]
#[command(about = "Turn-based territory conquest with dice battles and a secret mission")]
struct Args {
    /// Random seed for a replayable game
    #[arg(long)]
    seed: Option<u64>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mission to hand out
    #[arg(long, value_enum)]
    mission: Option<MissionArg>,

    /// Rule for rejecting attacks on your own side
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Log more (-v debug, -vv trace). Logs go to stderr.
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MissionArg {
    Random,
    Eliminate,
    Conquer,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    SelfIndex,
    SameFaction,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut game = match setup(&args) {
        Ok(game) => game,
        Err(e) => {
            tracing::error!(error = %e, "game setup failed");
            eprintln!("Critical error: {}", e);
            return ExitCode::from(1);
        }
    };

    match run(&mut game) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "console I/O failed");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: u8) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_writer(io::stderr)
        .init();
}

/// `RUST_LOG` directives (or `warn`), raised to debug or trace by `-v`.
fn log_filter(verbose: u8, env: Option<&str>) -> EnvFilter {
    let filter = env
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    match verbose {
        0 => filter,
        1 => filter.add_directive(tracing::Level::DEBUG.into()),
        _ => filter.add_directive(tracing::Level::TRACE.into()),
    }
}

fn setup(args: &Args) -> rust_war::Result<WarGame> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(mission) = args.mission {
        config.mission = match mission {
            MissionArg::Random => MissionChoice::Random,
            MissionArg::Eliminate => MissionChoice::EliminateFaction,
            MissionArg::Conquer => MissionChoice::ConquerCount,
        };
    }
    if let Some(policy) = args.policy {
        config.same_owner_policy = match policy {
            PolicyArg::SelfIndex => SameOwnerPolicy::RejectSelfIndexOnly,
            PolicyArg::SameFaction => SameOwnerPolicy::RejectSameFaction,
        };
    }

    WarGameBuilder::new().config(config).build()
}

fn run<D: Dice>(game: &mut WarGame<D>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("--- Welcome to WAR ---");
    println!("You command the {} army.", game.player_faction());
    println!("Your mission: {}", game.mission());
    println!("(Game seed {}, replay with --seed {})", game.seed(), game.seed());
    pause(&mut input)?;

    loop {
        display_map(game);
        display_menu()?;

        let Some(choice) = read_line(&mut input)? else {
            println!();
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(report) = attack_phase(game, &mut input)? else {
                    continue;
                };
                if report.mission_complete {
                    display_victory(game);
                    break;
                }
                if game.is_stalemated() {
                    println!("\nNone of your territories can attack any more.");
                    println!("Check your mission or quit the game.");
                }
                pause(&mut input)?;
            }
            "2" => {
                display_mission(&game.mission_status());
                pause(&mut input)?;
            }
            "0" => {
                println!("Thanks for playing! Exiting...");
                break;
            }
            _ => {
                println!("Invalid option. Try again.");
                pause(&mut input)?;
            }
        }
    }

    tracing::info!(battles = game.battles_fought(), "game over");
    Ok(())
}

/// Ask for an attack and fight it. Returns `None` if nothing was fought.
fn attack_phase<D: Dice>(
    game: &mut WarGame<D>,
    input: &mut impl BufRead,
) -> io::Result<Option<AttackReport>> {
    let count = game.registry().len();
    println!("You are the {} army.", game.player_faction());

    print!("Enter the ID (1-{}) of the ATTACKING territory (must be yours): ", count);
    io::stdout().flush()?;
    let attacker = read_number(input)?;

    print!("Enter the ID (1-{}) of the DEFENDING territory (must be an enemy): ", count);
    io::stdout().flush()?;
    let defender = read_number(input)?;

    let (Some(attacker), Some(defender)) = (attacker, defender) else {
        println!("\nERROR: Territory IDs must be numbers. Try again.");
        pause(input)?;
        return Ok(None);
    };

    match game.attack_numbered(attacker, defender) {
        Ok(report) => {
            display_battle(game, &report);
            Ok(Some(report))
        }
        Err(rejection) => {
            println!("\nERROR: {}", rejection);
            pause(input)?;
            Ok(None)
        }
    }
}

fn display_map<D: Dice>(game: &WarGame<D>) {
    println!("\n\n===========================================================");
    println!("                   CURRENT MAP STATE");
    println!("===========================================================");
    println!("{:<5} | {:<20} | {:<15} | {}", "ID", "Territory", "Army", "Troops");
    println!("-----------------------------------------------------------");

    for (id, territory) in game.registry().entries() {
        println!(
            "{:<5} | {:<20} | {:<15} | {}",
            id.to_string(),
            territory.name,
            territory.faction.name(),
            territory.troops
        );
    }
    println!("-----------------------------------------------------------");
}

fn display_menu() -> io::Result<()> {
    println!("\n--- ATTACK PHASE ---");
    println!("Choose your action:");
    println!(" 1 - Attack");
    println!(" 2 - Check Mission");
    println!(" 0 - Quit Game");
    print!("Your choice: ");
    io::stdout().flush()
}

fn display_battle<D: Dice>(game: &WarGame<D>, report: &AttackReport) {
    let outcome = &report.outcome;
    let attacker = &game.registry()[outcome.attacker];
    let defender = &game.registry()[outcome.defender];
    let defender_faction = outcome
        .conquest
        .as_ref()
        .map_or(&defender.faction, |c| &c.previous_owner);

    println!(
        "\nBATTLE: {} ({}) attacks {} ({})!",
        attacker.name, attacker.faction, defender.name, defender_faction
    );
    println!("   Attack die: {}", outcome.attack_roll);
    println!("   Defense die: {}", outcome.defense_roll);

    if !outcome.attack_succeeded {
        println!("   DEFENSE WINS! The attack failed.");
        return;
    }

    println!("   ATTACK WINS! {} loses 1 troop.", defender.name);
    if let Some(conquest) = &outcome.conquest {
        println!(
            "   CONQUEST! {} was taken by the {} army!",
            defender.name, conquest.new_owner
        );
    }
}

fn display_mission(status: &MissionStatus) {
    println!("\n--- CHECK MISSION ---");
    println!("Your mission: {}", status.description);
    println!("   Status: {}", status.progress);
    if status.complete {
        println!("   Mission complete!");
    }
}

fn display_victory<D: Dice>(game: &WarGame<D>) {
    println!("\n\n****************************************");
    println!("    V-I-C-T-O-R-Y!");
    println!("   You completed your mission:");
    println!("   {}", game.mission());
    println!("****************************************\n");
}

/// Read one line. Returns `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Read a territory number. Returns `None` for anything that is not one.
fn read_number(input: &mut impl BufRead) -> io::Result<Option<usize>> {
    Ok(read_line(input)?.and_then(|line| line.trim().parse().ok()))
}

fn pause(input: &mut impl BufRead) -> io::Result<()> {
    println!("\nPress ENTER to continue...");
    read_line(input)?;
    Ok(())
}
