#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use armada::{init_logging, Fleet, Game, Session, STANDARD_FLEET};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Read commands from stdin: nova, estado, mapa, rajada, ver, desisto.
    Play,
    /// Lay out a random standard fleet and print it.
    Random {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the fleet as JSON instead of a board")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut session = Session::new(stdin.lock(), stdout.lock());
            session.run()?;
        }
        Commands::Random { seed, json } => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let fleet = Fleet::random(&mut rng, &STANDARD_FLEET)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&fleet)?);
            } else {
                let game = Game::new(fleet);
                print!("{}", game.render_fleet());
                print!("{}", game.fleet().status());
            }
        }
    }
    Ok(())
}
