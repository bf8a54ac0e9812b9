use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use steadystate::chain::DoublesRule;
use steadystate::chain::Simulation;
use steadystate::chain::Transitions;
use steadystate::report::Summary;

/// Estimate long-run Monopoly square occupancy by simulating the
/// board's Markov chain.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of turns to simulate
    #[arg(long, default_value_t = 100_000)]
    moves: u64,
    /// RNG seed; identical seeds reproduce identical runs
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Destination for the landing-count history table
    #[arg(long, default_value = "monopoly_landings.csv")]
    output: PathBuf,
    /// Optionally write a JSON run summary here
    #[arg(long)]
    summary: Option<PathBuf>,
    /// Reproduce the original model's per-roll three-doubles
    /// accumulation instead of the corrected single-event rule
    #[arg(long)]
    legacy_doubles: bool,
}

/// Terminal logging at info level.
fn logging() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

fn main() -> anyhow::Result<()> {
    logging();
    let args = Args::parse();
    let rule = match args.legacy_doubles {
        true => DoublesRule::Legacy,
        false => DoublesRule::Corrected,
    };
    let transitions = Transitions::from(rule);
    let mut simulation = Simulation::new(transitions, args.seed);
    log::info!(
        "simulating {} moves (seed {}, {} doubles rule)",
        args.moves,
        args.seed,
        rule,
    );
    let clock = Instant::now();
    simulation.run(args.moves);
    log::info!(
        "simulated {} moves in {:.1} ms ({} snapshots)",
        simulation.moves(),
        clock.elapsed().as_secs_f64() * 1000.,
        simulation.history().len(),
    );
    steadystate::report::save_history(simulation.history(), &args.output)?;
    log::info!("history table saved to {}", args.output.display());
    let summary = Summary::new(&simulation, args.seed);
    if let Some(ref path) = args.summary {
        summary.save(path)?;
        log::info!("run summary saved to {}", path.display());
    }
    for occupancy in summary.squares.iter().take(10) {
        log::info!(
            "{:>6}  {:.4}  {}",
            occupancy.landings,
            occupancy.frequency,
            occupancy.name,
        );
    }
    Ok(())
}
