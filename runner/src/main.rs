use clap::Parser;
use sim::TICKS_PER_SECOND;

mod helm;
mod init;
mod telemetry;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scene file to load; falls back to the built-in demo scene when absent.
    #[arg(short, long, default_value = "scenes/demo.ron")]
    scene: String,

    #[arg(short, long, default_value_t = TICKS_PER_SECOND)]
    tick_rate: u64,

    /// Stop after this many ticks; 0 runs until interrupted.
    #[arg(long, default_value_t = 0)]
    ticks: u64,
}

fn main() {
    let args = Args::parse();

    if args.tick_rate < 1 || args.tick_rate > 240 {
        eprintln!("Error: tick_rate must be between 1 and 240 (inclusive).");
        eprintln!("Got: {}", args.tick_rate);
        std::process::exit(1);
    }

    init::init(&args.scene, args.tick_rate, args.ticks);
}
