// MIT/Apache2 License

use clap::Parser;
use shapecut::{path_data, Filter, KeepPolicy, Options};

#[derive(Parser)]
#[command(
    name = "shapecut",
    about = "Keep the pieces of a pre-cut path that lie inside or outside a closed shape"
)]
struct Cli {
    /// SVG path data of the closed boundary shape
    #[arg(short, long)]
    boundary: String,

    /// Which side of the boundary to keep: "inside" or "outside"
    #[arg(short, long, default_value = "inside")]
    keep: KeepPolicy,

    /// Tolerance for approximate comparisons
    #[arg(long, default_value = "1e-6")]
    tolerance: f64,

    /// SVG path data of each piece of the cut path
    #[arg(required = true)]
    pieces: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let options = Options::new().keep(cli.keep).epsilon(cli.tolerance)?;
    let boundary = path_data::parse(&cli.boundary)?;
    let filter = Filter::new(&boundary, options)?;
    let filtered = filter.filter_pieces(&cli.pieces)?;

    for skipped in filtered.skipped() {
        eprintln!("  skipped piece {}: {}", skipped.index, skipped.reason);
    }
    eprintln!(
        "  kept {} of {} pieces ({})",
        filtered.kept().len(),
        cli.pieces.len(),
        filter.keep_policy()
    );

    println!("{}", filtered.into_path_data().into_string());
    Ok(())
}
