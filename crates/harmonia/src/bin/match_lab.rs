use clap::Parser;
use harmonia::config::load_pair_file;
use harmonia::compute_match_with_palace;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Score a pair of chart profiles")]
struct Args {
    #[arg(help = "Path to a TOML file with [a], [b] and optional [palace] tables")]
    pair: PathBuf,

    #[arg(long)]
    pretty: bool,

    #[arg(long, help = "Print only the axis and track scores")]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let pair = load_pair_file(&args.pair)?;
    log::info!("Scoring pair from {}", args.pair.display());
    let result = compute_match_with_palace(&pair.a, &pair.b, pair.palace);

    if args.summary {
        println!("physical  {:6.1}", result.physical);
        println!("depth     {:6.1}", result.depth);
        println!("quadrant  {:?}", result.quadrant);
        for (name, value) in [
            ("sociable", result.tracks.sociable),
            ("passionate", result.tracks.passionate),
            ("partner", result.tracks.partner),
            ("soul", result.tracks.soul),
        ] {
            println!("{:<10}{:6.1}", name, value);
        }
        println!("primary   {:?}", result.primary_track);
        return Ok(());
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);
    Ok(())
}
