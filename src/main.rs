use anyhow::Result;
use clap::Parser;

use semver_describe::config::{self, DescribeConfig};
use semver_describe::git::Git2Repository;
use semver_describe::{describe, ui};

#[derive(clap::Parser)]
#[command(
    name = "semver-describe",
    about = "Derive a semantic-version descriptor for HEAD from release tags"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Hash abbreviation length in the rendered suffix")]
    abbrev: Option<usize>,

    #[arg(long, help = "Fallback tag when history carries no release tag")]
    default_tag: Option<String>,

    #[arg(long = "match", help = "Regex a tag must match to count as a release")]
    match_pattern: Option<String>,

    #[arg(long, help = "Trace derivation steps on stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("semver-describe {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration, then layer CLI overrides on top
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    apply_overrides(&mut config, &args);

    if config.abbrev_length == 0 {
        ui::display_error("Abbreviation length must be greater than zero");
        std::process::exit(1);
    }

    if args.verbose {
        ui::display_verbose(&format!("Tag pattern: {}", config.tag_pattern));
        ui::display_verbose(&format!("Fallback tag: {}", config.default_tag));
    }

    // Discover the repository at or above the current directory; absence of
    // a usable history store is fatal.
    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    match describe(&repo, &config) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut DescribeConfig, args: &Args) {
    if let Some(abbrev) = args.abbrev {
        config.abbrev_length = abbrev;
    }
    if let Some(ref default_tag) = args.default_tag {
        config.default_tag = default_tag.clone();
    }
    if let Some(ref pattern) = args.match_pattern {
        config.tag_pattern = pattern.clone();
    }
}
