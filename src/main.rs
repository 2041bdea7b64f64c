//! seqls CLI application entry point
//!
//! Lists directories with numbered file sequences collapsed into single
//! entries, in the spirit of `ls`:
//!
//! ```bash
//! $ seqls plates/
//! readme.txt
//! img.####.exr [1:120] 118 files, 2 missing files
//! ```
//!
//! # Features
//!
//! - **Sequence folding**: `img.0001.exr … img.0120.exr` shows as one line
//! - **Masks**: restrict the listing with globs or `#`/`@` digit patterns
//! - **Properties**: type, aggregated size and modification time columns
//! - **Expansion**: print every frame path for shell pipelines
//!
//! # Configuration
//!
//! Display preferences are read from the user's config directory
//! (`~/.config/seqls/config.toml` on Linux) and overridden by flags.

use colored::Colorize;

use seqls::cli::Cli;
use seqls::config::SeqlsConfig;
use seqls::discovery::FsStatSource;
use seqls::{SeqlsError, browse, output, stat};

fn main() {
    let cli = Cli::parse_args();
    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), SeqlsError> {
    let config = SeqlsConfig::load().unwrap_or_default();
    let detect = cli.detect_options(&config);
    let display = cli.display_options(&config);
    let stat_source = FsStatSource;

    let paths = cli.browse_paths();
    let show_headers = paths.len() > 1 && !cli.quiet && !cli.expand;

    for (i, path) in paths.iter().enumerate() {
        let items = browse::browse(path, &cli.masks, detect)?;

        if show_headers {
            if i > 0 {
                println!();
            }
            println!("{}:", path.display());
        }

        for item in &items {
            if cli.expand {
                for frame in output::expand_paths(item) {
                    println!("{}", frame.display());
                }
            } else if cli.quiet {
                println!("{}", output::format_path(item, &display));
            } else {
                let item_stat = display
                    .properties
                    .then(|| stat::stat_item(item, &stat_source));
                println!("{}", output::format_item(item, item_stat.as_ref(), &display));
            }
        }
    }

    Ok(())
}
