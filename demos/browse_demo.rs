//! Example: Browse Demo
//!
//! Creates a scratch directory full of frame files and lists it with
//! sequences collapsed, then prints the expanded frame paths of one
//! sequence.
//!
//! Run with:
//! ```bash
//! cargo run --example browse_demo
//! ```

use std::fs;
use std::path::PathBuf;

use seqls::{DetectOptions, DisplayOptions, browse, output};

/// Create sample frame files in a scratch directory
fn create_sample_files(dir: &PathBuf) -> Result<usize, std::io::Error> {
    fs::create_dir_all(dir)?;
    fs::create_dir_all(dir.join("renders"))?;

    let mut count = 0;
    for frame in 1..=5 {
        fs::write(dir.join(format!("beauty.{frame:04}.exr")), b"exr")?;
        count += 1;
    }
    // a hole at frame 3
    for frame in [1, 2, 4, 5] {
        fs::write(dir.join(format!("depth.{frame:04}.exr")), b"exr")?;
        count += 1;
    }
    // a second index that identifies the take, not the frame
    for take in [2, 3] {
        for frame in 10..=12 {
            fs::write(dir.join(format!("take{take}_f{frame:03}.jpg")), b"jpg")?;
            count += 1;
        }
    }
    fs::write(dir.join("notes.txt"), b"plain file")?;
    count += 1;

    Ok(count)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== seqls Browse Demo ===\n");

    let demo_dir = PathBuf::from("demo_browse_files");
    let count = create_sample_files(&demo_dir)?;
    println!("Created {count} sample files in {demo_dir:?}\n");

    let items = browse::browse(&demo_dir, &[], DetectOptions::default())?;
    let display = DisplayOptions::default();

    println!("Collapsed listing ({} items):", items.len());
    for item in &items {
        println!("  {}", output::format_item(item, None, &display));
    }

    if let Some(seq) = items.iter().find_map(seqls::Item::as_sequence) {
        println!("\nExpanded frames of {}:", seq.standard_pattern());
        for path in seq.files() {
            let marker = if path.exists() { " " } else { "!" };
            println!("  {marker} {}", path.display());
        }
    }

    println!("\nCleaning up...");
    fs::remove_dir_all(&demo_dir)?;
    println!("Demo complete!");

    Ok(())
}
