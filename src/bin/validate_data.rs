//! Validate the dataset registry: check every referenced file against its
//! declared schema. Run: cargo run --bin validate_data

use std::path::Path;

use coaltracker::data::registry::load_registry;
use coaltracker::parallel::batch::validate_release;
use coaltracker::parallel::pool::WorkerPool;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let data_root = Path::new(&manifest_dir).join("data");
    let registry_path = data_root.join("registry.json");

    if !registry_path.exists() {
        eprintln!("Registry not found: {}", registry_path.display());
        eprintln!("Run the generation pipeline first to produce data/registry.json");
        std::process::exit(1);
    }

    let registry = load_registry(&registry_path)?;
    let batch = validate_release(&data_root, &registry, &WorkerPool::default());

    for file in &batch.files {
        if !file.passed {
            eprintln!("[{}] {} failed:", file.name, file.path);
            for diagnostic in &file.report.diagnostics {
                eprintln!("  - {diagnostic}");
            }
        }
    }

    println!(
        "validated {} datasets, {} ok, {} failed",
        batch.files.len(),
        batch.passed,
        batch.failed
    );
    if !batch.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}
