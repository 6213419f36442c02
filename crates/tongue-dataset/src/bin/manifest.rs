use tongue_base::{init_stdout_logger, log, log_fatal};
use tongue_dataset::Dataset;

// Rebuild data.json from the label directories under ROOT (default: .)
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        log_fatal!("Usage: {} [dataset-root]", args[0]);
    }
    let root = args.get(1).map(String::as_str).unwrap_or(".");
    let dataset = Dataset::new(root);

    let manifest = dataset.write_manifest()?;
    for (label, count) in manifest.counts() {
        log::info!("{}: {} samples", label, count);
    }

    Ok(())
}
