use std::env;

use reverser_core::ReverserConfig;
use reverser_neo::neo_reverser_with_config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <SCRIPT_HEX>", args[0]);
        std::process::exit(1);
    }

    let config = ReverserConfig::from_env()?;
    let result = neo_reverser_with_config(config).reverse_hex(&args[1])?;

    print!("{}", result.listing());
    for (name, collection) in result.occurrences().iter() {
        if collection.is_empty() {
            continue;
        }
        println!("\n{} ({})", name, collection.len());
        for occurrence in collection.matches() {
            let offset = result
                .instruction(occurrence.instruction_index)
                .map(|i| i.offset)
                .unwrap_or_default();
            println!("  [{:04x}] {}", offset, occurrence.label);
        }
    }
    Ok(())
}
