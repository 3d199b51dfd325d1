use anyhow::Context;
use clap::Parser;
use roomcrawl::import::{BASIC_WORLD, load_world, load_world_file};
use std::path::PathBuf;

// cargo run --bin check-world -- --world data/basic-world.yaml

#[derive(Debug, Parser)]
#[command(name = "check-world", version, about = "Validate a world seed and list its entry points")]
struct Args {
    /// World seed in YAML (if omitted, check the built-in world)
    #[arg(long)]
    world: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let world = match &args.world {
        Some(path) => load_world_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => load_world(BASIC_WORLD).context("loading built-in world")?,
    };

    println!("{} rooms", world.len());
    for room in world.rooms() {
        let exits: Vec<String> = room.exits.iter().map(|(dir, to)| format!("{dir}->{to}")).collect();
        let items: Vec<&str> = room.items.iter().map(|i| i.name.as_str()).collect();
        println!("  [{}] {}  exits: {}  items: {}", room.id, room.name, exits.join(", "), items.join(", "));
    }

    println!("entry points:");
    for entry in world.available_rooms() {
        println!("  [{}] {}", entry.id, entry.name);
    }

    Ok(())
}
