use crate::{
    builder::serialize,
    catalog::family_tree_collection,
    config::Config,
    fs::{output_path, write_file},
};
use anyhow::{Context, Result};
use log::info;
use std::{
    path::{Path, PathBuf},
    process,
};

pub fn action_generate(c: &seahorse::Context) {
    if !c.args.is_empty() {
        eprintln!("Error: unexpected arguments: {}", c.args.join(" "));
        process::exit(1);
    }
    let config = Config::from_context(c);
    match generate(&config) {
        Ok(Some(path)) => print_usage(&path),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Builds the collection and writes it out. Returns the written path, or
/// `None` when the document went to stdout.
pub fn generate(config: &Config) -> Result<Option<PathBuf>> {
    let collection =
        family_tree_collection(&config.base_url).with_context(|| "Failed to build collection.")?;
    info!(
        "Built {} with {} folders",
        collection.info.name,
        collection.groups.len()
    );
    let json = serialize(&collection).with_context(|| "Failed to serialize collection.")?;
    if config.stdout {
        println!("{}", json);
        return Ok(None);
    }
    let path = output_path(&config.output_dir, &collection.info.name);
    write_file(&path, &json).with_context(|| format!("Failed to write collection: {:?}", path))?;
    info!("Wrote {:?}", path);
    Ok(Some(path))
}

fn print_usage(path: &Path) {
    let path = path.display();
    println!();
    println!("\x1b[32mPostman collection generated successfully!\x1b[m");
    println!("Location: {}", path);
    println!();
    println!("To use this collection:");
    println!("1. Import into Postman: {}", path);
    println!("2. Run with Newman: newman run {}", path);
    println!("3. Set the baseUrl variable in Postman or via environment");
    println!();
}
