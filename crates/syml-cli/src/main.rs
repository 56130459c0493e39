mod sections;

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use syml::Document;

use sections::{Contact, Home, Locale};

/// Round-trip a syml file, refreshing the example sections.
#[derive(Parser, Debug)]
#[command(name = "syml")]
#[command(about = "Load, update and rewrite sectioned YAML documents", long_about = None)]
struct Args {
    /// Path to the .syml file to read and rewrite (created if missing)
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let text = if args.file.exists() {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?
    } else {
        String::new()
    };

    let mut document = Document::new();
    document
        .load(&text)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    document.set(&Contact {
        name: "Max Mustermann".to_string(),
        age: 18,
        locale: Locale::German,
    })?;
    document.set(&Home {
        address: "Musterstraße 12".to_string(),
        city: "Munich".to_string(),
    })?;

    println!("{}", document.get::<Contact>()?);
    println!("{}", document.get::<Home>()?);

    fs::write(&args.file, document.dump())
        .with_context(|| format!("Failed to write {}", args.file.display()))?;

    Ok(())
}
