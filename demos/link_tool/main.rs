//! Decode an item link string from the command line.
//!
//! Run with: cargo run --example link-tool -- "item:128955::::::::::::2:69:96:529"

use clap::Parser;
use itemstring_rs::prelude::*;
use log::debug;

/// Decode an item link string and print its fields
#[derive(Parser)]
#[command(version, about)]
struct Args {
	/// Item link or bare payload to decode
	link: String,

	/// Emit the decoded record as JSON instead of a field listing
	#[arg(long)]
	json: bool,
}

fn main() -> anyhow::Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let args = Args::parse();
	let record = ItemString::parse(&args.link);
	debug!("decoded {} fields from input", record.fields().len());

	if args.json {
		println!("{}", serde_json::to_string_pretty(&record)?);
		return Ok(());
	}

	println!("{record}");
	for (index, value) in record.fields().iter().enumerate() {
		let name = record.field_name(index).to_string();
		println!("  [{index:2}] {name:<20} {value}");
	}
	if !record.is_empty() {
		println!("  re-encoded: {}", record.encode());
	}

	Ok(())
}
