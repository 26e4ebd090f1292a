//! Kubernetes Name Generator CLI
//!
//! Prints length-bounded resource names built from a base name, a content
//! fingerprint and a suffix.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use k8s_namegen::{
	fnv1a_32, generate_all, is_dns_label_safe, sha256_prefix, GeneratedName, Input, NameGenerator,
};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Hash {
	/// First bits of SHA-256
	Sha256,
	/// 32-bit FNV-1a
	Fnv1a,
}

#[derive(Parser, Debug)]
#[command(name = "k8s-namegen")]
#[command(author = "Fellow <engineering@fellow.app>")]
#[command(version)]
#[command(about = "Generate Kubernetes resource names within the 63 character limit", long_about = None)]
struct Args {
	/// Base name to generate from
	#[arg(value_name = "NAME", conflicts_with = "file", required_unless_present = "file")]
	name: Option<String>,

	/// Suffix appended to every generated name
	#[arg(short, long, default_value = "")]
	suffix: String,

	/// Read base names from a file, one per line
	#[arg(short, long, value_name = "PATH")]
	file: Option<PathBuf>,

	/// Hash used for the fingerprint
	#[arg(long, value_enum, default_value = "sha256")]
	hash: Hash,

	/// Print results as JSON
	#[arg(long)]
	json: bool,

	/// Function input file to load and report
	#[arg(long, value_name = "PATH")]
	input: Option<PathBuf>,

	/// Print debug logs
	#[arg(short, long)]
	verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
	let level = if verbose { "debug" } else { "info" };
	tracing_subscriber::fmt()
		.without_time()
		.with_target(false)
		.with_writer(std::io::stderr)
		.with_env_filter(
			EnvFilter::from_default_env().add_directive(format!("k8s_namegen={}", level).parse()?),
		)
		.init();
	Ok(())
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.verbose)?;

	if let Some(path) = &args.input {
		let input = Input::load(path)
			.with_context(|| format!("Failed to load input {}", path.display()))?;
		let ttl = input.cache_ttl_duration()?;
		info!(
			cache_ttl = ?ttl,
			enable_v1_mode = input.enable_v1_mode,
			"Loaded function input"
		);
	}

	let generator = match args.hash {
		Hash::Sha256 => NameGenerator::with_hash(sha256_prefix),
		Hash::Fnv1a => NameGenerator::with_hash(fnv1a_32),
	};

	let names: Vec<String> = match (&args.name, &args.file) {
		(Some(name), None) => vec![name.clone()],
		(None, Some(path)) => fs::read_to_string(path)
			.with_context(|| format!("Failed to read {}", path.display()))?
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(str::to_string)
			.collect(),
		_ => bail!("Specify either NAME or --file"),
	};
	debug!(count = names.len(), suffix = %args.suffix, "Generating names");

	for name in names.iter().filter(|name| !is_dns_label_safe(name)) {
		warn!(base_name = %name, "Name contains characters outside the DNS label alphabet");
	}

	let results = generate_all(&generator, &names, &args.suffix)
		.context("Failed to generate names")?;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&results)?);
	} else {
		for GeneratedName { generated, .. } in &results {
			println!("{}", generated);
		}
	}

	Ok(())
}
