#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::Result;
use clap::Parser;
use docker::Docker;
use std::path::PathBuf;

mod docker;
mod release;
mod tag;

/// Build the afqsi Docker image for a commit and push it to a registry.
#[derive(Parser)]
#[clap(version, about)]
struct Cli {
	/// Revision identifier used as the image's version component
	#[clap(default_value = "")]
	commit: String,

	/// Registry/organization prefix to publish the image under
	#[clap(default_value = "")]
	namespace: String,
}

#[derive(Debug, Clone)]
pub struct Context {
	pub cwd: PathBuf,
}

impl Context {
	/// Create a new context
	///
	/// # Errors
	///
	/// This function will return an error if the Docker daemon is not running or if the current working directory cannot be determined.
	pub fn new() -> Result<Self> {
		Docker::check_connection()?;

		Ok(Self {
			cwd: std::env::current_dir()?,
		})
	}
}

fn main() {
	let cli = Cli::parse();

	// Exported before anything else runs; both docker invocations inherit it.
	std::env::set_var("COMMIT", &cli.commit);

	let ctx = Context::new().unwrap_or_else(|err| {
		eprintln!("{err}");
		std::process::exit(1);
	});

	let code = release::handle(&ctx, &cli.commit, &cli.namespace).unwrap_or_else(|err| {
		eprintln!("{err}");
		1
	});

	std::process::exit(code);
}
