use std::{
	io,
	path::Path,
	process::{Command, ExitStatus, Stdio},
};

/// Errors that can occur when interacting with the docker CLI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Could not connect to Docker. Is the docker daemon running?")]
	NotRunning,

	#[error("Failed to run command: {0}")]
	Spawn(#[from] io::Error),
}

/// A wrapper around the docker CLI.
pub struct Docker {}

impl Docker {
	/// Check if the docker daemon is running.
	///
	/// # Errors
	///
	/// Returns an error if the docker daemon is not running.
	pub fn check_connection() -> Result<(), Error> {
		let status = Command::new("docker")
			.arg("info")
			.stdout(Stdio::null())
			.status()?;

		if !status.success() {
			return Err(Error::NotRunning);
		}

		Ok(())
	}

	/// Build the image tagged `tag` with the layer cache disabled, using
	/// `context` as the build context. Build output streams through to the
	/// caller's stdout/stderr.
	///
	/// # Errors
	///
	/// Returns an error if the docker binary could not be spawned. A build
	/// that runs and fails is reported through the returned status.
	pub fn build(tag: &str, context: &Path) -> Result<ExitStatus, Error> {
		Ok(Command::new("docker")
			.args(["build", "--no-cache", "--tag", tag, "."])
			.current_dir(context)
			.stdout(Stdio::inherit())
			.stderr(Stdio::inherit())
			.status()?)
	}

	/// Push `tag` to its registry.
	///
	/// # Errors
	///
	/// Returns an error if the docker binary could not be spawned. A push
	/// that runs and fails is reported through the returned status.
	pub fn push(tag: &str) -> Result<ExitStatus, Error> {
		Ok(Command::new("docker")
			.args(["push", tag])
			.stdout(Stdio::inherit())
			.stderr(Stdio::inherit())
			.status()?)
	}
}
