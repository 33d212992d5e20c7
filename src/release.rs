use crate::{docker, docker::Docker, tag::Tag, Context};

/// Build the image for `commit` and push it under `namespace`.
///
/// Returns the push invocation's exit code. The push runs even when the
/// build fails; only a spawn failure short-circuits.
pub fn handle(ctx: &Context, commit: &str, namespace: &str) -> Result<i32, docker::Error> {
	let tag = Tag::new(namespace, commit);
	println!("{tag}");

	let build = Docker::build(tag.as_str(), &ctx.cwd)?;
	if !build.success() {
		eprintln!("docker build failed, pushing {tag} anyway");
	}

	let push = Docker::push(tag.as_str())?;

	Ok(push.code().unwrap_or(1))
}
