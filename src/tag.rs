use std::fmt;

/// The image name component every published tag carries.
const IMAGE: &str = "afqsi";

/// A fully-qualified image tag of the form `<namespace>/afqsi:<commit>`.
///
/// Whitespace that leaks in through either component (quoted arguments,
/// trailing newlines from command substitution) is stripped at construction.
/// Nothing else is validated; empty components pass through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(String);

impl Tag {
	#[must_use]
	pub fn new(namespace: &str, commit: &str) -> Self {
		let raw = format!("{namespace}/{IMAGE}:{commit}");

		Self(raw.chars().filter(|c| !c.is_whitespace()).collect())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tag_composition() {
		assert_eq!(Tag::new("myrepo", "abc123").as_str(), "myrepo/afqsi:abc123");
	}

	#[test]
	fn test_spaces_are_stripped() {
		assert_eq!(
			Tag::new("my repo", "ab c123").as_str(),
			"myrepo/afqsi:abc123"
		);
	}

	#[test]
	fn test_tabs_and_newlines_are_stripped() {
		assert_eq!(
			Tag::new("my\trepo\n", "abc123\n").as_str(),
			"myrepo/afqsi:abc123"
		);
	}

	#[test]
	fn test_empty_commit_passes_through() {
		assert_eq!(Tag::new("ns", "").as_str(), "ns/afqsi:");
	}

	#[test]
	fn test_empty_components_pass_through() {
		assert_eq!(Tag::new("", "").as_str(), "/afqsi:");
	}

	#[test]
	fn test_display_matches_as_str() {
		let tag = Tag::new("myrepo", "abc123");

		assert_eq!(tag.to_string(), tag.as_str());
	}
}
