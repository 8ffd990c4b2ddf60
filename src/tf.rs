//! Tool Foundations

use std::sync::Arc;

/// Token for efficient comparison, assignment, and hashing of known strings.
///
/// Tokens are cloned freely by data source containers, so the backing string
/// is shared rather than copied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
	data: Arc<str>,
}

impl Token {
	pub fn new(name: impl AsRef<str>) -> Self {
		Token {
			data: Arc::from(name.as_ref()),
		}
	}

	pub fn empty() -> Self {
		Token { data: Arc::from("") }
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn as_str(&self) -> &str {
		&self.data
	}
}

impl Default for Token {
	fn default() -> Self {
		Self::empty()
	}
}

impl From<&str> for Token {
	fn from(s: &str) -> Self {
		Token::new(s)
	}
}

impl std::fmt::Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.data)
	}
}

macro_rules! declare_public_tokens {
	($struct:ident, $static:ident, [$($name:ident: $value:expr),* $(,)?]) => {
		pub struct $struct {
			$(pub $name: $crate::tf::Token,)*
		}

		pub static $static: std::sync::LazyLock<$struct> = std::sync::LazyLock::new(|| {
			$struct {
				$($name: $crate::tf::Token::new($value),)*
			}
		});
	};
}

pub(crate) use declare_public_tokens;
