use thiserror::Error;

/// Every way a resolution or invocation can fail.
///
/// All variants are terminal for the attempt that produced them. The container
/// never retries, falls back to another binding, or swallows an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// Auto-construction was attempted for an identifier the type catalog does not know.
  #[error("Class cannot be loaded: {0}")]
  ClassNotFound(String),

  /// The identifier names an abstract type and nothing redirects it to a concrete one.
  #[error("Cannot instantiate: {0}")]
  NotInstantiable(String),

  /// A required parameter has no explicit value, no default and no nominal type.
  #[error("Unresolved dependency: {parameter} in {owner}")]
  DependencyResolution { parameter: String, owner: String },

  /// The identifier is already on the active resolution path.
  #[error("Identifier is being resolved recursively: {identifier} (path: {})", .path.join(" -> "))]
  RecursiveDependency {
    identifier: String,
    path: Vec<String>,
  },

  /// A constructor or callable read an argument as the wrong type.
  #[error("Argument `{parameter}` of {owner} expected {expected}, found {found}")]
  ArgumentType {
    owner: String,
    parameter: String,
    expected: &'static str,
    found: &'static str,
  },

  /// A constructor or callable read past the end of its argument list.
  #[error("Missing argument #{index} for {owner}")]
  MissingArgument { owner: String, index: usize },

  /// A typed resolution produced a value of another type.
  #[error("Resolved `{identifier}` to {found}, expected {expected}")]
  TypeMismatch {
    identifier: String,
    expected: &'static str,
    found: &'static str,
  },

  /// The configured resolution depth limit was reached.
  #[error("Resolution depth limit of {limit} exceeded while resolving {identifier}")]
  DepthExceeded { identifier: String, limit: usize },
}

impl Error {
  /// The identifier this error is about, when it names one.
  pub fn identifier(&self) -> Option<&str> {
    match self {
      Error::ClassNotFound(id) | Error::NotInstantiable(id) => Some(id.as_str()),
      Error::RecursiveDependency { identifier, .. }
      | Error::TypeMismatch { identifier, .. }
      | Error::DepthExceeded { identifier, .. } => Some(identifier.as_str()),
      _ => None,
    }
  }
}

/// A specialized `Result` type for container operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
