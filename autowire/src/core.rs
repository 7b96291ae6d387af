//! Core, non-public data structures for the container.

use crate::container::Container;
use crate::error::{Error, Result};
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A factory invoked with the container and the caller's explicit parameters.
pub type Factory = Rc<dyn Fn(&Container, &[Value]) -> Result<Value>>;

/// How a bound identifier is produced. Instances live in their own table.
#[derive(Clone)]
pub(crate) enum Binding {
  Class(String),
  Factory(Factory),
}

impl fmt::Debug for Binding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Binding::Class(target) => write!(f, "Class({})", target),
      Binding::Factory(_) => write!(f, "Factory"),
    }
  }
}

/// Identifier redirections, kept flat so every lookup is a single hop.
#[derive(Debug, Default)]
pub(crate) struct AliasTable {
  aliases: HashMap<String, String>,
}

impl AliasTable {
  pub(crate) fn root_of<'a>(&'a self, identifier: &'a str) -> &'a str {
    self.aliases.get(identifier).map_or(identifier, String::as_str)
  }

  /// Records `alias` as another name for the root of `identifier`.
  ///
  /// Returns the root the alias now points at.
  pub(crate) fn insert(&mut self, identifier: &str, alias: &str) -> String {
    let root = self.root_of(identifier).to_owned();

    if root == alias {
      return root;
    }

    // `alias` may itself have been a root other aliases point at.
    for target in self.aliases.values_mut() {
      if target == alias {
        target.clone_from(&root);
      }
    }
    self.aliases.insert(alias.to_owned(), root.clone());
    root
  }

  pub(crate) fn len(&self) -> usize {
    self.aliases.len()
  }
}

/// An RAII guard marking an identifier as mid-resolution.
///
/// Entering fails if the identifier is already on the stack. Dropping the
/// guard pops the entry, so the stack is released on every exit path,
/// including errors.
pub(crate) struct ResolutionGuard<'a> {
  stack: &'a RefCell<Vec<String>>,
}

impl<'a> ResolutionGuard<'a> {
  pub(crate) fn enter(
    stack: &'a RefCell<Vec<String>>,
    identifier: &str,
    max_depth: Option<usize>,
  ) -> Result<Self> {
    let mut entries = stack.borrow_mut();

    if entries.iter().any(|entry| entry == identifier) {
      let mut path = entries.clone();
      path.push(identifier.to_owned());
      return Err(Error::RecursiveDependency {
        identifier: identifier.to_owned(),
        path,
      });
    }

    if let Some(limit) = max_depth {
      if entries.len() >= limit {
        return Err(Error::DepthExceeded {
          identifier: identifier.to_owned(),
          limit,
        });
      }
    }

    entries.push(identifier.to_owned());
    drop(entries);
    Ok(Self { stack })
  }
}

impl Drop for ResolutionGuard<'_> {
  fn drop(&mut self) {
    self.stack.borrow_mut().pop();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn alias_chain_is_flattened_on_write() {
    let mut table = AliasTable::default();
    table.insert("a", "b");
    table.insert("b", "c");
    table.insert("c", "d");

    assert_eq!(table.root_of("b"), "a");
    assert_eq!(table.root_of("c"), "a");
    assert_eq!(table.root_of("d"), "a");
    assert_eq!(table.root_of("a"), "a");
  }

  #[test]
  fn self_alias_is_ignored() {
    let mut table = AliasTable::default();
    table.insert("a", "a");
    table.insert("a", "b");
    table.insert("b", "a");

    assert_eq!(table.len(), 1);
    assert_eq!(table.root_of("a"), "a");
    assert_eq!(table.root_of("b"), "a");
  }

  #[test]
  fn repointing_a_root_updates_its_aliases() {
    let mut table = AliasTable::default();
    table.insert("a", "b");
    // `a` stops being a root.
    table.insert("z", "a");

    assert_eq!(table.root_of("a"), "z");
    assert_eq!(table.root_of("b"), "z");
  }

  #[test]
  fn guard_detects_reentry_and_releases_on_drop() {
    let stack = RefCell::new(Vec::new());
    {
      let _outer = ResolutionGuard::enter(&stack, "x", None).unwrap();
      let _inner = ResolutionGuard::enter(&stack, "y", None).unwrap();
      let err = ResolutionGuard::enter(&stack, "x", None).err().unwrap();
      assert_eq!(
        err,
        Error::RecursiveDependency {
          identifier: "x".into(),
          path: vec!["x".into(), "y".into(), "x".into()],
        }
      );
      assert_eq!(stack.borrow().len(), 2);
    }
    assert!(stack.borrow().is_empty());
    assert!(ResolutionGuard::enter(&stack, "x", None).is_ok());
  }

  #[test]
  fn guard_enforces_depth_limit() {
    let stack = RefCell::new(Vec::new());
    let _a = ResolutionGuard::enter(&stack, "a", Some(2)).unwrap();
    let _b = ResolutionGuard::enter(&stack, "b", Some(2)).unwrap();
    let err = ResolutionGuard::enter(&stack, "c", Some(2)).err().unwrap();
    assert!(matches!(err, Error::DepthExceeded { limit: 2, .. }));
  }
}
