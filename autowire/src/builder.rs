use crate::container::Container;
use crate::introspect::{Injectable, TypeCatalog, TypeInfo};
use std::any::Any;

/// A builder for configuring a [`Container`] before use.
///
/// ```
/// use autowire::{Container, TypeCatalog};
///
/// let container = Container::builder()
///   .types(TypeCatalog::new())
///   .max_depth(64)
///   .build();
/// assert_eq!(container.max_depth(), Some(64));
/// ```
#[derive(Debug, Default)]
pub struct ContainerBuilder {
  types: TypeCatalog,
  max_depth: Option<usize>,
}

impl ContainerBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Replaces the type catalog, discarding any types registered on this builder so far.
  pub fn types(mut self, catalog: TypeCatalog) -> Self {
    self.types = catalog;
    self
  }

  pub fn register<T: Injectable>(mut self) -> Self {
    self.types.register::<T>();
    self
  }

  pub fn register_type(mut self, info: TypeInfo) -> Self {
    self.types.insert(info);
    self
  }

  pub fn declare_abstract<T: ?Sized + Any>(mut self) -> Self {
    self.types.declare_abstract::<T>();
    self
  }

  /// Fails any resolution nested deeper than `depth` identifiers with
  /// [`Error::DepthExceeded`](crate::Error::DepthExceeded).
  pub fn max_depth(mut self, depth: usize) -> Self {
    self.max_depth = Some(depth);
    self
  }

  pub fn build(self) -> Container {
    Container::from_parts(self.types, self.max_depth)
  }
}
