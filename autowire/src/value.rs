//! Opaque value handles and positional argument lists.

use crate::error::{Error, Result};
use crate::introspect::Signature;
use std::any::{type_name, Any};
use std::fmt;
use std::rc::Rc;

// Marker stored behind `Value::null()`.
struct Null;

/// A reference-counted, type-erased value produced or consumed by the container.
///
/// Cloning a `Value` clones the handle, not the underlying object, so identity
/// is preserved: two clones of the same `Value` are `ptr_eq`.
#[derive(Clone)]
pub struct Value {
  inner: Rc<dyn Any>,
  type_name: &'static str,
}

impl Value {
  /// Wraps `value` in a new handle.
  pub fn new<T: Any>(value: T) -> Self {
    Self::from_rc(Rc::new(value))
  }

  /// Wraps an existing `Rc` without reallocating, keeping its identity.
  pub fn from_rc<T: Any>(value: Rc<T>) -> Self {
    Self {
      inner: value,
      type_name: type_name::<T>(),
    }
  }

  /// Wraps a trait object. Read it back with [`Value::downcast_trait`].
  pub fn from_trait<I: ?Sized + Any>(value: Rc<I>) -> Self {
    Self::new(value)
  }

  /// The value used for nullable defaults.
  pub fn null() -> Self {
    Self {
      inner: Rc::new(Null),
      type_name: "null",
    }
  }

  pub fn is_null(&self) -> bool {
    self.inner.is::<Null>()
  }

  pub fn is<T: Any>(&self) -> bool {
    self.inner.is::<T>()
  }

  /// Name of the type the handle was created from.
  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  pub fn downcast<T: Any>(&self) -> Option<Rc<T>> {
    Rc::clone(&self.inner).downcast::<T>().ok()
  }

  pub fn downcast_trait<I: ?Sized + Any>(&self) -> Option<Rc<I>> {
    self.downcast::<Rc<I>>().map(|outer| Rc::clone(&*outer))
  }

  /// Returns `true` if both handles point at the same object.
  pub fn ptr_eq(a: &Value, b: &Value) -> bool {
    std::ptr::eq(
      Rc::as_ptr(&a.inner) as *const (),
      Rc::as_ptr(&b.inner) as *const (),
    )
  }
}

impl fmt::Debug for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Value({})", self.type_name)
  }
}

/// The resolved, positional argument list handed to a constructor or callable.
pub struct Arguments<'a> {
  signature: &'a Signature,
  values: Vec<Value>,
}

impl<'a> Arguments<'a> {
  pub(crate) fn new(signature: &'a Signature, values: Vec<Value>) -> Self {
    Self { signature, values }
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Name of the function these arguments were resolved for.
  pub fn owner(&self) -> &str {
    self.signature.owner()
  }

  pub fn value(&self, index: usize) -> Result<&Value> {
    self.values.get(index).ok_or_else(|| Error::MissingArgument {
      owner: self.signature.owner().to_owned(),
      index,
    })
  }

  /// Reads argument `index` as `T`.
  pub fn get<T: Any>(&self, index: usize) -> Result<Rc<T>> {
    let value = self.value(index)?;
    value
      .downcast::<T>()
      .ok_or_else(|| self.mismatch(index, type_name::<T>(), value))
  }

  /// Reads argument `index` as `T`, mapping a null value to `None`.
  pub fn get_optional<T: Any>(&self, index: usize) -> Result<Option<Rc<T>>> {
    let value = self.value(index)?;
    if value.is_null() {
      return Ok(None);
    }
    self.get::<T>(index).map(Some)
  }

  /// Reads argument `index` as a trait object registered with [`Value::from_trait`].
  pub fn get_trait<I: ?Sized + Any>(&self, index: usize) -> Result<Rc<I>> {
    let value = self.value(index)?;
    value
      .downcast_trait::<I>()
      .ok_or_else(|| self.mismatch(index, type_name::<Rc<I>>(), value))
  }

  /// Reads argument `index` as `T` and clones it out of its handle.
  pub fn cloned<T: Any + Clone>(&self, index: usize) -> Result<T> {
    self.get::<T>(index).map(|rc| (*rc).clone())
  }

  fn mismatch(&self, index: usize, expected: &'static str, found: &Value) -> Error {
    let parameter = self
      .signature
      .parameters()
      .get(index)
      .map(|p| p.name().to_owned())
      .unwrap_or_else(|| format!("#{}", index));
    Error::ArgumentType {
      owner: self.signature.owner().to_owned(),
      parameter,
      expected,
      found: found.type_name(),
    }
  }
}

impl fmt::Debug for Arguments<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Arguments")
      .field("owner", &self.signature.owner())
      .field("values", &self.values)
      .finish()
  }
}
