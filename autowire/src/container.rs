//! The main `Container` struct and its associated methods.

use crate::builder::ContainerBuilder;
use crate::callable::Callable;
use crate::core::{AliasTable, Binding, ResolutionGuard};
use crate::error::{Error, Result};
use crate::introspect::{
  identifier_of, Injectable, ParamType, Parameter, Signature, TypeCatalog, TypeInfo, TypeKind,
};
use crate::value::{Arguments, Value};
use std::any::{type_name, Any};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// The dependency resolution container.
///
/// A container owns its bindings, instances, aliases, type catalog and
/// resolution stack. It is single-threaded: registries use interior
/// mutability so that factories, which receive `&Container`, can resolve
/// further dependencies while a resolution is in progress.
pub struct Container {
  bindings: RefCell<HashMap<String, Binding>>,
  instances: RefCell<HashMap<String, Value>>,
  aliases: RefCell<AliasTable>,
  types: RefCell<TypeCatalog>,
  stack: RefCell<Vec<String>>,
  max_depth: Option<usize>,
}

impl Default for Container {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl Container {
  /// Creates a new, empty `Container` with no depth limit.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn builder() -> ContainerBuilder {
    ContainerBuilder::new()
  }

  pub(crate) fn from_parts(types: TypeCatalog, max_depth: Option<usize>) -> Self {
    Self {
      bindings: RefCell::new(HashMap::new()),
      instances: RefCell::new(HashMap::new()),
      aliases: RefCell::new(AliasTable::default()),
      types: RefCell::new(types),
      stack: RefCell::new(Vec::new()),
      max_depth,
    }
  }

  // --- Bindings ---

  /// Redirects `identifier` to `target`; explicit parameters are passed through.
  pub fn bind_class(&self, identifier: impl Into<String>, target: impl Into<String>) {
    let identifier = identifier.into();
    let target = target.into();
    tracing::debug!(identifier = %identifier, target = %target, "bind class");
    self.bindings.borrow_mut().insert(identifier, Binding::Class(target));
  }

  /// Stores `value`; every resolution of `identifier` returns this same handle.
  pub fn bind_instance(&self, identifier: impl Into<String>, value: Value) {
    let identifier = identifier.into();
    tracing::debug!(identifier = %identifier, value = value.type_name(), "bind instance");
    self.instances.borrow_mut().insert(identifier, value);
  }

  /// Registers a factory invoked on every resolution of `identifier`.
  pub fn bind_factory<F>(&self, identifier: impl Into<String>, factory: F)
  where
    F: Fn(&Container, &[Value]) -> Result<Value> + 'static,
  {
    let identifier = identifier.into();
    tracing::debug!(identifier = %identifier, "bind factory");
    self
      .bindings
      .borrow_mut()
      .insert(identifier, Binding::Factory(Rc::new(factory)));
  }

  /// Makes `alias` resolve to whatever the root of `identifier` resolves to.
  pub fn alias(&self, identifier: &str, alias: &str) {
    let root = self.aliases.borrow_mut().insert(identifier, alias);
    tracing::debug!(alias, root = %root, "alias");
  }

  // --- Types ---

  pub fn register<T: Injectable>(&self) {
    self.register_type(TypeInfo::of::<T>());
  }

  pub fn register_type(&self, info: TypeInfo) {
    tracing::debug!(
      name = info.name(),
      instantiable = info.is_instantiable(),
      "register type"
    );
    self.types.borrow_mut().insert(info);
  }

  pub fn declare_abstract<T: ?Sized + Any>(&self) {
    self.register_type(TypeInfo::abstract_type(identifier_of::<T>()));
  }

  // --- Queries ---

  pub fn max_depth(&self) -> Option<usize> {
    self.max_depth
  }

  /// The root identifier `identifier` redirects to.
  pub fn root_of(&self, identifier: &str) -> String {
    self.aliases.borrow().root_of(identifier).to_owned()
  }

  /// Returns `true` if an instance or binding exists for `identifier` after alias redirection.
  pub fn is_bound(&self, identifier: &str) -> bool {
    let id = self.root_of(identifier);
    self.instances.borrow().contains_key(&id) || self.bindings.borrow().contains_key(&id)
  }

  // --- Resolution ---

  /// Resolves `identifier` to a value.
  ///
  /// Instances are returned as stored. Factory and class bindings are
  /// evaluated fresh on every call. Unbound identifiers are auto-constructed
  /// from the type catalog, resolving constructor parameters recursively.
  pub fn resolve(&self, identifier: &str, parameters: &[Value]) -> Result<Value> {
    let id = self.root_of(identifier);
    let _guard = ResolutionGuard::enter(&self.stack, &id, self.max_depth)?;
    tracing::trace!(
      identifier = %id,
      depth = self.depth(),
      explicit = parameters.len(),
      "resolving"
    );

    let result = self.produce(&id, parameters);
    match &result {
      Ok(value) => tracing::trace!(
        identifier = %id,
        depth = self.depth(),
        value = value.type_name(),
        "resolved"
      ),
      Err(err) => tracing::debug!(identifier = %id, error = %err, "resolution failed"),
    }
    result
  }

  /// Resolves `identifier` and downcasts the result to `T`.
  pub fn resolve_as<T: Any>(&self, identifier: &str, parameters: &[Value]) -> Result<Rc<T>> {
    let value = self.resolve(identifier, parameters)?;
    value.downcast::<T>().ok_or_else(|| Error::TypeMismatch {
      identifier: identifier.to_owned(),
      expected: type_name::<T>(),
      found: value.type_name(),
    })
  }

  /// Resolves `T` by its own identifier.
  pub fn make<T: Any>(&self) -> Result<Rc<T>> {
    self.resolve_as::<T>(&identifier_of::<T>(), &[])
  }

  /// Resolves the trait object `I` by its own identifier.
  pub fn make_trait<I: ?Sized + Any>(&self) -> Result<Rc<I>> {
    let identifier = identifier_of::<I>();
    let value = self.resolve(&identifier, &[])?;
    value.downcast_trait::<I>().ok_or_else(|| Error::TypeMismatch {
      identifier,
      expected: type_name::<Rc<I>>(),
      found: value.type_name(),
    })
  }

  /// Resolves the declared parameters of `callable` and calls it.
  pub fn invoke(&self, callable: &Callable, parameters: &[Value]) -> Result<Value> {
    let signature = callable.signature();
    tracing::trace!(callable = signature.owner(), explicit = parameters.len(), "invoking");

    if signature.is_empty() {
      return callable.call(&Arguments::new(signature, Vec::new()));
    }

    let values = self.resolve_parameters(signature, parameters)?;
    callable.call(&Arguments::new(signature, values))
  }

  // --- PRIVATE HELPERS ---

  fn depth(&self) -> usize {
    self.stack.borrow().len()
  }

  fn produce(&self, id: &str, parameters: &[Value]) -> Result<Value> {
    let instance = self.instances.borrow().get(id).cloned();
    if let Some(instance) = instance {
      return Ok(instance);
    }

    // Clone the binding out so the table is not borrowed while it runs.
    let binding = self.bindings.borrow().get(id).cloned();
    match binding {
      Some(Binding::Factory(factory)) => factory(self, parameters),
      Some(Binding::Class(target)) => self.resolve(&target, parameters),
      None => self.construct(id, parameters),
    }
  }

  fn construct(&self, name: &str, parameters: &[Value]) -> Result<Value> {
    let info = self
      .types
      .borrow()
      .lookup(name)
      .ok_or_else(|| Error::ClassNotFound(name.to_owned()))?;

    match info.kind() {
      TypeKind::Abstract => Err(Error::NotInstantiable(name.to_owned())),
      TypeKind::Concrete {
        signature,
        constructor,
      } => {
        let values = self.resolve_parameters(signature, parameters)?;
        constructor(&Arguments::new(signature, values))
      }
    }
  }

  /// Matches explicit parameters by position and resolves the rest.
  ///
  /// When the explicit list has exactly as many entries as the signature it
  /// is used verbatim, without looking at any declared type.
  fn resolve_parameters(&self, signature: &Signature, explicit: &[Value]) -> Result<Vec<Value>> {
    if signature.len() == explicit.len() {
      return Ok(explicit.to_vec());
    }

    signature
      .parameters()
      .iter()
      .enumerate()
      .map(|(position, parameter)| match explicit.get(position) {
        Some(value) => Ok(value.clone()),
        None => self.resolve_parameter(signature, parameter),
      })
      .collect()
  }

  fn resolve_parameter(&self, signature: &Signature, parameter: &Parameter) -> Result<Value> {
    if let Some(default) = parameter.default_value() {
      return Ok(default.clone());
    }

    match parameter.ty() {
      ParamType::Named(identifier) => self.resolve(identifier, &[]),
      ParamType::Untyped | ParamType::Builtin(_) => Err(Error::DependencyResolution {
        parameter: parameter.name().to_owned(),
        owner: signature.owner().to_owned(),
      }),
    }
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Container")
      .field("bindings", &self.bindings.borrow().len())
      .field("instances", &self.instances.borrow().len())
      .field("aliases", &self.aliases.borrow().len())
      .field("types", &self.types.borrow().len())
      .field("max_depth", &self.max_depth)
      .finish()
  }
}
