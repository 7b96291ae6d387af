//! The type introspector: explicitly registered constructor signatures.
//!
//! Rust has no runtime reflection, so every type the container may
//! auto-construct is described up front by a [`TypeInfo`]: its identifier,
//! its ordered constructor parameters, and a constructor closure. Types that
//! exist only as abstractions (trait objects, interfaces) are declared
//! [`TypeKind::Abstract`] so the container can tell "unknown" apart from
//! "known but not instantiable".

use crate::error::Result;
use crate::value::{Arguments, Value};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Returns the identifier under which `T` is auto-constructed.
pub fn identifier_of<T: ?Sized + Any>() -> String {
  type_name::<T>().to_owned()
}

/// The declared type of a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
  /// No type was declared.
  Untyped,
  /// A primitive or std scalar, never resolved from the container.
  Builtin(&'static str),
  /// A nominal type, resolved through the container by identifier.
  Named(String),
}

impl ParamType {
  /// Classifies `T`: std scalars, std containers and wrappers, references,
  /// slices and tuples become `Builtin`, everything else `Named`.
  pub fn of<T: ?Sized + Any>() -> Self {
    if is_builtin(TypeId::of::<T>(), type_name::<T>()) {
      ParamType::Builtin(type_name::<T>())
    } else {
      ParamType::Named(identifier_of::<T>())
    }
  }
}

// Paths of non-nominal types: std items plus structural type syntax.
const BUILTIN_PREFIXES: [&str; 8] = ["alloc::", "core::", "std::", "&", "[", "(", "*", "fn("];

fn is_builtin(id: TypeId, name: &str) -> bool {
  BUILTIN_PREFIXES.iter().any(|prefix| name.starts_with(prefix)) || is_primitive(id)
}

fn is_primitive(id: TypeId) -> bool {
  [
    TypeId::of::<bool>(),
    TypeId::of::<char>(),
    TypeId::of::<i8>(),
    TypeId::of::<i16>(),
    TypeId::of::<i32>(),
    TypeId::of::<i64>(),
    TypeId::of::<i128>(),
    TypeId::of::<isize>(),
    TypeId::of::<u8>(),
    TypeId::of::<u16>(),
    TypeId::of::<u32>(),
    TypeId::of::<u64>(),
    TypeId::of::<u128>(),
    TypeId::of::<usize>(),
    TypeId::of::<f32>(),
    TypeId::of::<f64>(),
    TypeId::of::<()>(),
    TypeId::of::<str>(),
  ]
  .contains(&id)
}

/// A single declared parameter of a constructor or callable.
#[derive(Clone)]
pub struct Parameter {
  name: String,
  ty: ParamType,
  default: Option<Value>,
}

impl Parameter {
  /// A parameter with no declared type.
  pub fn untyped(name: impl Into<String>) -> Self {
    Self::with_type(name, ParamType::Untyped)
  }

  /// A parameter declared as `T`.
  pub fn of<T: ?Sized + Any>(name: impl Into<String>) -> Self {
    Self::with_type(name, ParamType::of::<T>())
  }

  /// A parameter resolved through an arbitrary identifier rather than a Rust type.
  pub fn named(name: impl Into<String>, identifier: impl Into<String>) -> Self {
    Self::with_type(name, ParamType::Named(identifier.into()))
  }

  pub fn with_type(name: impl Into<String>, ty: ParamType) -> Self {
    Self {
      name: name.into(),
      ty,
      default: None,
    }
  }

  /// Makes the parameter optional, falling back to `value` when not supplied.
  pub fn with_default(mut self, value: Value) -> Self {
    self.default = Some(value);
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn ty(&self) -> &ParamType {
    &self.ty
  }

  pub fn default_value(&self) -> Option<&Value> {
    self.default.as_ref()
  }

  pub fn is_optional(&self) -> bool {
    self.default.is_some()
  }
}

impl fmt::Debug for Parameter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Parameter")
      .field("name", &self.name)
      .field("ty", &self.ty)
      .field("optional", &self.is_optional())
      .finish()
  }
}

/// An ordered parameter list and the name of the function that declares it.
#[derive(Debug, Clone)]
pub struct Signature {
  owner: String,
  parameters: Vec<Parameter>,
}

impl Signature {
  pub fn new(owner: impl Into<String>, parameters: Vec<Parameter>) -> Self {
    Self {
      owner: owner.into(),
      parameters,
    }
  }

  pub fn owner(&self) -> &str {
    &self.owner
  }

  pub fn parameters(&self) -> &[Parameter] {
    &self.parameters
  }

  pub fn len(&self) -> usize {
    self.parameters.len()
  }

  pub fn is_empty(&self) -> bool {
    self.parameters.is_empty()
  }
}

/// Builds a value from its resolved constructor arguments.
pub type Constructor = Rc<dyn Fn(&Arguments<'_>) -> Result<Value>>;

pub enum TypeKind {
  Concrete {
    signature: Signature,
    constructor: Constructor,
  },
  Abstract,
}

/// Everything the container knows about one constructible (or abstract) type.
pub struct TypeInfo {
  name: String,
  kind: TypeKind,
}

impl TypeInfo {
  /// Describes a concrete type whose constructor takes `parameters`.
  pub fn concrete(
    name: impl Into<String>,
    parameters: Vec<Parameter>,
    constructor: impl Fn(&Arguments<'_>) -> Result<Value> + 'static,
  ) -> Self {
    let name = name.into();
    let signature = Signature::new(format!("{}::new", name), parameters);
    Self {
      name,
      kind: TypeKind::Concrete {
        signature,
        constructor: Rc::new(constructor),
      },
    }
  }

  /// Describes a type with no constructor path, such as a trait object.
  pub fn abstract_type(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      kind: TypeKind::Abstract,
    }
  }

  /// Derives the description of `T` from its [`Injectable`] impl.
  pub fn of<T: Injectable>() -> Self {
    Self::concrete(identifier_of::<T>(), T::parameters(), |args| {
      T::construct(args).map(Value::new)
    })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn kind(&self) -> &TypeKind {
    &self.kind
  }

  pub fn is_instantiable(&self) -> bool {
    matches!(self.kind, TypeKind::Concrete { .. })
  }
}

impl fmt::Debug for TypeInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut s = f.debug_struct("TypeInfo");
    s.field("name", &self.name);
    match &self.kind {
      TypeKind::Concrete { signature, .. } => s.field("signature", signature),
      TypeKind::Abstract => s.field("abstract", &true),
    };
    s.finish()
  }
}

/// A type the container can auto-construct.
///
/// ```
/// use autowire::{Arguments, Injectable, Parameter, Result};
/// use std::rc::Rc;
///
/// struct Clock;
/// impl Injectable for Clock {
///   fn construct(_: &Arguments<'_>) -> Result<Self> {
///     Ok(Clock)
///   }
/// }
///
/// struct Scheduler {
///   clock: Rc<Clock>,
/// }
/// impl Injectable for Scheduler {
///   fn parameters() -> Vec<Parameter> {
///     vec![Parameter::of::<Clock>("clock")]
///   }
///   fn construct(args: &Arguments<'_>) -> Result<Self> {
///     Ok(Scheduler { clock: args.get(0)? })
///   }
/// }
/// ```
pub trait Injectable: Any + Sized {
  /// Constructor parameters in declaration order.
  fn parameters() -> Vec<Parameter> {
    Vec::new()
  }

  fn construct(args: &Arguments<'_>) -> Result<Self>;
}

/// The catalog of types known to a container, keyed by identifier.
#[derive(Debug, Default)]
pub struct TypeCatalog {
  types: HashMap<String, Rc<TypeInfo>>,
}

impl TypeCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register<T: Injectable>(&mut self) -> &mut Self {
    self.insert(TypeInfo::of::<T>())
  }

  /// Adds `info`, replacing any earlier entry with the same name.
  pub fn insert(&mut self, info: TypeInfo) -> &mut Self {
    self.types.insert(info.name().to_owned(), Rc::new(info));
    self
  }

  pub fn declare_abstract<T: ?Sized + Any>(&mut self) -> &mut Self {
    self.declare_abstract_named(identifier_of::<T>())
  }

  pub fn declare_abstract_named(&mut self, name: impl Into<String>) -> &mut Self {
    self.insert(TypeInfo::abstract_type(name))
  }

  pub fn lookup(&self, name: &str) -> Option<Rc<TypeInfo>> {
    self.types.get(name).cloned()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.types.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.types.len()
  }

  pub fn is_empty(&self) -> bool {
    self.types.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Engine;

  #[test]
  fn scalars_are_builtin() {
    assert!(matches!(ParamType::of::<String>(), ParamType::Builtin(_)));
    assert_eq!(ParamType::of::<u8>(), ParamType::Builtin("u8"));
    assert!(matches!(ParamType::of::<&'static str>(), ParamType::Builtin(_)));
  }

  #[test]
  fn std_containers_and_wrappers_are_builtin() {
    use std::collections::HashMap;

    assert!(matches!(ParamType::of::<Vec<String>>(), ParamType::Builtin(_)));
    assert!(matches!(ParamType::of::<Option<String>>(), ParamType::Builtin(_)));
    assert!(matches!(ParamType::of::<Box<str>>(), ParamType::Builtin(_)));
    assert!(matches!(ParamType::of::<HashMap<String, String>>(), ParamType::Builtin(_)));
    assert!(matches!(ParamType::of::<[u8]>(), ParamType::Builtin(_)));
    assert!(matches!(ParamType::of::<(u8, Engine)>(), ParamType::Builtin(_)));
  }

  #[test]
  fn trait_objects_are_named() {
    trait Drive {}
    assert_eq!(ParamType::of::<dyn Drive>(), ParamType::Named(identifier_of::<dyn Drive>()));
  }

  #[test]
  fn nominal_types_are_named_by_identifier() {
    assert_eq!(ParamType::of::<Engine>(), ParamType::Named(identifier_of::<Engine>()));
    assert!(identifier_of::<Engine>().ends_with("Engine"));
  }

  #[test]
  fn default_makes_parameter_optional() {
    let p = Parameter::of::<String>("label");
    assert!(!p.is_optional());
    let p = p.with_default(Value::new(String::new()));
    assert!(p.is_optional());
  }

  #[test]
  fn catalog_distinguishes_abstract_from_concrete() {
    trait Drive {}

    let mut catalog = TypeCatalog::new();
    catalog
      .insert(TypeInfo::concrete("engine", vec![], |_| Ok(Value::new(Engine))))
      .declare_abstract::<dyn Drive>()
      .declare_abstract_named("contracts.Transmission");

    assert_eq!(catalog.len(), 3);
    assert!(catalog.contains("contracts.Transmission"));
    assert!(!catalog.lookup("contracts.Transmission").unwrap().is_instantiable());
    assert!(catalog.lookup("engine").unwrap().is_instantiable());
    let drive = catalog.lookup(&identifier_of::<dyn Drive>()).unwrap();
    assert!(!drive.is_instantiable());
    assert!(catalog.lookup("gearbox").is_none());
  }

  #[test]
  fn constructor_owner_is_type_new() {
    let info = TypeInfo::concrete("engine", vec![Parameter::untyped("fuel")], |_| {
      Ok(Value::new(Engine))
    });
    match info.kind() {
      TypeKind::Concrete { signature, .. } => {
        assert_eq!(signature.owner(), "engine::new");
        assert_eq!(signature.len(), 1);
      }
      TypeKind::Abstract => panic!("expected a concrete type"),
    }
  }
}
