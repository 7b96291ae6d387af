//! # Autowire
//!
//! A dependency resolution container that wires object graphs for application
//! bootstrap code.
//!
//! Given an identifier, the container produces a value by returning a bound
//! instance, invoking a bound factory, following a class redirect, or
//! auto-constructing the named type from its registered constructor
//! signature, resolving every constructor parameter recursively.
//!
//! ## Core Concepts
//!
//! - **Identifier**: an opaque string. A type's identifier is its
//!   `std::any::type_name` (see [`identifier_of`]); any other string is a label
//!   that only resolves if something is bound to it.
//! - **Bindings**: [`Container::bind_class`], [`Container::bind_instance`] and
//!   [`Container::bind_factory`]. Only instances are cached.
//! - **Aliases**: [`Container::alias`] adds another name for an identifier.
//!   Chains are flattened when written.
//! - **Type catalog**: Rust has no runtime reflection, so constructible types
//!   describe their constructor through [`Injectable`] or [`TypeInfo`].
//! - **Invocation**: [`Container::invoke`] resolves the parameters of a
//!   [`Callable`] and calls it.
//!
//! Explicit parameters are matched by position. When a caller supplies exactly
//! as many as the constructor declares, they are used verbatim.
//!
//! ## Quick Start
//!
//! ```
//! use autowire::{Arguments, Container, Injectable, Parameter, Result, Value};
//! use std::rc::Rc;
//!
//! struct Database;
//!
//! impl Injectable for Database {
//!   fn construct(_: &Arguments<'_>) -> Result<Self> {
//!     Ok(Database)
//!   }
//! }
//!
//! struct UserService {
//!   db: Rc<Database>,
//!   table: Rc<String>,
//! }
//!
//! impl Injectable for UserService {
//!   fn parameters() -> Vec<Parameter> {
//!     vec![
//!       Parameter::of::<Database>("db"),
//!       Parameter::of::<String>("table").with_default(Value::new(String::from("users"))),
//!     ]
//!   }
//!
//!   fn construct(args: &Arguments<'_>) -> Result<Self> {
//!     Ok(UserService {
//!       db: args.get(0)?,
//!       table: args.get(1)?,
//!     })
//!   }
//! }
//!
//! fn main() -> Result<()> {
//!   let container = Container::builder()
//!     .register::<Database>()
//!     .register::<UserService>()
//!     .build();
//!
//!   let service = container.make::<UserService>()?;
//!   assert_eq!(*service.table, "users");
//!   Ok(())
//! }
//! ```

mod builder;
mod callable;
mod container;
mod core;
mod error;
mod introspect;
mod macros;
mod value;

pub use builder::ContainerBuilder;
pub use callable::Callable;
pub use container::Container;
pub use crate::core::Factory;
pub use error::{Error, Result};
pub use introspect::{
  identifier_of, Constructor, Injectable, ParamType, Parameter, Signature, TypeCatalog, TypeInfo,
  TypeKind,
};
pub use value::{Arguments, Value};
