//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use autowire::{Arguments, Container, Injectable, Parameter, Result, Value};
use std::cell::Cell;
use std::rc::Rc;

thread_local! {
  static A_CONSTRUCTED: Cell<usize> = const { Cell::new(0) };
}

/// Number of `A` values built on this thread so far.
pub fn a_constructed() -> usize {
  A_CONSTRUCTED.with(Cell::get)
}

pub trait AInterface {
  fn name(&self) -> &'static str;
}

/// No dependencies.
#[derive(Debug)]
pub struct A;

impl AInterface for A {
  fn name(&self) -> &'static str {
    "A"
  }
}

impl Injectable for A {
  fn construct(_: &Arguments<'_>) -> Result<Self> {
    A_CONSTRUCTED.with(|count| count.set(count.get() + 1));
    Ok(A)
  }
}

/// Depends on `A`.
pub struct B {
  pub a: Rc<A>,
}

impl Injectable for B {
  fn parameters() -> Vec<Parameter> {
    vec![Parameter::of::<A>("a")]
  }

  fn construct(args: &Arguments<'_>) -> Result<Self> {
    Ok(B { a: args.get(0)? })
  }
}

/// Depends on `B`, two levels deep.
pub struct C {
  pub b: Rc<B>,
}

impl Injectable for C {
  fn parameters() -> Vec<Parameter> {
    vec![Parameter::of::<B>("b")]
  }

  fn construct(args: &Arguments<'_>) -> Result<Self> {
    Ok(C { b: args.get(0)? })
  }
}

/// A required scalar followed by a resolvable dependency.
pub struct D {
  pub message: String,
  pub a: Rc<A>,
}

impl Injectable for D {
  fn parameters() -> Vec<Parameter> {
    vec![Parameter::of::<String>("message"), Parameter::of::<A>("a")]
  }

  fn construct(args: &Arguments<'_>) -> Result<Self> {
    Ok(D {
      message: args.cloned(0)?,
      a: args.get(1)?,
    })
  }
}

/// Both parameters have defaults; `a` defaults to null.
pub struct E {
  pub message: String,
  pub a: Option<Rc<A>>,
}

impl Injectable for E {
  fn parameters() -> Vec<Parameter> {
    vec![
      Parameter::of::<String>("message").with_default(Value::new(String::new())),
      Parameter::of::<A>("a").with_default(Value::null()),
    ]
  }

  fn construct(args: &Arguments<'_>) -> Result<Self> {
    Ok(E {
      message: args.cloned(0)?,
      a: args.get_optional(1)?,
    })
  }
}

/// A required scalar that can never be resolved by type.
#[derive(Debug)]
pub struct F {
  pub message: String,
}

impl Injectable for F {
  fn parameters() -> Vec<Parameter> {
    vec![Parameter::of::<String>("message")]
  }

  fn construct(args: &Arguments<'_>) -> Result<Self> {
    Ok(F {
      message: args.cloned(0)?,
    })
  }
}

/// Requires `BRecursive`, which requires `ARecursive` again.
pub struct ARecursive {
  pub b: Rc<BRecursive>,
}

impl Injectable for ARecursive {
  fn parameters() -> Vec<Parameter> {
    vec![Parameter::of::<BRecursive>("b")]
  }

  fn construct(args: &Arguments<'_>) -> Result<Self> {
    Ok(ARecursive { b: args.get(0)? })
  }
}

pub struct BRecursive {
  pub a: Rc<ARecursive>,
}

impl Injectable for BRecursive {
  fn parameters() -> Vec<Parameter> {
    vec![Parameter::of::<ARecursive>("a")]
  }

  fn construct(args: &Arguments<'_>) -> Result<Self> {
    Ok(BRecursive { a: args.get(0)? })
  }
}

/// A container that knows every fixture type.
pub fn container() -> Container {
  Container::builder()
    .register::<A>()
    .register::<B>()
    .register::<C>()
    .register::<D>()
    .register::<E>()
    .register::<F>()
    .register::<ARecursive>()
    .register::<BRecursive>()
    .declare_abstract::<dyn AInterface>()
    .build()
}
