use autowire::{identifier_of, Arguments, Container, Error, Injectable, Parameter, Result};
use std::rc::Rc;

struct UnregisteredService;

struct Mailer {
  host: Rc<String>,
}

impl Injectable for Mailer {
  fn parameters() -> Vec<Parameter> {
    vec![Parameter::of::<String>("host")]
  }

  fn construct(args: &Arguments<'_>) -> Result<Self> {
    Ok(Mailer { host: args.get(0)? })
  }
}

struct Node {
  _next: Rc<Node>,
}

impl Injectable for Node {
  fn parameters() -> Vec<Parameter> {
    vec![Parameter::of::<Node>("next")]
  }

  fn construct(args: &Arguments<'_>) -> Result<Self> {
    Ok(Node { _next: args.get(0)? })
  }
}

fn main() {
  let container = Container::builder()
    .register::<Mailer>()
    .register::<Node>()
    .build();

  // --- Unknown type ---
  match container.make::<UnregisteredService>() {
    Err(Error::ClassNotFound(name)) => println!("Not in the catalog: {}", name),
    _ => panic!("Should not have found the service!"),
  }

  // --- Scalar parameter with no default ---
  match container.make::<Mailer>() {
    Err(err @ Error::DependencyResolution { .. }) => println!("{}", err),
    _ => panic!("A bare String parameter cannot be resolved by type"),
  }

  // Supplying it explicitly fixes the resolution.
  let mailer = container
    .resolve_as::<Mailer>(&identifier_of::<Mailer>(), &autowire::args![String::from("smtp.local")])
    .unwrap();
  println!("Mailer host: {}", mailer.host);

  // --- Cycles ---
  match container.make::<Node>() {
    Err(err @ Error::RecursiveDependency { .. }) => println!("{}", err),
    _ => panic!("A self-referencing constructor must be rejected"),
  }
}
