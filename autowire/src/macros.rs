//! Public macros for ergonomic parameter lists and service resolution.

/// Builds a `Vec<Value>` of explicit parameters, wrapping each expression
/// with [`Value::new`](crate::Value::new).
///
/// ```
/// use autowire::args;
///
/// let params = args!["smtp.example.com", 25_u16];
/// assert_eq!(params.len(), 2);
/// assert_eq!(*params[1].downcast::<u16>().unwrap(), 25);
/// ```
#[macro_export]
macro_rules! args {
  () => {
    ::std::vec::Vec::<$crate::Value>::new()
  };
  ($($value:expr),+ $(,)?) => {
    ::std::vec![$($crate::Value::new($value)),+]
  };
}

/// Resolves a service from a container, panicking if it cannot be resolved.
///
/// Intended for bootstrap code where a missing dependency is fatal. For a
/// non-panicking version, use `Container::make` or `Container::resolve_as`.
///
/// ```
/// use autowire::{resolve, Arguments, Container, Injectable, Result, Value};
///
/// struct Clock;
/// impl Injectable for Clock {
///   fn construct(_: &Arguments<'_>) -> Result<Self> {
///     Ok(Clock)
///   }
/// }
///
/// let container = Container::new();
/// container.register::<Clock>();
/// container.bind_instance("greeting", Value::new(String::from("hello")));
///
/// let _clock = resolve!(container, Clock);
/// let greeting = resolve!(container, String, "greeting");
/// assert_eq!(*greeting, "hello");
/// ```
#[macro_export]
macro_rules! resolve {
  // Arm for resolving a trait object: resolve!(container, trait MyTrait)
  ($container:expr, trait $trait_ident:ident) => {
    $container.make_trait::<dyn $trait_ident>().unwrap_or_else(|err| {
      panic!(
        "Failed to resolve required trait service {}: {}",
        ::std::any::type_name::<dyn $trait_ident>(),
        err
      )
    })
  };

  // Arm for resolving a concrete type: resolve!(container, MyService)
  ($container:expr, $type:ty) => {
    $container.make::<$type>().unwrap_or_else(|err| {
      panic!(
        "Failed to resolve required service {}: {}",
        ::std::any::type_name::<$type>(),
        err
      )
    })
  };

  // Arm for resolving an identifier as a type: resolve!(container, MyService, "name")
  ($container:expr, $type:ty, $identifier:expr) => {
    $container
      .resolve_as::<$type>($identifier, &[])
      .unwrap_or_else(|err| {
        panic!(
          "Failed to resolve required service '{}' as {}: {}",
          $identifier,
          ::std::any::type_name::<$type>(),
          err
        )
      })
  };
}
