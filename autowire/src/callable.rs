use crate::error::Result;
use crate::introspect::{Parameter, Signature};
use crate::value::{Arguments, Value};
use std::fmt;
use std::rc::Rc;

type Body = Rc<dyn Fn(&Arguments<'_>) -> Result<Value>>;

/// A function with an explicitly declared signature, invocable through
/// [`Container::invoke`](crate::Container::invoke).
#[derive(Clone)]
pub struct Callable {
  signature: Signature,
  body: Body,
}

impl Callable {
  pub fn new(
    name: impl Into<String>,
    parameters: Vec<Parameter>,
    body: impl Fn(&Arguments<'_>) -> Result<Value> + 'static,
  ) -> Self {
    Self {
      signature: Signature::new(name, parameters),
      body: Rc::new(body),
    }
  }

  /// A callable that declares no parameters.
  pub fn thunk(name: impl Into<String>, body: impl Fn() -> Value + 'static) -> Self {
    Self::new(name, Vec::new(), move |_| Ok(body()))
  }

  pub fn name(&self) -> &str {
    self.signature.owner()
  }

  pub fn signature(&self) -> &Signature {
    &self.signature
  }

  pub(crate) fn call(&self, args: &Arguments<'_>) -> Result<Value> {
    (self.body)(args)
  }
}

impl fmt::Debug for Callable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Callable")
      .field("signature", &self.signature)
      .finish_non_exhaustive()
  }
}
