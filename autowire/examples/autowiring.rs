use autowire::{Arguments, Container, Injectable, Parameter, Result, Value};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

// 1. Define the abstraction (the trait)
trait Logger {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

// 3. Define a service that depends on the abstraction and a plain setting
struct ReportService {
  logger: Rc<dyn Logger>,
  title: String,
}

impl Injectable for ReportService {
  fn parameters() -> Vec<Parameter> {
    vec![
      Parameter::of::<dyn Logger>("logger"),
      Parameter::of::<String>("title").with_default(Value::new(String::from("Daily report"))),
    ]
  }

  fn construct(args: &Arguments<'_>) -> Result<Self> {
    Ok(ReportService {
      logger: args.get_trait(0)?,
      title: args.cloned(1)?,
    })
  }
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log(&format!("Starting {}.", self.title));
    self.logger.log(&format!("Finished {}.", self.title));
  }
}

fn main() -> Result<()> {
  // Run with RUST_LOG=autowire=trace to watch the resolution path.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let container = Container::builder()
    .register::<ReportService>()
    .declare_abstract::<dyn Logger>()
    .build();

  // Without a binding the abstraction cannot be built.
  let err = container.make::<ReportService>().err();
  println!("Before binding the logger: {:?}", err.map(|e| e.to_string()));

  // Bind the abstraction to a concrete implementation.
  container.bind_factory(autowire::identifier_of::<dyn Logger>(), |_, _| {
    let logger: Rc<dyn Logger> = Rc::new(ConsoleLogger);
    Ok(Value::from_trait(logger))
  });

  let report = container.make::<ReportService>()?;
  report.generate_report();

  // An explicit parameter for the first position leaves the rest to the container.
  let weekly = container.resolve_as::<ReportService>(
    &autowire::identifier_of::<ReportService>(),
    &[Value::from_trait::<dyn Logger>(Rc::new(ConsoleLogger))],
  );
  println!("One explicit parameter: {}", weekly.is_ok());

  let custom = container.resolve_as::<ReportService>(
    &autowire::identifier_of::<ReportService>(),
    &[
      Value::from_trait::<dyn Logger>(Rc::new(ConsoleLogger)),
      Value::new(String::from("Weekly report")),
    ],
  )?;
  custom.generate_report();
  Ok(())
}
