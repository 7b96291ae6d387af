use autowire::{Container, Value};

trait MessageSender {
  fn send(&self, to: &str, message: &str) -> String;
}

struct EmailSender;
impl MessageSender for EmailSender {
  fn send(&self, to: &str, message: &str) -> String {
    format!("Sending email to {}: '{}'", to, message)
  }
}

fn main() {
  let container = Container::new();

  // --- Registration ---
  container.bind_factory("mailer.smtp", |_, _| {
    let sender: std::rc::Rc<dyn MessageSender> = std::rc::Rc::new(EmailSender);
    Ok(Value::from_trait(sender))
  });

  // Build a chain of aliases; each is stored pointing straight at the root.
  container.alias("mailer.smtp", "mailer");
  container.alias("mailer", "notifier");
  container.alias("notifier", "default_notifier");
  println!("default_notifier -> {}", container.root_of("default_notifier"));

  // --- Resolution ---
  let sender = container
    .resolve("default_notifier", &[])
    .unwrap()
    .downcast_trait::<dyn MessageSender>()
    .unwrap();

  let result = sender.send("test@example.com", "Hello from autowire!");
  println!("{}", result);
  assert!(result.contains("email"));
}
