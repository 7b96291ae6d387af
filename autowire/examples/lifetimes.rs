use autowire::{Container, Value};
use std::cell::Cell;
use std::rc::Rc;

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

fn main() {
  let container = Container::new();
  let next_id = Rc::new(Cell::new(0_usize));

  // --- Instance Binding ---
  // Stored once; every resolution hands back the same handle.
  container.bind_instance("shared_tracker", Value::new(RequestTracker { id: 100 }));

  // --- Factory Binding ---
  // This factory will be called EVERY time the identifier is resolved.
  let counter = Rc::clone(&next_id);
  container.bind_factory("request_tracker", move |_, _| {
    let id = counter.get();
    counter.set(id + 1);
    println!("Creating RequestTracker #{}...", id);
    Ok(Value::new(RequestTracker { id }))
  });

  println!("--- Resolving the instance ---");
  let s1 = container.resolve_as::<RequestTracker>("shared_tracker", &[]).unwrap();
  let s2 = container.resolve_as::<RequestTracker>("shared_tracker", &[]).unwrap();
  assert_eq!(s1.id, 100);
  assert!(Rc::ptr_eq(&s1, &s2), "Instances should be identical");
  println!("Instance resolutions share one pointer, as expected.\n");

  println!("--- Resolving the factory ---");
  let t1 = container.resolve_as::<RequestTracker>("request_tracker", &[]).unwrap();
  let t2 = container.resolve_as::<RequestTracker>("request_tracker", &[]).unwrap();
  println!("Tracker 1 ID: {}, Tracker 2 ID: {}", t1.id, t2.id);
  assert_eq!((t1.id, t2.id), (0, 1));
  assert!(!Rc::ptr_eq(&t1, &t2), "Factory values should be different");
  println!("Factory resolutions are different pointers, as expected.");
}
