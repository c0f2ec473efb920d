//! Demonstration of a counter shared across independent consumers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tether::{Binding, Store, Update};

fn main() {
    println!("=== Counter Demo ===\n");

    // Create store with initial state
    let store = Store::new(0i32);

    // A raw listener sees every committed write
    println!("1. Subscribing a raw listener");
    let writes = Arc::new(AtomicUsize::new(0));
    let writes_clone = writes.clone();
    let _subscription = store.subscribe(move || {
        writes_clone.fetch_add(1, Ordering::SeqCst);
    });

    // A bound consumer re-renders only when its observed value changes
    println!("2. Attaching an identity binding");
    let binding = Binding::identity(&store, || {
        println!("   [Re-render] counter consumer");
    });
    println!("   Initial observed value: {}", binding.value());

    println!("\n3. Three functional updates (+1 each)");
    for _ in 0..3 {
        store.set_state(Update::apply(|n: i32| n + 1));
        println!("   Observed: {}", binding.value());
    }

    println!("\n4. Committing the current value again");
    let same = store.get_state();
    store.set(same);
    println!(
        "   Writes seen by raw listener: {} (bound consumer skipped the equal commit)",
        writes.load(Ordering::SeqCst)
    );

    println!("\n5. Detaching");
    binding.detach();
    store.set(100);
    println!(
        "   Store is at {}, detached consumer still shows {}",
        store.get_state(),
        binding.value()
    );
}
