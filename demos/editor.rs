//! Demonstration of selector isolation: a consumer bound to one slice of a
//! composite state ignores writes to the other slices.

use tether::{create_binding, Store};

#[derive(Clone, Debug, PartialEq)]
struct EditorState {
    text: String,
    count: i32,
}

fn main() {
    println!("=== Editor Demo: selector isolation ===\n");

    let store = Store::new(EditorState {
        text: "initial".to_string(),
        count: 0,
    });

    println!("1. Binding a consumer to the text slice only");
    let text = create_binding(
        &store,
        |state: &EditorState| state.text.clone(),
        || println!("   [Re-render] text consumer"),
    );
    println!("   Observed text: {:?}", text.value());

    println!("\n2. Five writes that touch only the counter");
    for _ in 0..5 {
        store.update(|mut state| {
            state.count += 1;
            state
        });
    }
    println!("   count is now {}, no text re-renders", store.get_state().count);

    println!("\n3. One write that touches the text");
    store.update(|mut state| {
        state.text = "changed".to_string();
        state
    });
    println!("   Observed text: {:?}", text.value());
}
