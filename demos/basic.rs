use flex_array::FlexArray;

fn main() {
    println!("--- Basic Usage Example ---");
    let mut arr = FlexArray::new();

    // Push elements, watching the capacity double
    for i in 1..=5 {
        arr.push(i * 10);
        println!("Pushed: {}, len: {}, cap: {}", i * 10, arr.len(), arr.capacity());
    }

    // Bracketed space-separated rendering
    println!("Elements: {}", arr);

    // Capacity can only grow, and grows to exactly the requested size
    arr.update_capacity(32).expect("32 is larger than the current capacity");
    println!("After update_capacity(32): cap: {}", arr.capacity());
    if let Err(err) = arr.update_capacity(2) {
        println!("update_capacity(2) rejected: {}", err);
    }

    // Checked and panicking accessors side by side
    println!("first: {}, last: {}", arr.first(), arr.last());
    match arr.get_safe(99) {
        Ok(value) => println!("get_safe(99): {}", value),
        Err(err) => println!("get_safe(99) rejected: {}", err),
    }

    // Drain through the checked pop
    while let Ok(val) = arr.pop_safe() {
        println!("Popped: {}, len: {}", val, arr.len());
    }
}
