use flex_array::FlexArray;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Tracked(usize, Arc<AtomicUsize>);

impl Drop for Tracked {
    fn drop(&mut self) {
        println!("Dropping element {}", self.0);
        self.1.fetch_add(1, Ordering::SeqCst);
    }
}

fn main() {
    println!("--- Drop Tracking Example ---");
    let drop_count = Arc::new(AtomicUsize::new(0));

    {
        let mut arr = FlexArray::new();
        for i in 0..3 {
            arr.push(Tracked(i, drop_count.clone()));
        }
        println!("Array created with 3 elements.");

        // Overwriting a slot drops the element it replaces
        arr.set(0, Tracked(100, drop_count.clone()));
        println!("Overwrote index 0, drops so far: {}", drop_count.load(Ordering::SeqCst));

        // pop_discard drops the removed element in place
        arr.pop_discard();
        println!("Discarded the last element, drops so far: {}", drop_count.load(Ordering::SeqCst));

        // Scope ends here, arr is dropped
    }

    println!("Total elements dropped: {}", drop_count.load(Ordering::SeqCst));
    assert_eq!(drop_count.load(Ordering::SeqCst), 4);
}
