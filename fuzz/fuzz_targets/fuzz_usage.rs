#![no_main]

use std::hint::black_box;

use libfuzzer_sys::fuzz_target;
use sorted_merge::{Merged, Source};

fn consume<T>(item: T) {
    drop(black_box(item))
}

fuzz_target!(|data: Vec<Vec<i8>>| {
    if let Ok(merged) = Merged::new(data.iter().map(|it| it.iter().copied())).build() {
        merged.for_each(consume);
    }
    if let Ok(merged) = Merged::new(&data).descending().build() {
        merged.pulls().for_each(consume);
    }
    // Sorted inputs run to the end of the merge
    let sorted = data
        .iter()
        .map(|it| {
            let mut it = it.clone();
            it.sort_unstable();
            it
        })
        .collect::<Vec<_>>();
    if let Ok(mut merged) = Merged::new(sorted).reverse_tie_breaking().build() {
        while merged.next_if(|item| *item < 0).is_some() {}
        consume(merged.try_into_vec());
    }
});
