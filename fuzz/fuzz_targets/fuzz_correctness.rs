#![no_main]

use libfuzzer_sys::fuzz_target;
use sorted_merge::comparators::{tie_breaker, ByOrd};

fuzz_target!(|data: Vec<Vec<i8>>| {
    sorted_merge::tests::order::assert_correct_order(&data, ByOrd, tie_breaker::InsertionOrder);
    sorted_merge::tests::order::assert_correct_order(
        &data,
        ByOrd,
        tie_breaker::ReverseInsertionOrder,
    );
});
