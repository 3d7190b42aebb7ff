#![cfg(feature = "vec_storage")]

use proptest::prelude::*;
use sorted_merge::{merge, MergeError, Merged};

fn sorted_inputs() -> impl Strategy<Value = Vec<Vec<i16>>> {
    prop::collection::vec(prop::collection::vec(-50i16..50, 0..20), 1..8).prop_map(|mut inputs| {
        inputs.iter_mut().for_each(|input| input.sort_unstable());
        inputs
    })
}

fn first_disorder(input: &[i16]) -> Option<usize> {
    input.windows(2).position(|w| w[1] < w[0]).map(|pos| pos + 1)
}

proptest! {
    #[test]
    fn merged_output_is_sorted_permutation(inputs in sorted_inputs()) {
        prop_assume!(inputs.iter().any(|input| !input.is_empty()));
        let merged = merge(&inputs)
            .unwrap()
            .map(|item| item.copied())
            .collect::<Result<Vec<_>, _>>();

        let mut expected: Vec<i16> = inputs.concat();
        expected.sort();
        prop_assert_eq!(merged, Ok(expected));
    }

    #[test]
    fn equal_keys_keep_input_order(inputs in sorted_inputs()) {
        prop_assume!(inputs.iter().any(|input| !input.is_empty()));
        let tagged = inputs.iter().enumerate().map(|(idx, input)| {
            input.iter().enumerate().map(move |(pos, &item)| (item, idx, pos))
        });
        let merged = Merged::new(tagged).by_key(|t| t.0).build().unwrap().try_into_vec().unwrap();

        // Sorting by key is stable, so equal keys stay in (input, position) order
        let mut expected: Vec<_> = inputs
            .iter()
            .enumerate()
            .flat_map(|(idx, input)| input.iter().enumerate().map(move |(pos, &item)| (item, idx, pos)))
            .collect();
        expected.sort_by_key(|t| t.0);
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn all_empty_inputs_are_rejected(count in 0usize..8) {
        let inputs = vec![Vec::<i16>::new(); count];
        prop_assert_eq!(merge(inputs).unwrap_err(), MergeError::EmptyInput { inputs: count });
    }

    #[test]
    fn unsorted_input_is_reported(
        mut inputs in sorted_inputs(),
        victim in any::<prop::sample::Index>(),
    ) {
        let victim = victim.index(inputs.len());
        prop_assume!(inputs[victim].len() >= 2);
        inputs[victim].reverse();
        let disorder = first_disorder(&inputs[victim]);
        prop_assume!(disorder.is_some());

        let mut merged = merge(&inputs).unwrap();
        let mut emitted = Vec::new();
        let err = loop {
            match merged.next() {
                Some(Ok(item)) => emitted.push(*item),
                Some(Err(err)) => break err,
                None => panic!("unsorted input {:?} went unnoticed", inputs[victim]),
            }
        };
        prop_assert_eq!(
            err,
            MergeError::UnsortedInput { input: victim, position: disorder.unwrap() }
        );
        prop_assert!(merged.next().is_none());
        // What was emitted before the error is still in order
        prop_assert!(emitted.windows(2).all(|w| w[0] <= w[1]));
    }
}
