#![allow(dead_code)]

use std::cmp::Ordering;

use sorted_merge::{MergeError, Merged};

/// Wrapper for an item and its input index
/// Has the same ordering as the item
#[derive(Debug, Clone, Copy)]
pub struct LabeledItem<T> {
    pub item: T,
    pub input: usize,
}

impl<T: Ord> Ord for LabeledItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.item.cmp(&other.item)
    }
}

impl<T: PartialOrd> PartialOrd for LabeledItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.item.partial_cmp(&other.item)
    }
}

impl<T: PartialEq> PartialEq for LabeledItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl<T> Eq for LabeledItem<T> where T: Eq {}

/// Which input must win among equal heads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ties {
    EarlierFirst,
    LaterFirst,
}

struct MergeChecker<'a, T> {
    items: Vec<&'a [T]>,
    orig: &'a [Vec<T>],
}

impl<'a, T> MergeChecker<'a, T>
where
    T: core::fmt::Debug + Ord,
{
    fn new(orig: &'a [Vec<T>]) -> Self {
        Self {
            orig,
            items: Vec::new(),
        }
    }

    /// Replays `merge` against the inputs, returning the error it ended with
    fn check_merge(
        &mut self, merge: impl IntoIterator<Item = Result<LabeledItem<T>, MergeError>>, ties: Ties,
    ) -> Option<MergeError> {
        // reset:
        self.items.clear();
        self.items.extend(self.orig.iter().map(Vec::as_slice));
        let mut merge = merge.into_iter();
        while let Some(choice) = merge.next() {
            match choice {
                Ok(choice) => self.check_choice(&choice, ties),
                Err(err) => {
                    check_error(self.orig, &err);
                    if let MergeError::UnsortedInput { input, position } = err {
                        // The offending element's predecessor was read but not emitted
                        assert_eq!(self.items[input].len(), self.orig[input].len() - position + 1);
                    }
                    assert!(merge.next().is_none(), "merge continued after {err}");
                    return Some(err);
                }
            }
        }

        assert!(
            self.items.iter().all(|it| it.is_empty()),
            "Some items are not consumed"
        );
        None
    }

    fn check_choice(&mut self, choice: &LabeledItem<T>, ties: Ties) {
        for (input, item) in self
            .items
            .iter()
            .enumerate()
            .filter_map(|(input, items)| items.first().map(|item| (input, item)))
        {
            match item.cmp(&choice.item) {
                Ordering::Less => {
                    panic!("chosen item {choice:?} is greater than item {item:?} from input {input}")
                }
                Ordering::Equal => match ties {
                    Ties::EarlierFirst => assert!(
                        input >= choice.input,
                        "item from earlier input {input} should've been chosen instead of {choice:?}"
                    ),
                    Ties::LaterFirst => assert!(
                        input <= choice.input,
                        "item from later input {input} should've been chosen instead of {choice:?}"
                    ),
                },
                Ordering::Greater => {}
            }
        }
        let Some((item, rest)) = self.items[choice.input].split_first() else {
            panic!("item was consumed from empty input {}", choice.input);
        };

        assert_eq!(item, &choice.item);
        self.items[choice.input] = rest;
    }
}

fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

fn check_error<T: Ord + core::fmt::Debug>(orig: &[Vec<T>], err: &MergeError) {
    let MergeError::UnsortedInput { input, position } = *err else {
        panic!("unexpected error {err:?}");
    };
    let items = &orig[input];
    assert!(
        items[position] < items[position - 1],
        "input {input} is sorted up to {position}: {items:?}"
    );
    assert!(
        is_sorted(&items[..position]),
        "disorder in input {input} before {position} went unnoticed: {items:?}"
    );
}

/// Runs every merge configuration over `input` and checks the outcome
pub fn test_all_merges<T>(input: &[Vec<T>])
where
    T: Ord + core::fmt::Debug + Copy,
{
    let mkiter = || {
        input.iter().enumerate().map(|(input, items)| {
            items
                .iter()
                .copied()
                .map(move |item| LabeledItem { item, input })
        })
    };

    if input.iter().all(Vec::is_empty) {
        let expected = MergeError::EmptyInput {
            inputs: input.len(),
        };
        assert_eq!(Merged::new(mkiter()).build().unwrap_err(), expected);
        assert_eq!(
            Merged::new(mkiter())
                .reverse_tie_breaking()
                .build()
                .unwrap_err(),
            expected
        );
        return;
    }

    let mut checker = MergeChecker::new(input);
    let errors = [
        checker.check_merge(Merged::new(mkiter()).build().unwrap(), Ties::EarlierFirst),
        checker.check_merge(
            Merged::new(mkiter()).reverse_tie_breaking().build().unwrap(),
            Ties::LaterFirst,
        ),
    ];
    let all_sorted = input.iter().all(|items| is_sorted(items));
    for err in errors {
        assert_eq!(err.is_none(), all_sorted, "{input:?} ended with {err:?}");
    }

    let collected = Merged::new(mkiter()).build().unwrap().try_into_vec();
    match collected {
        Ok(items) => {
            assert!(all_sorted);
            checker.check_merge(items.into_iter().map(Ok), Ties::EarlierFirst);
        }
        Err(err) => {
            assert!(!all_sorted);
            check_error(input, &err);
        }
    }
}
