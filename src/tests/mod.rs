
use std::collections::HashSet;

use crate::numeral::{to_roman, MAX_VALUE, MIN_VALUE};

/// Every canonical numeral, uppercase.
pub(super) fn canonical_set() -> HashSet<String> {
    (MIN_VALUE..=MAX_VALUE)
        .map(|v| to_roman(v).unwrap())
        .collect()
}

#[test]
fn canonical_set_is_one_to_one() {
    assert_eq!(canonical_set().len(), (MAX_VALUE - MIN_VALUE + 1) as usize);
}
