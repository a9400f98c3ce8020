// 🔢 Grid Calculator - The five grids (五格)
//
// Input: ordered stroke counts for surname S[0..m] and given name N[0..n]
//
//   Total  (總格) = sum(S) + sum(N)
//   Heaven (天格) = sum(S) if m > 1, else S[0] + 1
//   Person (人格) = S[m-1] + N[0]
//   Earth  (地格) = N[0] + 1 if n ≤ 1, else sum(N)
//   Outer  (外格) = 2 for a two-glyph name, else Total - Person + 1
//
// An empty given name is replaced by [DEFAULT_STROKE_COUNT] before any of this.

use crate::strokes::DEFAULT_STROKE_COUNT;
use serde::{Deserialize, Serialize};

/// GridSet - The five grid values of one name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSet {
    pub heaven: u32,
    pub person: u32,
    pub earth: u32,
    pub outer: u32,
    pub total: u32,
}

impl GridSet {
    /// Compute all five grids from per-glyph stroke counts
    ///
    /// Returns None when the surname sequence is empty; that case is rejected
    /// upstream and never reaches here from the engine.
    pub fn compute(surname: &[u32], given: &[u32]) -> Option<GridSet> {
        let (&surname_first, &surname_last) = (surname.first()?, surname.last()?);

        let given_missing = given.is_empty();
        let sentinel = [DEFAULT_STROKE_COUNT];
        let given = if given_missing { &sentinel[..] } else { given };
        let given_first = given[0];

        let surname_sum: u32 = surname.iter().sum();
        let given_sum: u32 = given.iter().sum();

        let total = surname_sum + given_sum;

        let heaven = if surname.len() > 1 {
            surname_sum
        } else {
            surname_first + 1
        };

        let person = surname_last + given_first;

        let earth = if given.len() <= 1 {
            given_first + 1
        } else {
            given_sum
        };

        // Two-glyph names only; a missing given name doesn't count as one glyph
        let outer = if surname.len() == 1 && given.len() == 1 && !given_missing {
            2
        } else {
            total - person + 1
        };

        Some(GridSet {
            heaven,
            person,
            earth,
            outer,
            total,
        })
    }

    /// Grids in display order with their labels
    pub fn labeled(&self) -> [(&'static str, u32); 5] {
        [
            ("天格", self.heaven),
            ("人格", self.person),
            ("地格", self.earth),
            ("外格", self.outer),
            ("總格", self.total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_surname_two_given() {
        // 李(7) 大(3) 同(6)
        let grids = GridSet::compute(&[7], &[3, 6]).unwrap();

        assert_eq!(grids.heaven, 8);
        assert_eq!(grids.person, 10);
        assert_eq!(grids.earth, 9);
        assert_eq!(grids.total, 16);
        assert_eq!(grids.outer, 7);
    }

    #[test]
    fn test_compound_surname_single_given() {
        // 歐(15) 陽(17) 修(10)
        let grids = GridSet::compute(&[15, 17], &[10]).unwrap();

        assert_eq!(grids.heaven, 32);
        assert_eq!(grids.person, 27);
        assert_eq!(grids.earth, 11);
        assert_eq!(grids.total, 42);
        assert_eq!(grids.outer, 16);
    }

    #[test]
    fn test_two_glyph_name_outer_is_two() {
        let grids = GridSet::compute(&[4], &[12]).unwrap();

        assert_eq!(grids.outer, 2);
        assert_eq!(grids.heaven, 5);
        assert_eq!(grids.earth, 13);
        assert_eq!(grids.total, 16);
    }

    #[test]
    fn test_four_glyph_name() {
        // compound surname, two-glyph given name
        let grids = GridSet::compute(&[11, 18], &[9, 9]).unwrap();

        assert_eq!(grids.heaven, 29);
        assert_eq!(grids.person, 27);
        assert_eq!(grids.earth, 18);
        assert_eq!(grids.total, 47);
        assert_eq!(grids.outer, 21);
    }

    #[test]
    fn test_earth_sums_all_given_glyphs() {
        let grids = GridSet::compute(&[7], &[3, 6, 5]).unwrap();

        assert_eq!(grids.earth, 14);
        assert_eq!(grids.total, 21);
    }

    #[test]
    fn test_empty_given_uses_sentinel() {
        let grids = GridSet::compute(&[7], &[]).unwrap();

        assert_eq!(grids.person, 17);
        assert_eq!(grids.earth, 11);
        assert_eq!(grids.total, 17);
        assert_eq!(grids.outer, 1);
    }

    #[test]
    fn test_empty_surname_rejected() {
        assert!(GridSet::compute(&[], &[3]).is_none());
    }

    #[test]
    fn test_labeled_order() {
        let grids = GridSet::compute(&[7], &[3, 6]).unwrap();
        let labels: Vec<&str> = grids.labeled().iter().map(|(l, _)| *l).collect();

        assert_eq!(labels, vec!["天格", "人格", "地格", "外格", "總格"]);
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_of_strokes(
            surname in prop::collection::vec(1u32..40, 1..=2),
            given in prop::collection::vec(1u32..40, 1..=4),
        ) {
            let grids = GridSet::compute(&surname, &given).unwrap();
            let expected: u32 = surname.iter().sum::<u32>() + given.iter().sum::<u32>();

            prop_assert_eq!(grids.total, expected);
        }

        #[test]
        fn prop_all_grids_positive(
            surname in prop::collection::vec(1u32..40, 1..=2),
            given in prop::collection::vec(1u32..40, 0..=4),
        ) {
            let grids = GridSet::compute(&surname, &given).unwrap();

            for (_, value) in grids.labeled() {
                prop_assert!(value >= 1);
            }
        }

        #[test]
        fn prop_two_glyph_outer_fixed(s in 1u32..40, g in 1u32..40) {
            prop_assert_eq!(GridSet::compute(&[s], &[g]).unwrap().outer, 2);
        }
    }
}
