//! Session combination generation.
//!
//! Given learned practices in their display order and a time budget, suggests
//! contiguous runs of practices that fit within the budget, fullest first.
//!
//! # Algorithm
//!
//! 1. Every contiguous run `practices[start..=end]` whose total duration fits
//!    the budget becomes a candidate. Extension from a given `start` stops at
//!    the first run that overshoots.
//! 2. Candidates are ranked by total duration, then by practice count, both
//!    descending. The sort is stable, so equal keys keep enumeration order
//!    (`start` ascending, then `end` ascending).
//! 3. If any multi-practice run exists, single-practice runs whose practice
//!    already appears in a multi-practice run are dropped, and the result is
//!    the multi-practice runs followed by the surviving singles.
//!
//! The early exit in step 1 assumes durations are positive. A zero or
//! negative duration later in the list could bring an overshooting run back
//! under budget, and such runs are not reported.

use std::collections::HashSet;

use serde::Serialize;

use crate::practice::Practice;
use crate::types::PracticeId;

/// A suggested session: a contiguous run of the input practices.
///
/// Borrows from the slice passed to [`generate_combinations`], so members
/// keep their original identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Combination<'a> {
    /// Position of the first member in the input slice.
    pub start: usize,

    /// The members, in input order.
    pub practices: &'a [Practice],

    /// Sum of member durations in minutes.
    pub total_duration: i64,
}

impl<'a> Combination<'a> {
    /// Number of practices in the session.
    pub const fn len(&self) -> usize {
        self.practices.len()
    }

    /// Always false for generated combinations.
    pub const fn is_empty(&self) -> bool {
        self.practices.is_empty()
    }

    /// Position one past the last member in the input slice.
    pub const fn end(&self) -> usize {
        self.start + self.practices.len()
    }

    /// IDs of the members, in input order.
    pub fn ids(self) -> impl Iterator<Item = &'a PracticeId> {
        self.practices.iter().map(|p| &p.id)
    }
}

/// Suggests sessions that fit within `budget` minutes.
///
/// `practices` must already be filtered to learned practices and sorted by
/// `order`; the generator never reorders its input. Empty input and budgets
/// below the smallest duration both yield an empty list.
pub fn generate_combinations(practices: &[Practice], budget: i64) -> Vec<Combination<'_>> {
    let mut candidates = Vec::new();

    for start in 0..practices.len() {
        let mut total: i64 = 0;
        for (offset, practice) in practices[start..].iter().enumerate() {
            total = total.saturating_add(practice.duration);
            if total > budget {
                break;
            }
            candidates.push(Combination {
                start,
                practices: &practices[start..=start + offset],
                total_duration: total,
            });
        }
    }

    let candidate_count = candidates.len();

    // Stable: equal keys keep enumeration order.
    candidates.sort_by(|a, b| {
        b.total_duration
            .cmp(&a.total_duration)
            .then_with(|| b.len().cmp(&a.len()))
    });

    let (multi, single): (Vec<_>, Vec<_>) = candidates.into_iter().partition(|c| c.len() > 1);

    let result = if multi.is_empty() {
        single
    } else {
        let covered: HashSet<&PracticeId> = multi.iter().flat_map(|c| c.ids()).collect();
        let mut result = multi;
        result.extend(
            single
                .into_iter()
                .filter(|c| c.ids().all(|id| !covered.contains(id))),
        );
        result
    };

    tracing::debug!(
        practices = practices.len(),
        budget,
        candidates = candidate_count,
        suggested = result.len(),
        "generated session combinations"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn practice(id: &str, duration: i64) -> Practice {
        Practice::new(PracticeId::new(id).unwrap(), id, duration, 0)
    }

    fn shape(combos: &[Combination<'_>]) -> Vec<Vec<String>> {
        combos
            .iter()
            .map(|c| c.ids().map(ToString::to_string).collect())
            .collect()
    }

    fn expect(ids: &[&[&str]]) -> Vec<Vec<String>> {
        ids.iter()
            .map(|combo| combo.iter().map(ToString::to_string).collect())
            .collect()
    }

    /// Checks fit, contiguity, uniqueness, subsumption and ordering.
    fn assert_properties(practices: &[Practice], budget: i64, combos: &[Combination<'_>]) {
        let mut seen = HashSet::new();
        let mut in_multi = HashSet::new();

        for c in combos {
            assert!(!c.is_empty());
            assert_eq!(c.practices, &practices[c.start..c.end()]);
            let sum: i64 = c.practices.iter().map(|p| p.duration).sum();
            assert_eq!(c.total_duration, sum);
            assert!(c.total_duration <= budget);

            let mut ids: Vec<&str> = c.ids().map(PracticeId::as_str).collect();
            ids.sort_unstable();
            assert!(seen.insert(ids), "duplicate combination {c:?}");

            if c.len() > 1 {
                in_multi.extend(c.ids());
            }
        }

        for c in combos.iter().filter(|c| c.len() == 1) {
            assert!(!in_multi.contains(&c.practices[0].id));
        }

        // Multi-practice runs come first; each group is ranked on its own.
        let split = combos.iter().position(|c| c.len() == 1).unwrap_or(combos.len());
        assert!(combos[split..].iter().all(|c| c.len() == 1));
        for group in [&combos[..split], &combos[split..]] {
            for pair in group.windows(2) {
                let key = |c: &Combination<'_>| (c.total_duration, c.len());
                assert!(key(&pair[0]) >= key(&pair[1]), "misordered {pair:?}");
            }
        }
    }

    #[test]
    fn multi_then_uncovered_single() {
        let practices = vec![practice("A", 15), practice("B", 35), practice("C", 50)];

        let combos = generate_combinations(&practices, 60);

        assert_eq!(shape(&combos), expect(&[&["A", "B"], &["C"]]));
        assert_eq!(combos[0].total_duration, 50);
        assert_eq!(combos[1].total_duration, 50);
        assert_properties(&practices, 60, &combos);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(generate_combinations(&[], 60).is_empty());
    }

    #[test]
    fn single_over_budget_yields_nothing() {
        let practices = vec![practice("A", 15)];
        assert!(generate_combinations(&practices, 10).is_empty());
    }

    #[test]
    fn single_exactly_at_budget_is_kept() {
        let practices = vec![practice("A", 15)];
        let combos = generate_combinations(&practices, 15);
        assert_eq!(shape(&combos), expect(&[&["A"]]));
    }

    #[test]
    fn all_singles_covered_by_pair() {
        let practices = vec![practice("A", 10), practice("B", 10)];
        let combos = generate_combinations(&practices, 25);
        assert_eq!(shape(&combos), expect(&[&["A", "B"]]));
        assert_eq!(combos[0].total_duration, 20);
    }

    #[test]
    fn zero_and_negative_budget_yield_nothing() {
        let practices = vec![practice("A", 10), practice("B", 5)];
        assert!(generate_combinations(&practices, 0).is_empty());
        assert!(generate_combinations(&practices, -30).is_empty());
    }

    #[test]
    fn singles_only_when_no_pair_fits() {
        let practices = vec![practice("A", 40), practice("B", 30), practice("C", 45)];
        let combos = generate_combinations(&practices, 50);
        assert_eq!(shape(&combos), expect(&[&["C"], &["A"], &["B"]]));
    }

    #[test]
    fn contiguity_is_by_position() {
        // A and C would fit together but are not adjacent.
        let practices = vec![practice("A", 10), practice("B", 60), practice("C", 10)];
        let combos = generate_combinations(&practices, 30);
        assert_eq!(shape(&combos), expect(&[&["A"], &["C"]]));
    }

    #[test]
    fn ties_keep_enumeration_order() {
        let practices = vec![practice("A", 10), practice("B", 10), practice("C", 10)];
        let combos = generate_combinations(&practices, 20);
        assert_eq!(shape(&combos), expect(&[&["A", "B"], &["B", "C"]]));
    }

    #[test]
    fn longer_run_wins_duration_tie() {
        let practices = vec![practice("A", 20), practice("B", 20), practice("C", 40)];
        let combos = generate_combinations(&practices, 40);
        assert_eq!(shape(&combos), expect(&[&["A", "B"], &["C"]]));
    }

    #[test]
    fn default_catalogue_in_an_hour() {
        let practices = crate::default_practices();
        let combos = generate_combinations(&practices, 60);
        // Isha Kriya + Bhuta Shuddhi, then the two 50-minute practices alone.
        assert_eq!(shape(&combos), expect(&[&["1", "5"], &["2"], &["3"]]));
        assert_properties(&practices, 60, &combos);
    }

    #[test]
    fn default_catalogue_in_three_hours() {
        let practices = crate::default_practices();
        let combos = generate_combinations(&practices, 180);

        assert_eq!(combos[0].total_duration, 175);
        assert_eq!(shape(&combos[..1]), expect(&[&["2", "3", "4"]]));
        assert!(combos.iter().all(|c| c.len() > 1));
        assert_properties(&practices, 180, &combos);
    }

    #[test]
    fn early_exit_skips_runs_rescued_by_negative_duration() {
        let practices = vec![practice("A", 30), practice("B", -20), practice("C", 5)];
        let combos = generate_combinations(&practices, 20);
        // [A, B] = 10 and [A, B, C] = 15 are never reached because [A] = 30
        // already overshoots.
        assert_eq!(shape(&combos), expect(&[&["B", "C"]]));
        assert_eq!(combos[0].total_duration, -15);
    }

    #[test]
    fn zero_duration_practices_extend_runs() {
        let practices = vec![practice("A", 0), practice("B", 10)];
        let combos = generate_combinations(&practices, 10);
        assert_eq!(shape(&combos), expect(&[&["A", "B"]]));
    }

    #[test]
    fn extreme_durations_do_not_overflow() {
        let practices = vec![practice("A", i64::MAX), practice("B", i64::MAX)];
        assert!(generate_combinations(&practices, i64::MAX - 1).is_empty());
        let combos = generate_combinations(&practices, i64::MAX);
        assert_eq!(shape(&combos), expect(&[&["A", "B"]]));
    }

    #[test]
    fn members_borrow_the_input() {
        let practices = vec![practice("A", 5), practice("B", 5)];
        let combos = generate_combinations(&practices, 10);
        assert!(std::ptr::eq(&combos[0].practices[0], &practices[0]));
    }

    #[test]
    fn properties_hold_on_mixed_catalogue() {
        let practices: Vec<Practice> = [7, 3, 12, 5, 5, 20, 1, 9, 14, 2]
            .iter()
            .enumerate()
            .map(|(i, &d)| practice(&format!("p{i}"), d))
            .collect();

        for budget in [0, 1, 5, 10, 17, 25, 40, 78, 200] {
            let combos = generate_combinations(&practices, budget);
            assert_properties(&practices, budget, &combos);
        }
    }
}
