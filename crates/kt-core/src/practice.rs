//! The practice catalogue and the operations that shape it into generator input.
//!
//! Every operation here is pure: it borrows the current catalogue (or learned
//! list) and returns a freshly built one. Callers own persistence.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{PracticeId, PracticeOrigin};

/// A named practice with a fixed duration and a display-order rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practice {
    /// Stable identifier, referenced by learned marks.
    pub id: PracticeId,

    /// Display label.
    pub name: String,

    /// Length of the practice in minutes.
    ///
    /// Expected to be positive, but nothing here enforces it.
    pub duration: i64,

    /// Rank in the user-controlled ordering. Ties are allowed.
    pub order: i64,
}

impl Practice {
    /// Creates a practice from its parts.
    pub fn new(id: PracticeId, name: impl Into<String>, duration: i64, order: i64) -> Self {
        Self {
            id,
            name: name.into(),
            duration,
            order,
        }
    }

    /// Where this practice came from, judged by its ID.
    pub fn origin(&self) -> PracticeOrigin {
        self.id.origin()
    }
}

/// Direction for [`move_practice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the ordering.
    Up,
    /// Towards the end of the ordering.
    Down,
}

/// The catalogue shipped with the application.
pub fn default_practices() -> Vec<Practice> {
    [
        ("1", "Isha Kriya", 15, 1),
        ("5", "Bhuta Shuddhi", 35, 2),
        ("2", "Surya Kriya", 50, 3),
        ("3", "Angamardana", 50, 4),
        ("4", "Yogasanas", 75, 5),
    ]
    .into_iter()
    .map(|(id, name, duration, order)| {
        Practice::new(PracticeId::from_static(id), name, duration, order)
    })
    .collect()
}

/// Returns the catalogue sorted ascending by `order`.
///
/// The sort is stable, so practices sharing an `order` keep their relative
/// position.
pub fn sorted_by_order(practices: &[Practice]) -> Vec<Practice> {
    let mut sorted = practices.to_vec();
    sorted.sort_by_key(|p| p.order);
    sorted
}

/// Selects the learned practices, sorted ascending by `order`.
///
/// This is the input expected by
/// [`generate_combinations`](crate::generate_combinations).
pub fn learned_practices(practices: &[Practice], learned: &[PracticeId]) -> Vec<Practice> {
    let learned: HashSet<&PracticeId> = learned.iter().collect();
    let mut selected: Vec<Practice> = practices
        .iter()
        .filter(|p| learned.contains(&p.id))
        .cloned()
        .collect();
    selected.sort_by_key(|p| p.order);
    selected
}

/// Flips the learned mark for `id`.
///
/// An already learned ID is removed; otherwise it is appended.
pub fn toggle_learned(learned: &[PracticeId], id: &PracticeId) -> Vec<PracticeId> {
    if learned.contains(id) {
        learned.iter().filter(|l| *l != id).cloned().collect()
    } else {
        let mut toggled = learned.to_vec();
        toggled.push(id.clone());
        toggled
    }
}

/// Moves a practice one slot up or down by swapping `order` with its
/// neighbour in sorted order.
///
/// The catalogue keeps its original element order; only the two `order`
/// values change. Unknown IDs and moves past either end return the catalogue
/// unchanged.
pub fn move_practice(
    practices: &[Practice],
    id: &PracticeId,
    direction: Direction,
) -> Vec<Practice> {
    let sorted = sorted_by_order(practices);
    let Some(index) = sorted.iter().position(|p| &p.id == id) else {
        return practices.to_vec();
    };

    let neighbour = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => Some(index + 1).filter(|&i| i < sorted.len()),
    };
    let Some(neighbour) = neighbour.map(|i| &sorted[i]) else {
        return practices.to_vec();
    };

    let current = &sorted[index];
    practices
        .iter()
        .map(|p| {
            let mut p = p.clone();
            if p.id == current.id {
                p.order = neighbour.order;
            } else if p.id == neighbour.id {
                p.order = current.order;
            }
            p
        })
        .collect()
}

/// Returns only the user-added practices (custom, imported, manual).
pub fn user_added(practices: &[Practice]) -> Vec<Practice> {
    practices
        .iter()
        .filter(|p| p.origin().is_user_added())
        .cloned()
        .collect()
}

/// Drops every user-added practice, leaving the built-in catalogue.
pub fn remove_user_added(practices: &[Practice]) -> Vec<Practice> {
    practices
        .iter()
        .filter(|p| !p.origin().is_user_added())
        .cloned()
        .collect()
}
