//! Semester timeline generation.
//!
//! Produces the ordered sequence of term slots a scheduling run fills,
//! extensible one slot at a time when classes remain unplaced.

use super::policy::CapSchedule;
use crate::models::{Season, StartTerm};

/// One planning period before any classes are placed into it.
#[derive(Debug, Clone, Copy)]
pub struct TermSlot {
    pub season: Season,
    pub year: i32,
    pub credit_cap: u32,
}

/// The term following (season, year). The calendar year increments only on
/// the Fall → Winter transition.
pub fn next_term(season: Season, year: i32) -> (Season, i32) {
    let next_year = match season {
        Season::Fall => year + 1,
        _ => year,
    };
    (season.next(), next_year)
}

/// Generate the initial batch of term slots from the start term.
pub fn build_timeline(start: StartTerm, caps: &CapSchedule, count: usize) -> Vec<TermSlot> {
    let mut slots = Vec::with_capacity(count);
    let mut season = start.season;
    let mut year = start.year;
    for index in 0..count {
        slots.push(TermSlot {
            season,
            year,
            credit_cap: caps.cap_for(season, index),
        });
        (season, year) = next_term(season, year);
    }
    slots
}

/// Append one more slot after the current last one, using the regular
/// (non first-year) cap for its season.
pub fn extend_timeline(slots: &mut Vec<TermSlot>, caps: &CapSchedule) {
    let (season, year) = match slots.last() {
        Some(last) => next_term(last.season, last.year),
        None => return,
    };
    slots.push(TermSlot {
        season,
        year,
        credit_cap: caps.base_cap(season),
    });
}
