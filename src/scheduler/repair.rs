//! Trailing-course repair pass.
//!
//! Credits-based plans occasionally strand a single religion class in a
//! final semester of its own. This pass performs at most one relocation: the
//! lone class moves to the earliest prior slot that has no religion class
//! and enough spare capacity, and the emptied final slot is dropped.

use log::debug;

use super::policy::CapSchedule;
use crate::catalog::graph;
use crate::models::{PlannedClass, SemesterSlot};

fn is_religion(class: &PlannedClass) -> bool {
    graph::is_religion_parts(&class.class_number, class.from_course.as_deref())
}

/// Relocate a lone trailing religion class into an earlier slot, if any
/// earlier slot can take it. Capacity is checked against the regular
/// (non first-year) cap for the target slot's season.
pub fn relocate_trailing_religion(slots: &mut Vec<SemesterSlot>, caps: &CapSchedule) {
    let Some(last) = slots.last() else {
        return;
    };
    if last.classes.len() != 1 || !is_religion(&last.classes[0]) {
        return;
    }

    let trailing = last.classes[0].clone();
    let target = slots[..slots.len() - 1].iter().position(|slot| {
        !slot.classes.iter().any(is_religion)
            && slot.total_credits + trailing.credits <= caps.base_cap(slot.season)
    });

    if let Some(index) = target {
        debug!(
            "Relocating trailing {} into slot {}",
            trailing.class_number, index
        );
        slots[index].total_credits += trailing.credits;
        slots[index].classes.push(trailing);
        slots.pop();
    }
}
