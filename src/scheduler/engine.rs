//! The greedy scheduling engine.
//!
//! A single constructive pass over semester slots: candidates are scanned in
//! policy order, each eligible class is placed together with its whole
//! corequisite closure, and every placement is final — there is no
//! backtracking. Classes whose season, prerequisite, or capacity constraints
//! can never be met are simply left out of the plan.

use log::{debug, info};
use std::collections::HashSet;

use super::policy::{EnginePolicy, PrereqVisibility, Termination};
use super::timeline::{build_timeline, extend_timeline, TermSlot};
use crate::catalog::{graph, Catalog};
use crate::models::{ClassId, ClassRecord, SchedulingParameters, SemesterSlot};

/// Run one scheduling pass and return the ordered slot results.
///
/// The catalog is read-only; all mutable state (scheduled-id set, slot
/// buckets) is private to this call, so concurrent runs may share a catalog.
pub fn run_engine(
    catalog: &Catalog,
    params: &SchedulingParameters,
    policy: &EnginePolicy,
) -> Vec<SemesterSlot> {
    let mut slots = build_timeline(params.start_term, &policy.caps, policy.initial_slots);
    let mut scheduled: HashSet<ClassId> = HashSet::new();
    let mut results: Vec<SemesterSlot> = Vec::new();

    let mut slot_idx = if policy.language_prepass {
        language_prepass(catalog, &slots, &mut scheduled, &mut results)
    } else {
        0
    };

    // Language classes are handled exclusively by the pre-pass when it is
    // enabled; a deferred language class never re-enters the generic scan.
    let mut order: Vec<ClassId> = catalog
        .iter()
        .filter(|c| !(policy.language_prepass && graph::is_language(c)))
        .map(|c| c.id)
        .collect();
    if policy.priority_ordering {
        sort_by_priority(catalog, &mut order);
    }

    let mut stall = 0usize;
    loop {
        let remaining = order.iter().any(|id| !scheduled.contains(id));
        match policy.termination {
            Termination::ExtraSlots(extra) => {
                if !remaining || slot_idx >= policy.initial_slots + extra {
                    break;
                }
            }
            Termination::MinSlotsWithStall {
                min_slots,
                stall_rounds,
            } => {
                if results.len() >= min_slots && (!remaining || stall >= stall_rounds) {
                    break;
                }
            }
        }

        while slot_idx >= slots.len() {
            extend_timeline(&mut slots, &policy.caps);
        }
        let slot = slots[slot_idx];

        let result = fill_slot(catalog, &order, &mut scheduled, &slot, policy);
        let picked_any = !result.classes.is_empty();
        debug!(
            "{} {}: placed {} classes ({} credits)",
            slot.season,
            slot.year,
            result.classes.len(),
            result.total_credits
        );
        results.push(result);

        if picked_any {
            stall = 0;
        } else {
            stall += 1;
        }
        slot_idx += 1;
    }

    info!(
        "{}: scheduled {} of {} classes over {} semesters",
        policy.approach,
        scheduled.len(),
        catalog.len(),
        results.len()
    );
    results
}

/// Fixed two-term language-sequence placement.
///
/// The required trio goes into the first slot when offered and fitting; the
/// flexible class follows if room remains, otherwise it is deferred to the
/// second slot alongside the capstone class. Returns the number of leading
/// slots consumed.
fn language_prepass(
    catalog: &Catalog,
    slots: &[TermSlot],
    scheduled: &mut HashSet<ClassId>,
    results: &mut Vec<SemesterSlot>,
) -> usize {
    let mut required: Vec<&ClassRecord> = Vec::new();
    let mut flexible: Vec<&ClassRecord> = Vec::new();
    let mut capstone: Vec<&ClassRecord> = Vec::new();
    for class in catalog.iter().filter(|c| graph::is_language(c)) {
        match class.class_number.as_str() {
            "EIL 320" => capstone.push(class),
            "EIL 201" => flexible.push(class),
            _ => required.push(class),
        }
    }
    if required.is_empty() && flexible.is_empty() && capstone.is_empty() {
        return 0;
    }

    let mut consumed = 0;

    if let Some(slot) = slots.first() {
        let candidates: Vec<&ClassRecord> =
            required.iter().chain(flexible.iter()).copied().collect();
        let (taken, credits) = take_offered(&candidates, slot, scheduled);
        if !taken.is_empty() {
            results.push(build_slot(slot, &taken, credits));
            consumed = 1;
        }
    }

    if slots.len() > 1 {
        let slot = &slots[1];
        let candidates: Vec<&ClassRecord> = capstone
            .iter()
            .chain(flexible.iter())
            .copied()
            .filter(|c| !scheduled.contains(&c.id))
            .collect();
        let (taken, credits) = take_offered(&candidates, slot, scheduled);
        if !taken.is_empty() {
            results.push(build_slot(slot, &taken, credits));
            consumed = 2;
        }
    }

    consumed
}

/// Place candidates into a slot in order, checking only season offering and
/// remaining capacity (the language sequence has no in-catalog
/// prerequisites on its own members).
fn take_offered<'a>(
    candidates: &[&'a ClassRecord],
    slot: &TermSlot,
    scheduled: &mut HashSet<ClassId>,
) -> (Vec<&'a ClassRecord>, u32) {
    let mut taken = Vec::new();
    let mut current = 0u32;
    for &class in candidates {
        if class.offered_in(slot.season) && current.saturating_add(class.credits) <= slot.credit_cap
        {
            taken.push(class);
            current += class.credits;
            scheduled.insert(class.id);
        }
    }
    (taken, current)
}

/// Priority tuple, compared descending: constrained classes come first
/// (religion/language flag, deep prerequisite chains, many dependents, few
/// offering windows), with ascending id as the final deterministic
/// tie-break.
fn priority_key(catalog: &Catalog, class: &ClassRecord) -> (u8, usize, usize, i64, i64) {
    let flagged = graph::is_religion(class) || graph::is_language(class);
    (
        u8::from(flagged),
        class.prerequisites.len(),
        catalog.dependent_count(class.id),
        -(class.semesters_offered.len() as i64),
        -class.id.value(),
    )
}

fn sort_by_priority(catalog: &Catalog, order: &mut Vec<ClassId>) {
    let mut keyed: Vec<((u8, usize, usize, i64, i64), ClassId)> = order
        .iter()
        .filter_map(|&id| catalog.get(id).map(|c| (priority_key(catalog, c), id)))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    *order = keyed.into_iter().map(|(_, id)| id).collect();
}

/// One greedy scan over the candidate order for a single slot.
///
/// Each placement is the unscheduled remainder of the anchor's corequisite
/// closure, placed atomically. Only the anchor's season offering is checked;
/// closure members follow it into the slot regardless of their own
/// offerings. With [`PrereqVisibility::WithinSlot`], a class placed earlier
/// in this same scan already satisfies prerequisites.
fn fill_slot(
    catalog: &Catalog,
    order: &[ClassId],
    scheduled: &mut HashSet<ClassId>,
    slot: &TermSlot,
    policy: &EnginePolicy,
) -> SemesterSlot {
    let snapshot: Option<HashSet<ClassId>> = match policy.prereq_visibility {
        PrereqVisibility::WithinSlot => None,
        PrereqVisibility::PriorSlotsOnly => Some(scheduled.clone()),
    };

    let mut placed: Vec<&ClassRecord> = Vec::new();
    let mut current = 0u32;
    let mut has_religion = false;
    let mut major_count = 0u32;

    for &id in order {
        if scheduled.contains(&id) {
            continue;
        }
        let Some(class) = catalog.get(id) else {
            continue;
        };
        if !class.offered_in(slot.season) {
            continue;
        }

        let visible = snapshot.as_ref().unwrap_or(scheduled);
        if !class.prerequisites.iter().all(|p| visible.contains(p)) {
            continue;
        }

        let bundle: Vec<&ClassRecord> = catalog
            .corequisite_closure(id)
            .into_iter()
            .filter(|member| !scheduled.contains(member))
            .filter_map(|member| catalog.get(member))
            .collect();

        // Saturating arithmetic: payload credit values are unbounded, and a
        // bundle that saturates can never fit a cap anyway.
        let bundle_credits = bundle
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.credits));
        if current.saturating_add(bundle_credits) > slot.credit_cap {
            continue;
        }

        // Religion spacing: at most one religion-flagged class per slot,
        // applied at the bundle level.
        let bundle_religion = bundle.iter().any(|c| graph::is_religion(c));
        if bundle_religion && has_religion {
            continue;
        }

        let bundle_majors = bundle.iter().filter(|c| graph::is_major(c)).count() as u32;
        if let Some(limit) = policy.major_class_limit {
            if major_count + bundle_majors > limit {
                continue;
            }
        }

        for member in &bundle {
            scheduled.insert(member.id);
        }
        current += bundle_credits;
        has_religion = has_religion || bundle_religion;
        major_count += bundle_majors;
        placed.extend(bundle);

        if current >= slot.credit_cap {
            break;
        }
    }

    build_slot(slot, &placed, current)
}

fn build_slot(slot: &TermSlot, classes: &[&ClassRecord], total_credits: u32) -> SemesterSlot {
    SemesterSlot {
        season: slot.season,
        year: slot.year,
        classes: classes.iter().map(|c| (*c).into()).collect(),
        total_credits,
    }
}
