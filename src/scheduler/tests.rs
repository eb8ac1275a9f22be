//! End-to-end scheduling scenarios exercising both approaches through the
//! public [`run_scheduler`] entry point, plus targeted [`run_engine`] runs
//! for policy variations.

use std::collections::HashSet;

use proptest::prelude::*;

use super::policy::{EnginePolicy, PrereqVisibility};
use super::{run_engine, run_scheduler};
use crate::catalog::Catalog;
use crate::models::{
    Approach, ClassId, ClassRecord, SchedulingParameters, Season, SemesterSlot, StartTerm,
};

const ALL_SEASONS: [Season; 3] = [Season::Fall, Season::Winter, Season::Spring];

fn class(id: i64, number: &str, credits: u32, seasons: &[Season]) -> ClassRecord {
    ClassRecord {
        id: ClassId::new(id),
        class_name: format!("Class {id}"),
        class_number: number.to_string(),
        credits,
        semesters_offered: seasons.to_vec(),
        prerequisites: Vec::new(),
        corequisites: Vec::new(),
        from_course: None,
        course_id: None,
        course_type: None,
        section_id: None,
        is_elective_section: None,
        credits_needed: None,
    }
}

fn catalog_of(classes: Vec<ClassRecord>) -> Catalog {
    let mut cat = Catalog::new();
    for c in classes {
        cat.insert(c);
    }
    cat
}

fn base_params(approach: Approach) -> SchedulingParameters {
    SchedulingParameters {
        approach,
        start_term: StartTerm {
            season: Season::Fall,
            year: 2025,
        },
        limit_first_year: false,
        fall_winter_credit_cap: 16,
        spring_credit_cap: 10,
        major_class_limit: 3,
        first_year_fall_winter_cap: 16,
        first_year_spring_cap: 10,
        eil_level: None,
    }
}

fn numbers(slot: &SemesterSlot) -> Vec<&str> {
    slot.classes.iter().map(|c| c.class_number.as_str()).collect()
}

#[test]
fn test_credits_based_places_everything_within_caps() {
    let cat = catalog_of(vec![
        class(1, "MATH 110", 4, &ALL_SEASONS),
        class(2, "ENG 101", 3, &ALL_SEASONS),
        class(3, "BIO 100", 3, &ALL_SEASONS),
        class(4, "HIST 120", 3, &ALL_SEASONS),
    ]);
    let slots = run_scheduler(&cat, &base_params(Approach::CreditsBased));

    // 13 credits fit the 16-credit Fall cap in a single semester.
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].season, Season::Fall);
    assert_eq!(slots[0].year, 2025);
    assert_eq!(slots[0].classes.len(), 4);
    assert_eq!(slots[0].total_credits, 13);
}

#[test]
fn test_corequisite_bundle_is_placed_atomically() {
    // The filler consumes most of the first slot; the mutual-coreq pair no
    // longer fits there together and must wait for the second slot as a
    // unit, even though each member alone would fit.
    let mut lecture = class(2, "CHEM 105", 3, &ALL_SEASONS);
    lecture.corequisites = vec![ClassId::new(3)];
    let mut lab = class(3, "CHEM 105L", 3, &ALL_SEASONS);
    lab.corequisites = vec![ClassId::new(2)];
    let cat = catalog_of(vec![class(1, "MATH 112", 12, &ALL_SEASONS), lecture, lab]);

    let slots = run_scheduler(&cat, &base_params(Approach::CreditsBased));
    assert_eq!(slots.len(), 2);
    assert_eq!(numbers(&slots[0]), vec!["MATH 112"]);
    let second: HashSet<&str> = numbers(&slots[1]).into_iter().collect();
    assert_eq!(second, HashSet::from(["CHEM 105", "CHEM 105L"]));
}

#[test]
fn test_coreq_member_follows_anchor_into_unoffered_season() {
    // Season legality is checked for the anchor only; the Spring-only lab
    // follows its Fall-only lecture into the Fall slot.
    let mut lecture = class(1, "CS 101", 3, &[Season::Fall]);
    lecture.corequisites = vec![ClassId::new(2)];
    let lab = class(2, "CS 101L", 1, &[Season::Spring]);
    let cat = catalog_of(vec![lecture, lab]);

    let slots = run_scheduler(&cat, &base_params(Approach::CreditsBased));
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].season, Season::Fall);
    assert_eq!(slots[0].year, 2025);
    let first: HashSet<&str> = numbers(&slots[0]).into_iter().collect();
    assert_eq!(first, HashSet::from(["CS 101", "CS 101L"]));
    assert_eq!(slots[0].total_credits, 4);
}

#[test]
fn test_absurd_credit_values_are_skipped_without_overflow() {
    let cat = catalog_of(vec![
        class(1, "GEN 100", u32::MAX, &ALL_SEASONS),
        class(2, "ENG 101", 3, &ALL_SEASONS),
    ]);
    let slots = run_scheduler(&cat, &base_params(Approach::CreditsBased));

    // The oversized class can never fit a cap and is simply left out.
    let placed: Vec<&str> = slots.iter().flat_map(numbers).collect();
    assert_eq!(placed, vec!["ENG 101"]);
    assert!(slots.iter().all(|s| s.total_credits <= 16));
}

#[test]
fn test_religion_spacing_one_per_semester() {
    let cat = catalog_of(vec![
        class(1, "REL 200", 2, &ALL_SEASONS),
        class(2, "REL 225", 2, &ALL_SEASONS),
    ]);
    let slots = run_scheduler(&cat, &base_params(Approach::CreditsBased));

    assert_eq!(slots.len(), 2);
    for slot in &slots {
        assert_eq!(slot.classes.len(), 1);
    }
}

#[test]
fn test_major_class_density_limit() {
    let cat = catalog_of(vec![
        class(1, "CS 101", 3, &ALL_SEASONS),
        class(2, "CS 142", 3, &ALL_SEASONS),
        class(3, "CS 202", 3, &ALL_SEASONS),
        class(4, "CS 235", 3, &ALL_SEASONS),
        class(5, "CS 301", 3, &ALL_SEASONS),
    ]);
    let slots = run_scheduler(&cat, &base_params(Approach::CreditsBased));

    // 15 credits would fit one semester, but at most three major classes
    // may share a slot.
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].classes.len(), 3);
    assert_eq!(slots[1].classes.len(), 2);
}

#[test]
fn test_unplaceable_class_is_left_out_and_plan_is_bounded() {
    let cat = catalog_of(vec![class(1, "GHOST 999", 3, &[])]);
    let slots = run_scheduler(&cat, &base_params(Approach::CreditsBased));

    // Never offered, never placed: the run exhausts its slot allowance of
    // fifteen initial plus ten extra semesters, all empty.
    assert_eq!(slots.len(), 25);
    assert!(slots.iter().all(|s| s.classes.is_empty()));
    assert!(slots.iter().all(|s| s.total_credits == 0));
}

#[test]
fn test_within_slot_prereqs_allow_same_semester_chains() {
    // REL 101 is priority-flagged and scanned first; its dependent sees it
    // already placed within the same slot scan.
    let mut dependent = class(2, "HIST 201", 3, &ALL_SEASONS);
    dependent.prerequisites = vec![ClassId::new(1)];
    let cat = catalog_of(vec![class(1, "REL 101", 2, &ALL_SEASONS), dependent]);

    let slots = run_scheduler(&cat, &base_params(Approach::CreditsBased));
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].classes.len(), 2);
}

#[test]
fn test_prior_slots_only_defers_dependents() {
    let mut dependent = class(2, "HIST 201", 3, &ALL_SEASONS);
    dependent.prerequisites = vec![ClassId::new(1)];
    let cat = catalog_of(vec![class(1, "REL 101", 2, &ALL_SEASONS), dependent]);

    let params = base_params(Approach::CreditsBased);
    let mut policy = EnginePolicy::credits_based(&params);
    policy.prereq_visibility = PrereqVisibility::PriorSlotsOnly;

    let slots = run_engine(&cat, &params, &policy);
    assert_eq!(slots.len(), 2);
    assert_eq!(numbers(&slots[0]), vec!["REL 101"]);
    assert_eq!(numbers(&slots[1]), vec!["HIST 201"]);
}

#[test]
fn test_language_prepass_fixed_two_term_shape() {
    let cat = catalog_of(vec![
        class(1, "STDEV 100R", 3, &[Season::Fall, Season::Winter]),
        class(2, "EIL 313", 3, &[Season::Fall, Season::Winter]),
        class(3, "EIL 317", 3, &[Season::Fall, Season::Winter]),
        class(4, "EIL 201", 3, &[Season::Fall, Season::Winter]),
        class(5, "EIL 320", 3, &[Season::Fall, Season::Winter]),
        class(6, "MATH 110", 4, &ALL_SEASONS),
    ]);
    let slots = run_scheduler(&cat, &base_params(Approach::CreditsBased));

    assert_eq!(slots.len(), 3);
    // First term: the required sequence plus the flexible class.
    let first: HashSet<&str> = numbers(&slots[0]).into_iter().collect();
    assert_eq!(
        first,
        HashSet::from(["STDEV 100R", "EIL 313", "EIL 317", "EIL 201"])
    );
    assert_eq!(slots[0].total_credits, 12);
    // Second term: the capstone alone.
    assert_eq!(numbers(&slots[1]), vec!["EIL 320"]);
    // The generic scan starts only after both language terms.
    assert_eq!(slots[2].season, Season::Spring);
    assert_eq!(numbers(&slots[2]), vec!["MATH 110"]);
}

#[test]
fn test_language_prepass_defers_flexible_class_when_first_term_is_full() {
    let cat = catalog_of(vec![
        class(1, "STDEV 100R", 3, &[Season::Fall, Season::Winter]),
        class(2, "EIL 313", 3, &[Season::Fall, Season::Winter]),
        class(3, "EIL 317", 3, &[Season::Fall, Season::Winter]),
        class(4, "EIL 201", 3, &[Season::Fall, Season::Winter]),
        class(5, "EIL 320", 3, &[Season::Fall, Season::Winter]),
    ]);
    let mut params = base_params(Approach::CreditsBased);
    params.fall_winter_credit_cap = 9;

    let slots = run_scheduler(&cat, &params);
    assert_eq!(slots.len(), 2);
    // The 9-credit cap holds exactly the required trio; the flexible class
    // joins the capstone in the second term.
    assert_eq!(slots[0].classes.len(), 3);
    assert_eq!(slots[0].total_credits, 9);
    let second: HashSet<&str> = numbers(&slots[1]).into_iter().collect();
    assert_eq!(second, HashSet::from(["EIL 320", "EIL 201"]));
}

#[test]
fn test_semester_based_pads_to_ten_semesters() {
    let cat = catalog_of(vec![
        class(1, "ENG 101", 3, &ALL_SEASONS),
        class(2, "MATH 110", 4, &ALL_SEASONS),
    ]);
    let slots = run_scheduler(&cat, &base_params(Approach::SemesterBased));

    // Everything fits the first semester, but the plan still runs to the
    // ten-semester minimum with empty trailing slots.
    assert_eq!(slots.len(), 10);
    assert_eq!(slots[0].classes.len(), 2);
    assert!(slots[1..].iter().all(|s| s.classes.is_empty()));
}

#[test]
fn test_semester_based_extends_past_minimum_until_stalled_or_done() {
    // Eight Fall-only religion classes: one per Fall, Falls three slots
    // apart, so the plan must stretch well past the ten-slot minimum.
    let classes: Vec<ClassRecord> = (1..=8)
        .map(|i| class(i, &format!("REL {}", 120 + i), 2, &[Season::Fall]))
        .collect();
    let cat = catalog_of(classes);
    let slots = run_scheduler(&cat, &base_params(Approach::SemesterBased));

    assert_eq!(slots.len(), 22);
    for (idx, slot) in slots.iter().enumerate() {
        if slot.season == Season::Fall {
            assert_eq!(slot.classes.len(), 1, "Fall slot {idx} should hold one class");
        } else {
            assert!(slot.classes.is_empty());
        }
    }
    let placed: usize = slots.iter().map(|s| s.classes.len()).sum();
    assert_eq!(placed, 8);
}

#[test]
fn test_semester_based_ignores_major_density_limit() {
    let classes: Vec<ClassRecord> = (1..=5)
        .map(|i| class(i, &format!("CS {}", 100 + i), 3, &ALL_SEASONS))
        .collect();
    let cat = catalog_of(classes);
    let slots = run_scheduler(&cat, &base_params(Approach::SemesterBased));

    // All five fit the 18-credit cap at once; no per-slot major limit here.
    assert_eq!(slots[0].classes.len(), 5);
    assert_eq!(slots[0].total_credits, 15);
}

#[test]
fn test_trailing_religion_class_is_relocated() {
    // The Spring-only religion class strands in a final slot of its own;
    // the repair pass folds it back into the religion-free first semester.
    let cat = catalog_of(vec![
        class(1, "REL 250", 2, &[Season::Spring]),
        class(2, "ENG 101", 3, &[Season::Fall, Season::Winter]),
        class(3, "MATH 110", 3, &[Season::Fall, Season::Winter]),
    ]);
    let slots = run_scheduler(&cat, &base_params(Approach::CreditsBased));

    assert_eq!(slots.len(), 2);
    let first: HashSet<&str> = numbers(&slots[0]).into_iter().collect();
    assert_eq!(first, HashSet::from(["ENG 101", "MATH 110", "REL 250"]));
    assert_eq!(slots[0].total_credits, 8);
    assert!(slots[1].classes.is_empty());
}

#[test]
fn test_first_year_caps_constrain_leading_slots() {
    let cat = catalog_of(vec![
        class(1, "A 100", 6, &ALL_SEASONS),
        class(2, "B 100", 6, &ALL_SEASONS),
        class(3, "C 100", 6, &ALL_SEASONS),
    ]);
    let mut params = base_params(Approach::CreditsBased);
    params.limit_first_year = true;
    params.first_year_fall_winter_cap = 7;
    params.first_year_spring_cap = 7;

    let slots = run_scheduler(&cat, &params);
    // One six-credit class per reduced-cap semester.
    assert_eq!(slots.len(), 3);
    for slot in &slots {
        assert_eq!(slot.classes.len(), 1);
        assert_eq!(slot.total_credits, 6);
    }
}

proptest! {
    /// Two runs over the same catalog must serialize byte-identically, and
    /// every plan must respect uniqueness, per-slot credit caps, and season
    /// offerings. Generated catalogs carry no corequisites, so every placed
    /// class is its own anchor and the season check applies to all of them.
    #[test]
    fn prop_plan_is_deterministic_and_respects_invariants(
        specs in prop::collection::vec((1u32..5, 1u8..8, any::<bool>()), 1..20)
    ) {
        let mut cat = Catalog::new();
        for (i, &(credits, season_mask, has_prereq)) in specs.iter().enumerate() {
            let id = (i + 1) as i64;
            let mut seasons = Vec::new();
            if season_mask & 1 != 0 { seasons.push(Season::Fall); }
            if season_mask & 2 != 0 { seasons.push(Season::Winter); }
            if season_mask & 4 != 0 { seasons.push(Season::Spring); }
            let mut record = class(id, &format!("GEN {}", 100 + id), credits, &seasons);
            if has_prereq && i > 0 {
                record.prerequisites = vec![ClassId::new(i as i64)];
            }
            cat.insert(record);
        }
        let params = base_params(Approach::CreditsBased);

        let first = run_scheduler(&cat, &params);
        let second = run_scheduler(&cat, &params);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        let mut seen: HashSet<ClassId> = HashSet::new();
        for slot in &first {
            let cap = match slot.season {
                Season::Spring => params.spring_credit_cap,
                _ => params.fall_winter_credit_cap,
            };
            prop_assert!(slot.total_credits <= cap);
            let summed: u32 = slot.classes.iter().map(|c| c.credits).sum();
            prop_assert_eq!(summed, slot.total_credits);
            for placed in &slot.classes {
                prop_assert!(seen.insert(placed.id), "class {} placed twice", placed.id);
                let record = cat.get(placed.id).unwrap();
                prop_assert!(record.offered_in(slot.season));
            }
        }
    }
}
