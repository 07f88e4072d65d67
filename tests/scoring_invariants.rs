use ltti_core::catalog::{self, QuestionItem};
use ltti_core::scoring::{derive_code, known_codes, resolve_profile, score, AnswerMap};
use ltti_core::types::{Axis, AxisScore, AxisScoreTable, Letter, QuestionId};

fn answers(pairs: &[(u32, i64)]) -> AnswerMap {
    pairs
        .iter()
        .map(|(id, value)| (QuestionId::new(*id), *value))
        .collect()
}

fn item(id: u32) -> &'static QuestionItem {
    catalog::get(QuestionId::new(id)).unwrap()
}

fn table_with(action: (u32, u32), energy: (u32, u32), cognition: (u32, u32), control: (u32, u32)) -> AxisScoreTable {
    let pair = |(first, second): (u32, u32)| AxisScore { first, second };
    AxisScoreTable {
        energy: pair(energy),
        action: pair(action),
        cognition: pair(cognition),
        control: pair(control),
    }
}

#[test]
fn invariant_single_answer_is_symmetric() {
    for id in [1u32, 2, 31, 32, 61, 62, 91, 92] {
        let question = item(id);
        for value in 1..=5i64 {
            let table = score(catalog::all(), &answers(&[(id, value)]));
            assert_eq!(i64::from(table.total(question.target)), value, "q{id} v{value}");
            assert_eq!(i64::from(table.total(question.opposite())), 6 - value, "q{id} v{value}");

            for axis in Axis::ALL.into_iter().filter(|axis| *axis != question.axis) {
                assert_eq!(*table.axis(axis), AxisScore::default(), "q{id} leaked into {axis}");
            }
        }
    }
}

#[test]
fn end_to_end_energy_scenario() {
    assert_eq!(item(1).target, Letter::I);
    assert_eq!(item(2).target, Letter::E);

    let table = score(catalog::all(), &answers(&[(1, 5), (2, 1)]));

    assert_eq!(table.total(Letter::I), 10);
    assert_eq!(table.total(Letter::E), 2);

    let code = derive_code(&table);
    assert_eq!(code.as_str().chars().nth(1), Some('I'));
    assert_eq!(code.as_str(), "SIRD");
}

#[test]
fn invariant_all_neutral_answers_tie_to_sird() {
    let all_threes: AnswerMap = catalog::all().iter().map(|item| (item.id, 3)).collect();
    let table = score(catalog::all(), &all_threes);

    for axis in Axis::ALL {
        let pair = table.axis(axis);
        assert_eq!(pair.first, pair.second, "axis {axis}");
        assert_eq!(pair.first, 90);
    }
    assert_eq!(derive_code(&table).as_str(), "SIRD");
}

#[test]
fn invariant_empty_answers_score_zero_and_still_classify() {
    let table = score(catalog::all(), &AnswerMap::new());
    assert_eq!(table, AxisScoreTable::default());

    let code = derive_code(&table);
    assert_eq!(code.as_str(), "SIRD");
    assert_eq!(code.as_str().len(), 4);
}

#[test]
fn out_of_range_values_are_clamped() {
    let high = score(catalog::all(), &answers(&[(1, 42)]));
    assert_eq!(high.energy, AxisScore { first: 5, second: 1 });

    let low = score(catalog::all(), &answers(&[(1, -7)]));
    assert_eq!(low.energy, AxisScore { first: 1, second: 5 });

    let zero = score(catalog::all(), &answers(&[(1, 0)]));
    assert_eq!(zero.energy, AxisScore { first: 1, second: 5 });
}

#[test]
fn unknown_ids_are_inert() {
    let table = score(catalog::all(), &answers(&[(0, 5), (121, 5), (10_000, 1)]));
    assert_eq!(table, AxisScoreTable::default());
}

#[test]
fn only_listed_items_are_scored() {
    let subset: Vec<QuestionItem> = catalog::all()[..30].to_vec();
    let table = score(&subset, &answers(&[(1, 5), (31, 5)]));

    assert_eq!(table.energy, AxisScore { first: 5, second: 1 });
    assert_eq!(table.action, AxisScore::default());
}

#[test]
fn action_letter_reads_s_or_o() {
    let s = table_with((3, 3), (0, 0), (0, 0), (0, 0));
    assert_eq!(derive_code(&s).as_str(), "SIRD");

    let o = table_with((2, 3), (1, 2), (1, 2), (1, 2));
    assert_eq!(derive_code(&o).as_str(), "OEXC");
}

#[test]
fn code_letters_follow_each_axis() {
    let code = derive_code(&table_with((5, 1), (1, 5), (5, 1), (1, 5)));
    assert_eq!(code.as_str(), "SERC");

    let code = derive_code(&table_with((1, 5), (5, 1), (1, 5), (5, 1)));
    assert_eq!(code.as_str(), "OIXD");
}

#[test]
fn every_derivable_code_has_a_profile() {
    let mut derived = Vec::new();
    for mask in 0..16u32 {
        let pick = |bit: u32| if mask & (1 << bit) == 0 { (1, 0) } else { (0, 1) };
        let code = derive_code(&table_with(pick(0), pick(1), pick(2), pick(3)));
        derived.push(code.as_str().to_string());

        let profile = resolve_profile(code.as_str());
        assert!(!profile.family.is_empty(), "code {code} fell back");
        assert!(profile.title.contains(code.as_str()));
        assert!(!profile.tagline.is_empty());
    }

    derived.sort();
    let mut known: Vec<String> = known_codes().map(str::to_string).collect();
    known.sort();
    assert_eq!(derived, known);
}

#[test]
fn profile_families_follow_first_two_letters() {
    assert_eq!(resolve_profile("SIRD").family, "Freezer");
    assert_eq!(resolve_profile("OIXC").family, "Écureuil");
    assert_eq!(resolve_profile("SEXD").family, "Sniper");
    assert_eq!(resolve_profile("OERC").family, "Kamikaze");
}

#[test]
fn unknown_code_gets_fallback_profile() {
    for raw in ["ZZZZ", "", "SITD", "sird"] {
        let profile = resolve_profile(raw);
        assert_eq!(profile.title, raw);
        assert!(profile.family.is_empty());
        assert!(profile.tagline.is_empty());
    }
}
