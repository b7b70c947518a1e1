//! Whole-catalog properties of the standard enharmonic table.

use enharmonic_core::notation::{accidental_of, decompose, letter_of, octave_suffix_of};
use enharmonic_core::question::{Direction, Step, generate_question};
use enharmonic_core::rng::seeded;
use enharmonic_core::{Catalog, check_answer, format_display};
use pretty_assertions::assert_eq;

fn all_tokens(catalog: &Catalog) -> impl Iterator<Item = (usize, &String)> {
    catalog
        .classes()
        .iter()
        .enumerate()
        .flat_map(|(i, class)| class.tokens.iter().map(move |t| (i, t)))
}

#[test]
fn every_token_resolves_to_its_own_class() {
    let catalog = Catalog::standard();
    for (index, token) in all_tokens(catalog) {
        assert_eq!(catalog.class_index_of(token), Some(index), "token {token}");
        assert!(!format_display(token).is_empty());
    }
}

#[test]
fn decomposition_is_lossless() {
    let catalog = Catalog::standard();
    for (_, token) in all_tokens(catalog) {
        let parts = decompose(token).unwrap_or_else(|| panic!("{token} does not decompose"));
        assert_eq!(&parts.to_token(), token);

        let rebuilt = format!(
            "{}{}{}",
            accidental_of(token).map_or("", |a| a.symbol()),
            letter_of(token).unwrap(),
            octave_suffix_of(token).map(|s| s.as_str()).unwrap_or_default()
        );
        assert_eq!(&rebuilt, token);
    }
}

#[test]
fn every_class_accepts_its_own_spellings() {
    let catalog = Catalog::standard();
    for class in catalog.classes() {
        assert!(check_answer(&class.tokens.join(" "), &class.tokens));
        let reversed: Vec<&str> = class.tokens.iter().rev().map(String::as_str).collect();
        assert!(check_answer(&reversed.join("  "), &class.tokens));
    }
}

#[test]
fn adjacent_classes_are_distinct_answers() {
    let catalog = Catalog::standard();
    for i in 0..catalog.len() - 2 {
        let up_one = catalog.tokens(i + 1);
        assert!(check_answer(&up_one.join(" "), up_one));
        assert!(!check_answer(&catalog.tokens(i).join(" "), up_one));
        assert!(!check_answer(&catalog.tokens(i + 2).join(" "), up_one));
    }
}

#[test]
fn partial_and_extra_answers_are_rejected() {
    let expected = ["#C", "bD"];
    assert!(!check_answer("#C", &expected));
    assert!(!check_answer("#C bD X", &expected));
}

#[test]
fn generated_questions_stay_in_range() {
    let catalog = Catalog::standard();
    let range = catalog.base_range();
    let mut rng = seeded(2024);
    for _ in 0..10_000 {
        let q = generate_question(catalog, &mut rng);
        assert!(range.contains(q.base_index), "base {}", q.base_index);
        assert!(q.semitone.index < catalog.len());
        assert!(q.whole_tone.index < catalog.len());
        assert!(!q.semitone.expected.is_empty());
        assert!(!q.whole_tone.expected.is_empty());
    }
}

#[test]
fn prompt_range_spans_the_upper_five_sections() {
    let catalog = Catalog::standard();
    let range = catalog.base_range();
    assert_eq!((range.start, range.end), (12, 71));
    assert_eq!(catalog.section_label_of(range.start), Some("大字一组"));
    assert_eq!(catalog.section_label_of(range.start - 1), Some("大字二组"));
    assert_eq!(catalog.section_label_of(range.end), Some("小字二组"));
}

#[test]
fn lowest_prompt_boundary_scenario() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.tokens(12), ["C-1", "#B-2", "bbD-1"]);

    let step = Step::from_base(catalog, 12, Direction::Down, 1).unwrap();
    assert_eq!(step.index, 11);
    assert_eq!(step.expected, ["B-2", "bC-1", "XA-2"]);
    assert!(check_answer("B-2 bC-1 XA-2", &step.expected));
    assert!(!check_answer("B-2", &step.expected));
}

#[test]
fn lowest_prompt_never_steps_below_the_range() {
    let catalog = Catalog::standard();
    let mut rng = seeded(1);
    let mut seen_lowest = false;
    for _ in 0..50_000 {
        let q = generate_question(catalog, &mut rng);
        if q.base_index == 12 {
            seen_lowest = true;
            assert_eq!(q.semitone.direction, Direction::Up);
            assert_eq!(q.whole_tone.direction, Direction::Up);
        }
        if q.base_index == 13 {
            assert_eq!(q.whole_tone.direction, Direction::Up);
        }
    }
    assert!(seen_lowest);
}

#[test]
fn seeded_generation_is_reproducible() {
    let catalog = Catalog::standard();
    let mut a = seeded(77);
    let mut b = seeded(77);
    let first: Vec<_> = (0..50).map(|_| generate_question(catalog, &mut a)).collect();
    let second: Vec<_> = (0..50).map(|_| generate_question(catalog, &mut b)).collect();
    assert_eq!(first, second);
}
