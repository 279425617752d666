//! Property tests: sums, ceiling, absent input, trailing groups, repeatability.

use proptest::prelude::*;

use offrank_core::rank::score_str;

fn render(records: &[(u32, u32, u32, u32)]) -> String {
    records
        .iter()
        .map(|(c, t, o, l)| format!("{c} {t} {o} {l}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn record() -> impl Strategy<Value = (u32, u32, u32, u32)> {
    (0u32..8, 0u32..8, 0u32..100_000, 0u32..10_000)
}

proptest! {
    #[test]
    fn prop_score_is_sum_without_hint(records in prop::collection::vec(record(), 0..32)) {
        let expected: u64 = records.iter().map(|r| u64::from(r.3)).sum();
        let text = render(&records);
        prop_assert_eq!(score_str(Some(&text), None).unwrap().value(), expected);
        prop_assert_eq!(score_str(Some(&text), Some(0)).unwrap().value(), expected);
    }

    #[test]
    fn prop_positive_hint_caps_or_passes_through(
        records in prop::collection::vec(record(), 0..32),
        hint in 1i64..50_000,
    ) {
        let sum: u64 = records.iter().map(|r| u64::from(r.3)).sum();
        let text = render(&records);
        let got = score_str(Some(&text), Some(hint)).unwrap().value();
        let h = hint as u64;
        if sum > h {
            prop_assert_eq!(got, h - 1);
        } else {
            prop_assert_eq!(got, sum);
        }
    }

    #[test]
    fn prop_absent_input_is_one(hint in proptest::option::of(any::<i64>())) {
        prop_assert_eq!(score_str(None, hint).unwrap().value(), 1);
    }

    #[test]
    fn prop_trailing_partial_group_is_ignored(
        records in prop::collection::vec(record(), 0..16),
        tail in prop::collection::vec(0u32..1000, 1..4),
    ) {
        let mut text = render(&records);
        for value in &tail {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&value.to_string());
        }
        let expected: u64 = records.iter().map(|r| u64::from(r.3)).sum();
        prop_assert_eq!(score_str(Some(&text), None).unwrap().value(), expected);
    }

    #[test]
    fn prop_scoring_is_repeatable(
        text in "[0-9 ]{0,64}",
        hint in proptest::option::of(-5i64..100),
    ) {
        let first = score_str(Some(&text), hint);
        let second = score_str(Some(&text), hint);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_non_digit_token_never_scores(
        records in prop::collection::vec(record(), 0..4),
        junk in "[a-z\\-+.]{1,4}",
    ) {
        let mut text = render(&records);
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&junk);
        prop_assert!(score_str(Some(&text), None).is_err());
    }
}
