//! Property-based tests for the field grammars, pay arithmetic, and the
//! ledger's uniqueness guarantee.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;

use payroll_ledger::config::{IdentifierPolicy, NameSpacingPolicy};
use payroll_ledger::input::{parse_amount, parse_count, parse_identifier, parse_name};
use payroll_ledger::ledger::PayrollLedger;
use payroll_ledger::models::{Employee, PayBasis};

fn salaried(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: "Ann".to_string(),
        pay: PayBasis::FullTime {
            monthly_salary: Decimal::new(5000, 0),
        },
    }
}

proptest! {
    // -------------------------------------------------------------------------
    // Identifier grammar
    // -------------------------------------------------------------------------

    #[test]
    fn accepted_identifiers_roundtrip(raw in "[A-Za-z0-9]{1,12}") {
        let id = parse_identifier(&raw, IdentifierPolicy::Alphanumeric).unwrap();
        prop_assert_eq!(id, raw);
    }

    #[test]
    fn punctuation_is_rejected_under_both_policies(
        prefix in "[A-Za-z0-9]{0,5}",
        bad in prop::sample::select(vec!['-', '_', '#', '$', '!', '@', '.', ',', ' ']),
        suffix in "[A-Za-z0-9]{0,5}",
    ) {
        let raw = format!("{prefix}{bad}{suffix}");
        prop_assert!(parse_identifier(&raw, IdentifierPolicy::Alphanumeric).is_err());
        prop_assert!(parse_identifier(&raw, IdentifierPolicy::Digits).is_err());
    }

    #[test]
    fn digit_identifiers_pass_both_policies(raw in "[0-9]{1,9}") {
        prop_assert!(parse_identifier(&raw, IdentifierPolicy::Digits).is_ok());
        prop_assert!(parse_identifier(&raw, IdentifierPolicy::Alphanumeric).is_ok());
    }

    #[test]
    fn letter_bearing_identifiers_fail_the_digits_policy(
        prefix in "[0-9]{0,4}",
        letter in "[A-Za-z]",
        suffix in "[0-9]{0,4}",
    ) {
        let raw = format!("{prefix}{letter}{suffix}");
        prop_assert!(parse_identifier(&raw, IdentifierPolicy::Digits).is_err());
    }

    #[test]
    fn surrounding_whitespace_never_changes_an_identifier(core in "[A-Za-z0-9]{1,8}") {
        let padded = format!("  {core} \n");
        prop_assert_eq!(
            parse_identifier(&padded, IdentifierPolicy::Alphanumeric),
            parse_identifier(&core, IdentifierPolicy::Alphanumeric)
        );
    }

    // -------------------------------------------------------------------------
    // Name grammar
    // -------------------------------------------------------------------------

    #[test]
    fn single_spaced_names_pass_both_policies(
        words in prop::collection::vec("[A-Za-z]{1,8}", 1..4),
    ) {
        let name = words.join(" ");
        prop_assert_eq!(
            parse_name(&name, NameSpacingPolicy::SingleSpaces).unwrap(),
            name.clone()
        );
        prop_assert!(parse_name(&name, NameSpacingPolicy::AnySpacing).is_ok());
    }

    #[test]
    fn consecutive_spaces_split_the_policies(a in "[A-Za-z]{1,6}", b in "[A-Za-z]{1,6}") {
        let raw = format!("{a}  {b}");
        prop_assert!(parse_name(&raw, NameSpacingPolicy::SingleSpaces).is_err());
        prop_assert_eq!(
            parse_name(&raw, NameSpacingPolicy::AnySpacing).unwrap(),
            raw.clone()
        );
    }

    #[test]
    fn names_with_digits_fail_both_policies(
        prefix in "[A-Za-z]{1,6}",
        digit in "[0-9]",
    ) {
        let raw = format!("{prefix}{digit}");
        prop_assert!(parse_name(&raw, NameSpacingPolicy::SingleSpaces).is_err());
        prop_assert!(parse_name(&raw, NameSpacingPolicy::AnySpacing).is_err());
    }

    // -------------------------------------------------------------------------
    // Count grammar
    // -------------------------------------------------------------------------

    #[test]
    fn counts_roundtrip_through_their_decimal_form(value in any::<u32>()) {
        prop_assert_eq!(parse_count(&value.to_string()), Ok(value));
    }

    #[test]
    fn counts_beyond_the_type_are_range_errors(value in 4_294_967_296u64..) {
        use payroll_ledger::error::InputError;
        prop_assert_eq!(parse_count(&value.to_string()), Err(InputError::CountOutOfRange));
    }

    // -------------------------------------------------------------------------
    // Amount grammar
    // -------------------------------------------------------------------------

    #[test]
    fn grammar_amounts_agree_with_decimal_parsing(raw in "[0-9]{1,12}(\\.[0-9]{1,6})?") {
        let value = parse_amount(&raw).unwrap();
        prop_assert_eq!(value, Decimal::from_str(&raw).unwrap());
        prop_assert!(value >= Decimal::ZERO);
    }

    #[test]
    fn two_point_amounts_are_rejected(
        a in "[0-9]{1,4}",
        b in "[0-9]{0,4}",
        c in "[0-9]{0,4}",
    ) {
        let raw = format!("{a}.{b}.{c}");
        prop_assert!(parse_amount(&raw).is_err());
    }

    #[test]
    fn leading_point_equals_explicit_zero(frac in "[0-9]{1,6}") {
        prop_assert_eq!(
            parse_amount(&format!(".{frac}")),
            parse_amount(&format!("0.{frac}"))
        );
    }

    #[test]
    fn trailing_point_equals_the_whole_number(whole in "[0-9]{1,9}") {
        prop_assert_eq!(
            parse_amount(&format!("{whole}.")),
            parse_amount(&whole)
        );
    }

    // -------------------------------------------------------------------------
    // Pay arithmetic
    // -------------------------------------------------------------------------

    #[test]
    fn full_time_total_is_the_salary_itself(cents in 0i64..=1_000_000_000) {
        let monthly_salary = Decimal::new(cents, 2);
        let basis = PayBasis::FullTime { monthly_salary };
        prop_assert_eq!(basis.total_pay(), Some(monthly_salary));
    }

    #[test]
    fn part_time_total_is_rate_times_hours(
        cents in 0i64..=10_000_000,
        hours in 0u32..=100_000,
    ) {
        let hourly_rate = Decimal::new(cents, 2);
        let basis = PayBasis::PartTime {
            hourly_rate,
            hours_worked: hours,
        };
        prop_assert_eq!(basis.total_pay(), Some(hourly_rate * Decimal::from(hours)));
    }

    #[test]
    fn contract_total_is_rate_times_projects(
        cents in 0i64..=100_000_000,
        projects in 0u32..=10_000,
    ) {
        let payment_per_project = Decimal::new(cents, 2);
        let basis = PayBasis::Contract {
            payment_per_project,
            projects_completed: projects,
        };
        prop_assert_eq!(
            basis.total_pay(),
            Some(payment_per_project * Decimal::from(projects))
        );
    }

    #[test]
    fn products_beyond_decimal_range_have_no_total(hours in 2u32..) {
        let basis = PayBasis::PartTime {
            hourly_rate: Decimal::MAX,
            hours_worked: hours,
        };
        prop_assert_eq!(basis.total_pay(), None);
    }

    // -------------------------------------------------------------------------
    // Ledger uniqueness
    // -------------------------------------------------------------------------

    #[test]
    fn ledger_accepts_exactly_the_first_occurrence_of_each_id(
        ids in prop::collection::vec("[A-Za-z0-9]{1,6}", 1..20),
    ) {
        let mut ledger = PayrollLedger::new();
        let mut seen = HashSet::new();
        for id in &ids {
            let accepted = ledger.add(salaried(id)).is_ok();
            prop_assert_eq!(accepted, seen.insert(id.clone()));
        }
        prop_assert_eq!(ledger.len(), seen.len());
    }

    #[test]
    fn report_renders_one_block_per_record(count in 1usize..12) {
        let mut ledger = PayrollLedger::new();
        for n in 0..count {
            ledger.add(salaried(&format!("E{n}"))).unwrap();
        }
        let report = ledger.render_report();
        prop_assert_eq!(report.matches("Employee: ").count(), count);
    }
}
