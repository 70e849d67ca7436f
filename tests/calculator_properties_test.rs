use intake_roi::core::display::{format_currency, format_roi_multiple};
use intake_roi::{coerce_input, compute, run_checks, DEFAULT_MONTHLY_FEE};

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[test]
fn test_sample_scenarios() {
    let two = compute(15000.0, 2.0, DEFAULT_MONTHLY_FEE);
    assert_eq!(two.revenue, 30000.0);
    assert_eq!(one_decimal(two.roi), 19.0);

    let one = compute(15000.0, 1.0, DEFAULT_MONTHLY_FEE);
    assert_eq!(one.revenue, 15000.0);
    assert_eq!(one_decimal(one.roi), 9.0);
}

#[test]
fn test_compute_is_idempotent() {
    let inputs = [(15000.0, 2.0), (0.0, 3.0), (1234.5, 0.5), (1500.0, 1.0)];
    for (case_value, clients) in inputs {
        let first = compute(case_value, clients, DEFAULT_MONTHLY_FEE);
        let second = compute(case_value, clients, DEFAULT_MONTHLY_FEE);
        assert_eq!(first, second);
    }
}

#[test]
fn test_roi_is_non_decreasing_in_case_value() {
    for clients in [0.5, 1.0, 2.0, 10.0] {
        let mut previous = f64::NEG_INFINITY;
        // case_value = 0 reports 0 while small positive revenue goes negative
        for step in 1..=200 {
            let case_value = step as f64 * 250.0;
            let roi = compute(case_value, clients, DEFAULT_MONTHLY_FEE).roi;
            assert!(
                roi >= previous,
                "roi dropped at case_value={} clients={}: {} < {}",
                case_value,
                clients,
                roi,
                previous
            );
            previous = roi;
        }
    }
}

#[test]
fn test_revenue_equal_to_fee_is_zero_multiple() {
    let outcome = compute(750.0, 2.0, DEFAULT_MONTHLY_FEE);
    assert_eq!(outcome.revenue, DEFAULT_MONTHLY_FEE);
    assert_eq!(outcome.roi, 0.0);
    assert_eq!(format_roi_multiple(outcome.roi), "—");
}

#[test]
fn test_text_inputs_coerce_like_the_page() {
    let case_value = coerce_input("15000");
    let clients = coerce_input("a few");
    let outcome = compute(case_value, clients, DEFAULT_MONTHLY_FEE);

    assert_eq!(outcome.revenue, 0.0);
    assert_eq!(outcome.roi, 0.0);
    assert_eq!(format_currency(outcome.revenue), "$0");
}

#[test]
fn test_startup_self_checks_pass() {
    let results = run_checks();
    assert!(!results.is_empty());
    for result in results {
        assert!(result.passed, "self-check failed: {}", result.description);
    }
}
