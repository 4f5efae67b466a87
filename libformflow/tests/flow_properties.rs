//! End-to-end checks of the form flow through the public controller API

use libformflow::{
    AgeCategory, AgeOutcome, EmailOutcome, FormFlowController, FormFlowError, Page, Parity,
};

#[test]
fn test_non_numeric_inputs_always_error() {
    let mut flow = FormFlowController::new();
    for input in ["", "x", "ten", "1e3", "--1", "4,5", "½"] {
        flow.on_generate_list(input);
        assert!(flow.numbers().is_error(), "{:?}", input);
        assert_eq!(flow.numbers().generated_list().count(), 0);
    }
}

#[test]
fn test_positive_counts_generate_one_to_n() {
    let mut flow = FormFlowController::new();
    for n in 1..=50 {
        flow.on_generate_list(&n.to_string());
        let list: Vec<i32> = flow.numbers().generated_list().collect();
        assert_eq!(list, (1..=n).collect::<Vec<_>>());
    }
}

#[test]
fn test_every_item_reports_its_parity() {
    let mut flow = FormFlowController::new();
    flow.on_generate_list("25");
    let items: Vec<i32> = flow.numbers().generated_list().collect();
    for n in items {
        let report = flow.on_click_list_item(n).expect("listed item");
        let expected = if n % 2 == 0 { Parity::Even } else { Parity::Odd };
        assert_eq!(report.parity, expected);
        assert!(report.message().contains(&format!("{} is {}", n, expected)));
    }
}

#[test]
fn test_email_examples() {
    let mut flow = FormFlowController::new();

    flow.on_email_change("");
    assert_eq!(flow.on_check_email(), EmailOutcome::Empty);

    flow.on_email_change("abc");
    assert_eq!(flow.on_check_email(), EmailOutcome::Malformed);

    flow.on_email_change("a@b.com");
    assert_eq!(flow.on_check_email(), EmailOutcome::Valid);
    assert!(flow.email().error_message().is_empty());
}

#[test]
fn test_age_examples() {
    let cases = [
        ("1", AgeOutcome::Categorized(AgeCategory::Infant)),
        ("2", AgeOutcome::Categorized(AgeCategory::Child)),
        ("6", AgeOutcome::Categorized(AgeCategory::Child)),
        ("7", AgeOutcome::Categorized(AgeCategory::Adult)),
        ("66", AgeOutcome::Categorized(AgeCategory::Elderly)),
        ("x", AgeOutcome::Invalid),
    ];

    let mut flow = FormFlowController::new();
    flow.on_name_change("Minh");
    for (raw, expected) in cases {
        flow.on_age_change(raw);
        assert_eq!(flow.on_check_age(), expected, "age {:?}", raw);
    }
}

#[test]
fn test_only_defined_transitions_are_reachable() {
    let allowed = [
        (Page::Numbers, Page::Email),
        (Page::Email, Page::Numbers),
        (Page::Email, Page::Age),
        (Page::Age, Page::Email),
        (Page::Age, Page::Numbers),
    ];

    // Walk every page, try every target
    for from in Page::ALL {
        for to in Page::ALL {
            let mut flow = FormFlowController::new();
            match from {
                Page::Numbers => {}
                Page::Email => {
                    flow.on_navigate(Page::Email).unwrap();
                }
                Page::Age => {
                    flow.on_navigate(Page::Email).unwrap();
                    flow.on_navigate(Page::Age).unwrap();
                }
            }

            let result = flow.on_navigate(to);
            if allowed.contains(&(from, to)) {
                assert_eq!(result.unwrap(), to);
                assert_eq!(flow.page(), to);
            } else {
                assert!(matches!(result, Err(FormFlowError::Navigation { .. })));
                assert_eq!(flow.page(), from);
            }
        }
    }
}

#[test]
fn test_outcomes_serialize_for_scripts() {
    let json = serde_json::to_value(AgeOutcome::Categorized(AgeCategory::Child)).unwrap();
    assert_eq!(json, serde_json::json!({"status": "categorized", "category": "child"}));

    let json = serde_json::to_value(EmailOutcome::Malformed).unwrap();
    assert_eq!(json, serde_json::json!("malformed"));
}
