// crates/shared-kernel/tests/accuracy_display.rs
use indic_eval_shared_kernel::Accuracy;

#[test]
fn displays_three_decimals() {
    assert_eq!(Accuracy::new(0.8333333).to_string(), "0.833");
    assert_eq!(Accuracy::new(1.0).to_string(), "1.000");
}

#[test]
fn not_evaluated_displays_nan() {
    let acc = Accuracy::not_evaluated();
    assert!(!acc.is_evaluated());
    assert_eq!(acc.to_string(), "nan");
}

#[test]
fn from_counts_handles_empty_slice() {
    assert_eq!(Accuracy::from_counts(3, 4).value(), 0.75);
    assert!(!Accuracy::from_counts(0, 0).is_evaluated());
}
