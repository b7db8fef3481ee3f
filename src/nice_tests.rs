use super::*;

fn texts(labels: &[NiceLabel]) -> Vec<&str> {
    labels.iter().map(|l| l.text.as_str()).collect()
}

#[test]
fn nice_number_ceiling() {
    assert!((nice_number(100.0, false) - 100.0).abs() < 1e-9);
    assert!((nice_number(3.2, false) - 5.0).abs() < 1e-9);
    assert!((nice_number(65.0, false) - 100.0).abs() < 1e-9);
}

#[test]
fn nice_number_rounded() {
    assert!((nice_number(25.0, true) - 20.0).abs() < 1e-9);
    assert!((nice_number(0.25, true) - 0.2).abs() < 1e-9);
    assert!((nice_number(7.5, true) - 10.0).abs() < 1e-9);
    assert!((nice_number(1.4, true) - 1.0).abs() < 1e-9);
}

#[test]
fn labels_for_round_range() {
    let labels = labels(0.0, 100.0, NiceOptions::default());
    assert_eq!(texts(&labels), ["0", "20", "40", "60", "80", "100"]);
}

#[test]
fn labels_choose_fraction_digits_from_step() {
    let labels = labels(0.0, 1.0, NiceOptions::default());
    assert_eq!(texts(&labels), ["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
}

#[test]
fn tight_labels_snap_ends_to_data() {
    let labels = labels(-43.0, 22.0, NiceOptions::default());
    assert_eq!(texts(&labels), ["-43", "-40", "-20", "0", "20", "22"]);
    assert!((labels[0].value + 43.0).abs() < 1e-9);
}

#[test]
fn loose_labels_enclose_data() {
    let options = NiceOptions {
        style: LabelStyle::Loose,
        ..NiceOptions::default()
    };
    let labels = labels(-43.0, 22.0, options);
    assert_eq!(texts(&labels), ["-60", "-40", "-20", "0", "20", "40"]);
}

#[test]
fn explicit_scale() {
    let options = NiceOptions {
        scale: Some(2),
        ..NiceOptions::default()
    };
    let labels = labels(0.0, 100.0, options);
    assert_eq!(labels[1].text, "20.00");
}

#[test]
fn degenerate_range_gives_single_label() {
    let labels = labels(5.0, 5.0, NiceOptions::default());
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].text, "5");
}

#[test]
fn tiny_tick_count_does_not_divide_by_zero() {
    let options = NiceOptions {
        ticks: 1,
        ..NiceOptions::default()
    };
    let labels = labels(0.0, 10.0, options);
    assert!(labels.len() >= 2);
}

#[test]
fn huge_magnitude_stays_bounded() {
    let labels = labels(1e20, 1.000_000_000_000_001_6e20, NiceOptions::default());
    assert!(labels.len() >= 2);
    assert!(labels.len() < 20);
    assert!((labels[0].value - 1e20).abs() < f64::EPSILON);
}

#[test]
fn tick_count_is_capped() {
    let options = NiceOptions {
        ticks: usize::MAX,
        scale: Some(0),
        ..NiceOptions::default()
    };
    let labels = labels(0.0, 10.0, options);
    assert!(labels.len() <= 2 * MAX_LABELS);
    assert_eq!(labels.last().map(|l| l.text.as_str()), Some("10"));
}
