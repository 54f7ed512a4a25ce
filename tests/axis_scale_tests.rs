use chart_layout::core::{ScaleOptions, autoscale, autoscale_with_uncertainty, scale};
use chart_layout::error::LayoutError;

#[test]
fn already_round_bounds_need_no_expansion() {
    let options = ScaleOptions::default().with_min_ticks(6);
    let (range, plan) = scale(1.0, 9.0, &options).expect("valid scale");

    assert_eq!(range.min, 1.0);
    assert_eq!(range.max, 9.0);
    assert_eq!(plan.interval, 1.0);
    assert_eq!(plan.count, 9);
}

#[test]
fn bounds_snap_outward_onto_the_tick_grid() {
    let (range, plan) = scale(0.2, 6.5, &ScaleOptions::default()).expect("valid scale");

    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, 7.0);
    assert_eq!(plan.interval, 1.0);
    assert_eq!(plan.count, 8);
    assert!(plan.includes_origin);
}

#[test]
fn result_is_a_fixed_point_of_the_rounding() {
    let options = ScaleOptions::default();
    let (first_range, first_plan) = scale(0.2, 6.5, &options).expect("first pass");
    let (second_range, second_plan) =
        scale(first_range.min, first_range.max, &options).expect("second pass");

    assert_eq!(first_range, second_range);
    assert_eq!(first_plan.interval, second_plan.interval);
    assert_eq!(first_plan.count, second_plan.count);
}

#[test]
fn near_zero_range_collapses_to_unit_window() {
    let (range, plan) = scale(5.0, 5.0 + 1e-12, &ScaleOptions::default()).expect("valid scale");

    assert_eq!(plan.count, 3);
    assert_eq!(plan.interval, 1.0);
    assert_eq!(range.max - range.min, 2.0);
    assert!(range.min < 5.0 && range.max > 5.0);
}

#[test]
fn origin_option_pulls_zero_onto_the_axis() {
    let options = ScaleOptions::default().with_origin(true);
    let (range, plan) = scale(2.0, 6.5, &options).expect("valid scale");

    assert_eq!(range.min, 0.0);
    assert!(plan.includes_origin);
}

#[test]
fn decimal_steps_preround_the_raw_bounds() {
    let options = ScaleOptions::default().with_steps(10);
    let (range, _) = scale(1.3, 8.7, &options).expect("valid scale");

    assert_eq!(range.min, 1.0);
    assert_eq!(range.max, 10.0);
}

#[test]
fn even_steps_preround_the_raw_bounds() {
    let options = ScaleOptions::default().with_steps(2);
    let (range, _) = scale(1.5, 8.7, &options).expect("valid scale");

    assert_eq!(range.min, 1.0);
    assert_eq!(range.max, 10.0);
}

#[test]
fn interval_halves_until_min_ticks_is_met() {
    let options = ScaleOptions::default().with_min_ticks(5);
    let (range, plan) = scale(1.0, 3.0, &options).expect("valid scale");

    assert_eq!(range.min, 1.0);
    assert_eq!(range.max, 3.0);
    assert_eq!(plan.interval, 0.5);
    assert_eq!(plan.count, 5);
}

#[test]
fn halving_trims_ticks_stranded_beyond_the_data() {
    let options = ScaleOptions::default().with_min_ticks(5);
    let (range, plan) = scale(1.6, 3.0, &options).expect("valid scale");

    assert_eq!(plan.interval, 0.5);
    assert_eq!(range.min, 1.5);
    assert_eq!(range.max, 3.0);
}

#[test]
fn tight_tolerance_drops_barely_needed_outer_ticks() {
    let options = ScaleOptions::default().with_tight(0.6);
    let (range, plan) = scale(0.5, 6.5, &options).expect("valid scale");

    assert_eq!(range.min, 1.0);
    assert_eq!(range.max, 6.0);
    assert_eq!(plan.count, 6);
}

#[test]
fn inverted_and_non_finite_bounds_are_rejected() {
    let options = ScaleOptions::default();
    assert!(matches!(
        scale(9.0, 1.0, &options),
        Err(LayoutError::InvalidRange { .. })
    ));
    assert!(matches!(
        scale(5.0, 5.0, &options),
        Err(LayoutError::InvalidRange { .. })
    ));
    assert!(matches!(
        scale(f64::NAN, 1.0, &options),
        Err(LayoutError::InvalidRange { .. })
    ));
    assert!(matches!(
        scale(0.0, f64::INFINITY, &options),
        Err(LayoutError::InvalidRange { .. })
    ));
}

#[test]
fn out_of_range_options_are_rejected_not_clamped() {
    assert!(matches!(
        scale(0.0, 1.0, &ScaleOptions::default().with_tight(1.5)),
        Err(LayoutError::InvalidOption(_))
    ));
    assert!(matches!(
        scale(0.0, 1.0, &ScaleOptions::default().with_steps(3)),
        Err(LayoutError::InvalidOption(_))
    ));
    assert!(matches!(
        scale(0.0, 1.0, &ScaleOptions::default().with_min_ticks(1)),
        Err(LayoutError::InvalidOption(_))
    ));
}

#[test]
fn autoscale_excludes_infinite_samples_and_reports_them() {
    let samples = [0.2, 1.1, 4.2, 3.3, 5.4, 6.5, f64::INFINITY];
    let result = autoscale(&samples, &ScaleOptions::default()).expect("autoscale");

    assert_eq!(result.excluded, 1);
    assert_eq!(result.range.min, 0.0);
    assert!(result.range.max >= 6.5);
    assert_eq!(result.range.max % result.ticks.interval, 0.0);
}

#[test]
fn autoscale_of_all_equal_samples_collapses() {
    let result = autoscale(&[4.0, 4.0, 4.0], &ScaleOptions::default()).expect("autoscale");

    assert_eq!(result.ticks.count, 3);
    assert_eq!(result.range.min, 3.0);
    assert_eq!(result.range.max, 5.0);
}

#[test]
fn uncertainties_widen_the_autoscaled_range() {
    let values = [2.0, 4.0, 6.0];
    let sigmas = [0.5, 0.5, 2.0];
    let options = ScaleOptions::default().with_plus_minus_factor(2.0);
    let widened = autoscale_with_uncertainty(&values, &sigmas, &options).expect("autoscale");
    let plain = autoscale(&values, &ScaleOptions::default()).expect("autoscale");

    // Widened data spans 1.0..=10.0, so the axis must cover at least that.
    assert!(widened.range.min <= 1.0);
    assert!(widened.range.max >= 10.0);
    assert!(widened.range.max > plain.range.max);
}

#[test]
fn uncertainty_slice_length_mismatch_is_rejected() {
    let result = autoscale_with_uncertainty(&[1.0, 2.0], &[0.1], &ScaleOptions::default());
    assert!(matches!(result, Err(LayoutError::InvalidOption(_))));
}
