//! Rate conversion over slices

use strider::resample::{resample, resample_f32, Interpolation, ResampleConfig, ResampleError};
use test_case::test_case;

fn ramp(len: usize) -> Vec<u32> {
    (0..len as u32).collect()
}

#[test_case(1.0, 0, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9] ; "identity")]
#[test_case(2.5, 0, vec![0, 2, 5, 7] ; "two and a half")]
#[test_case(0.5, 7, vec![7, 7, 8, 8, 9, 9] ; "upsample from offset")]
#[test_case(3.0, 1, vec![1, 4, 7] ; "downsample by three")]
#[test_case(-1.0, 5, vec![5, 4, 3, 2, 1, 0] ; "reverse")]
#[test_case(-2.5, 9, vec![9, 6, 4, 1] ; "reverse fractional")]
fn test_nearest_resampling(step: f32, start: usize, expected: Vec<u32>) {
    let config = ResampleConfig::with_step(step)
        .expect("valid step")
        .with_start(start);
    let output = resample(&ramp(10), &config).expect("resampling succeeds");
    assert_eq!(output, expected);
    assert_eq!(config.expected_len(10).expect("valid config"), expected.len());
}

#[test_case(44_100.0, 22_050.0, 2.0 ; "halve rate")]
#[test_case(22_050.0, 44_100.0, 0.5 ; "double rate")]
#[test_case(48_000.0, 32_000.0, 1.5 ; "three to two")]
fn test_step_from_rates(source_hz: f32, target_hz: f32, step: f32) {
    let config = ResampleConfig::from_rates(source_hz, target_hz).expect("valid rates");
    assert_eq!(config.step, step);
}

#[test_case(f32::NAN, 44_100.0 ; "nan source")]
#[test_case(44_100.0, 0.0 ; "zero target")]
#[test_case(-8_000.0, 8_000.0 ; "negative source")]
fn test_invalid_rates(source_hz: f32, target_hz: f32) {
    assert!(matches!(
        ResampleConfig::from_rates(source_hz, target_hz),
        Err(ResampleError::InvalidRate { .. })
    ));
}

#[test]
fn test_max_output_caps_length() {
    let config = ResampleConfig::with_step(0.25)
        .expect("valid step")
        .with_max_output(5);
    let output = resample(&ramp(10), &config).expect("resampling succeeds");
    assert_eq!(output, vec![0, 0, 0, 0, 1]);
}

#[test]
fn test_start_out_of_range() {
    let config = ResampleConfig::default().with_start(10);
    assert_eq!(
        resample(&ramp(10), &config),
        Err(ResampleError::StartOutOfRange { start: 10, len: 10 })
    );
}

#[test]
fn test_linear_interpolation_between_samples() {
    let input = [0.0f32, 10.0, 20.0];
    let config = ResampleConfig::with_step(0.25)
        .expect("valid step")
        .with_interpolation(Interpolation::Linear);
    let output = resample_f32(&input, &config).expect("resampling succeeds");
    assert_eq!(
        output,
        vec![0.0, 2.5, 5.0, 7.5, 10.0, 12.5, 15.0, 17.5, 20.0, 20.0, 20.0, 20.0]
    );
}

#[test]
fn test_nearest_f32_matches_generic() {
    let input: Vec<f32> = (0..16).map(|i| i as f32 * 0.5).collect();
    let config = ResampleConfig::with_step(1.75).expect("valid step");
    let generic = resample(&input, &config).expect("resampling succeeds");
    let specialised = resample_f32(&input, &config).expect("resampling succeeds");
    assert_eq!(generic, specialised);
}

#[test]
fn test_long_non_dyadic_run_stays_in_bounds() {
    let input = ramp(1_000);
    let config = ResampleConfig::with_step(0.1).expect("valid step");
    let output = resample(&input, &config).expect("resampling succeeds");
    let expected = config.expected_len(input.len()).expect("valid config");
    assert!(output.len() + 1 >= expected && output.len() <= expected);
    assert!(output.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(output.first(), Some(&0));
    assert_eq!(output.last(), Some(&999));
}
