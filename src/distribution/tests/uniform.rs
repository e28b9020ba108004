use super::{number, sample_moments};
use crate::distribution::{Distribution, Uniform};
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_unit_interval_moments() {
    let dist = Uniform::new_scalar(0., 1.);
    assert_abs_diff_eq!(number(&dist.mean().unwrap()), 0.5, epsilon = 1e-7);
    assert_abs_diff_eq!(number(&dist.variance().unwrap()), 1. / 12., epsilon = 1e-7);
    assert_abs_diff_eq!(
        number(&dist.stddev().unwrap()),
        (1f32 / 12.).sqrt(),
        epsilon = 1e-7
    );
}

#[test]
fn test_log_prob_uses_half_open_interval() {
    let dist = Uniform::new_scalar(0., 1.);
    let log_prob = dist
        .log_prob(&Tensor::new(&[0.5, 0., 1., -0.1, 1.5], &[5]))
        .unwrap()
        .to_vec();
    assert_eq!(log_prob[0], 0.);
    // 下界包含在内
    assert_eq!(log_prob[1], 0.);
    // 上界不包含在内
    assert_eq!(log_prob[2], f32::NEG_INFINITY);
    assert_eq!(log_prob[3], f32::NEG_INFINITY);
    assert_eq!(log_prob[4], f32::NEG_INFINITY);
}

#[test]
fn test_log_prob_of_wider_interval() {
    let dist = Uniform::new_scalar(-2., 2.);
    let log_prob = dist.log_prob(&Tensor::from(1.)).unwrap();
    assert_abs_diff_eq!(number(&log_prob), -(4f32.ln()), epsilon = 1e-6);
    assert_abs_diff_eq!(number(&dist.prob(&Tensor::from(1.)).unwrap()), 0.25, epsilon = 1e-6);
}

#[test]
fn test_samples_stay_in_range() {
    let dist = Uniform::new_scalar(-3., 5.);
    let mut rng = StdRng::seed_from_u64(5);
    let samples = (0..5000)
        .map(|_| number(&dist.sample(&mut rng).unwrap()))
        .collect::<Vec<_>>();
    assert!(samples.iter().all(|&x| (-3. ..=5.).contains(&x)));
    let (mean, variance) = sample_moments(&samples);
    assert_abs_diff_eq!(mean, 1., epsilon = 0.15);
    assert_abs_diff_eq!(variance, 64. / 12., epsilon = 0.3);
}

#[test]
fn test_vector_parameters() {
    let dist = Uniform::new(&Tensor::new(&[0., 10.], &[2]), &Tensor::new(&[1., 20.], &[2]));
    assert_eq!(dist.mean().unwrap(), Tensor::new(&[0.5, 15.], &[2]));
    let sample = dist.sample(&mut StdRng::seed_from_u64(1)).unwrap().to_vec();
    assert!((0. ..=1.).contains(&sample[0]));
    assert!((10. ..=20.).contains(&sample[1]));
    assert_eq!(dist.low(), &Tensor::new(&[0., 10.], &[2]));
    assert_eq!(dist.high(), &Tensor::new(&[1., 20.], &[2]));
}

#[test]
fn test_display() {
    assert_eq!(
        Uniform::new_scalar(0., 1.).to_string(),
        "Uniform(low:0.0000, high:1.0000)"
    );
}
