use super::number;
use crate::assert_err;
use crate::distribution::{Categorical, Distribution};
use crate::errors::DistributionError;
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_probs_are_normalized() {
    let dist = Categorical::new(&Tensor::new(&[1., 3.], &[2])).unwrap();
    assert_eq!(dist.len(), 2);
    assert_eq!(dist.probs(), &Tensor::new(&[0.25, 0.75], &[2]));
    assert_eq!(dist.address_suffix(), "_Categorical(size:2)");
}

#[test]
fn test_log_prob_coerces_to_flattened_indices() {
    let dist = Categorical::new(&Tensor::new(&[0.2, 0.3, 0.5], &[3])).unwrap();
    let log_prob = dist
        .log_prob(&Tensor::new(&[0., 2., 1.7, 1.], &[2, 2]))
        .unwrap();
    assert_eq!(log_prob.shape(), &[4]);
    let expected = [0.2f32.ln(), 0.5f32.ln(), 0.3f32.ln(), 0.3f32.ln()];
    for (actual, expected) in log_prob.to_vec().iter().zip(expected) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-6);
    }
}

#[test]
fn test_log_prob_out_of_range() {
    let dist = Categorical::new(&Tensor::new(&[0.5, 0.5], &[2])).unwrap();
    assert_err!(
        dist.log_prob(&Tensor::from(2.)),
        DistributionError::CategoryOutOfRange { size: 2, .. }
    );
    assert_err!(
        dist.log_prob(&Tensor::from(-1.)),
        DistributionError::CategoryOutOfRange { .. }
    );
}

#[test]
fn test_sample_frequencies() {
    let dist = Categorical::new(&Tensor::new(&[0.1, 0.6, 0.3], &[3])).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let mut counts = [0usize; 3];
    for _ in 0..10_000 {
        let sample = dist.sample(&mut rng).unwrap();
        assert_eq!(sample.shape(), &[1]);
        counts[number(&sample) as usize] += 1;
    }
    assert_abs_diff_eq!(counts[0] as f32 / 10_000., 0.1, epsilon = 0.02);
    assert_abs_diff_eq!(counts[1] as f32 / 10_000., 0.6, epsilon = 0.02);
    assert_abs_diff_eq!(counts[2] as f32 / 10_000., 0.3, epsilon = 0.02);
}

#[test]
fn test_moments_over_support() {
    let dist = Categorical::new(&Tensor::new(&[0.25, 0.75], &[2])).unwrap();
    assert_abs_diff_eq!(number(&dist.mean().unwrap()), 0.75, epsilon = 1e-6);
    assert_abs_diff_eq!(number(&dist.variance().unwrap()), 0.1875, epsilon = 1e-6);
}

#[test]
fn test_invalid_probs() {
    assert_err!(
        Categorical::new(&Tensor::new(&[0.5, -0.1], &[2])),
        DistributionError::InvalidProbs(_)
    );
    assert_err!(
        Categorical::new(&Tensor::new(&[0., 0.], &[2])),
        DistributionError::InvalidProbs(_)
    );
    assert_err!(
        Categorical::new(&Tensor::new(&[], &[0])),
        DistributionError::InvalidProbs(_)
    );
    assert_err!(
        Categorical::new(&Tensor::new(&[f32::NAN, 1.], &[2])),
        DistributionError::InvalidProbs(_)
    );
}

#[test]
fn test_display() {
    let dist = Categorical::new(&Tensor::new(&[1., 1.], &[2])).unwrap();
    assert_eq!(dist.to_string(), "Categorical(probs:[0.5000, 0.5000])");
}
