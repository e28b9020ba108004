use super::number;
use crate::assert_err;
use crate::distribution::{
    Categorical, Distribution, DistributionEnum, Empirical, Normal, TruncatedNormal, Uniform,
};
use crate::errors::DistributionError;
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn all_distributions() -> Vec<DistributionEnum> {
    vec![
        Empirical::new(vec![Tensor::from(1.), Tensor::from(3.)], None, false)
            .unwrap()
            .into(),
        Categorical::new(&Tensor::new(&[0.5, 0.5], &[2])).unwrap().into(),
        Normal::new_scalar(0., 1.).into(),
        TruncatedNormal::new_scalar(0., 1., -1., 1.).into(),
        Uniform::new_scalar(0., 1.).into(),
    ]
}

#[test]
fn test_names_and_address_suffixes() {
    let names = all_distributions()
        .iter()
        .map(|d| (d.name().to_string(), d.address_suffix().to_string()))
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            ("Empirical".to_string(), "".to_string()),
            ("Categorical".to_string(), "_Categorical(size:2)".to_string()),
            ("Normal".to_string(), "_Normal".to_string()),
            ("TruncatedNormal".to_string(), "_TruncatedNormal".to_string()),
            ("Uniform".to_string(), "_Uniform".to_string()),
        ]
    );
}

#[test]
fn test_every_distribution_samples_and_has_moments() {
    let mut rng = StdRng::seed_from_u64(0);
    for dist in all_distributions() {
        let sample = dist.sample(&mut rng).unwrap();
        assert!(!sample.has_nan_or_inf());
        assert!(dist.mean().is_ok());
        let variance = number(&dist.variance().unwrap());
        let stddev = number(&dist.stddev().unwrap());
        assert_abs_diff_eq!(stddev * stddev, variance, epsilon = 1e-5);
    }
}

#[test]
fn test_expectation_only_for_empirical() {
    for dist in all_distributions() {
        let result = dist.expectation(&|x: &Tensor| x.clone());
        match dist {
            DistributionEnum::Empirical(_) => {
                assert_abs_diff_eq!(number(&result.unwrap()), 2., epsilon = 1e-6)
            }
            _ => assert_err!(
                result,
                DistributionError::NotImplemented { operation, .. } if *operation == "expectation"
            ),
        }
    }
}

#[test]
fn test_prob_is_exp_of_log_prob() {
    let value = Tensor::from(0.5);
    for dist in all_distributions() {
        if let (Ok(log_prob), Ok(prob)) = (dist.log_prob(&value), dist.prob(&value)) {
            assert_abs_diff_eq!(number(&prob), number(&log_prob).exp(), epsilon = 1e-6);
        }
    }
}
