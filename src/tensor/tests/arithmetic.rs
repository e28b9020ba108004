use crate::assert_panic;
use crate::tensor::Tensor;

#[test]
fn test_ops_with_number() {
    let tensor = Tensor::new(&[1., 2., 3.], &[3]);
    assert_eq!(&tensor + 1., Tensor::new(&[2., 3., 4.], &[3]));
    assert_eq!(1. + &tensor, Tensor::new(&[2., 3., 4.], &[3]));
    assert_eq!(&tensor - 1., Tensor::new(&[0., 1., 2.], &[3]));
    assert_eq!(10. - &tensor, Tensor::new(&[9., 8., 7.], &[3]));
    assert_eq!(&tensor * 2., Tensor::new(&[2., 4., 6.], &[3]));
    assert_eq!(2. * tensor.clone(), Tensor::new(&[2., 4., 6.], &[3]));
    assert_eq!(&tensor / 2., Tensor::new(&[0.5, 1., 1.5], &[3]));
    assert_eq!(6. / tensor, Tensor::new(&[6., 3., 2.], &[3]));
}

#[test]
fn test_ops_within_same_shape_tensors() {
    let a = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    let b = Tensor::new(&[4., 3., 2., 1.], &[2, 2]);
    assert_eq!(&a + &b, Tensor::new(&[5.; 4], &[2, 2]));
    assert_eq!(a.clone() - &b, Tensor::new(&[-3., -1., 1., 3.], &[2, 2]));
    assert_eq!(&a * b.clone(), Tensor::new(&[4., 6., 6., 4.], &[2, 2]));
    assert_eq!(a / b, Tensor::new(&[0.25, 2. / 3., 1.5, 4.], &[2, 2]));
}

#[test]
fn test_ops_with_broadcasting() {
    let matrix = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    let row = Tensor::new(&[10., 20., 30.], &[3]);
    let column = Tensor::new(&[1., 2.], &[2, 1]);
    let scalar = Tensor::from(1.);

    assert_eq!(
        &matrix + &row,
        Tensor::new(&[11., 22., 33., 14., 25., 36.], &[2, 3])
    );
    assert_eq!(
        &matrix * &column,
        Tensor::new(&[1., 2., 3., 8., 10., 12.], &[2, 3])
    );
    assert_eq!(&scalar + &row, Tensor::new(&[11., 21., 31.], &[3]));
    // 双向广播
    assert_eq!((&row - &column).shape(), &[2, 3]);
}

#[test]
fn test_ops_with_incompatible_shapes() {
    let a = Tensor::new(&[1., 2., 3.], &[3]);
    let b = Tensor::new(&[1., 2.], &[2]);
    assert_panic!(
        &a + &b,
        "形状无法广播，故无法相加：第一个张量的形状为[3]，第二个张量的形状为[2]"
    );
    assert_panic!(&a / &b);
}

#[test]
fn test_div_by_zero_propagates_non_finite() {
    let numerator = Tensor::new(&[1., -1., 0.], &[3]);
    let result = numerator / Tensor::new(&[0., 0., 0.], &[3]);
    let values = result.to_vec();
    assert_eq!(values[0], f32::INFINITY);
    assert_eq!(values[1], f32::NEG_INFINITY);
    assert!(values[2].is_nan());
}

#[test]
fn test_neg() {
    let tensor = Tensor::new(&[1., -2.], &[2]);
    assert_eq!(-&tensor, Tensor::new(&[-1., 2.], &[2]));
    assert_eq!(-tensor, Tensor::new(&[-1., 2.], &[2]));
}
