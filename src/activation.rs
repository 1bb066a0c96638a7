use ndarray::prelude::*;

pub fn step(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

pub fn step_arr1(xs: ArrayView1<f64>) -> Array1<f64> {
    xs.mapv(step)
}

pub fn sigmoid_arr1(xs: ArrayView1<f64>) -> Array1<f64> {
    xs.mapv(sigmoid)
}

/// Evenly spaced values in `[start, stop)`.
pub fn arange(start: f64, stop: f64, step: f64) -> Array1<f64> {
    Array1::range(start, stop, step)
}

#[test]
fn test_step() {
    assert_eq!(
        array![0., 0., 0., 1., 1.],
        step_arr1(array![-2., -0.1, 0., 1e-9, 3.].view())
    );
}

#[test]
fn test_sigmoid() {
    assert_eq!(sigmoid(0.), 0.5);
    let ys = sigmoid_arr1(arange(-5., 5., 0.1).view());
    assert!(ys.iter().all(|&y| 0. < y && y < 1.));
    assert!(ys.iter().zip(ys.iter().skip(1)).all(|(a, b)| a < b));
}

#[test]
fn test_sigmoid_saturates_without_overflow() {
    assert_eq!(sigmoid(-1000.), 0.);
    assert_eq!(sigmoid(1000.), 1.);
}

#[test]
fn test_sigmoid_derivative() {
    use crate::diff::numerical_diff_fn;

    for &x in &[-3., -0.5, 0., 1., 4.] {
        let s = sigmoid(x);
        approx::assert_abs_diff_eq!(
            numerical_diff_fn(sigmoid, x, 1e-4),
            s * (1. - s),
            epsilon = 1e-8
        );
    }
}

#[test]
fn test_arange() {
    assert_eq!(arange(0., 1., 0.25), array![0., 0.25, 0.5, 0.75]);
    assert_eq!(arange(-5., 5., 0.1).len(), 100);
}
