use crate::error::{Error, Result};
use crate::function::Call;
use crate::variable::Variable;
use log::debug;
use ndarray::prelude::*;

pub const DEFAULT_EPS: f64 = 1e-4;

/// Central difference with the default perturbation.
pub fn numerical_diff<C: Call + ?Sized>(f: &mut C, x: &Variable) -> ArrayD<f64> {
    numerical_diff_with_eps(f, x, DEFAULT_EPS)
}

/// `(f(x + eps) - f(x - eps)) / 2eps`, elementwise.
///
/// Truncation error is `O(eps²)`, but below roughly `1e-8` cancellation in
/// the numerator dominates. The step is used as given.
pub fn numerical_diff_with_eps<C: Call + ?Sized>(
    f: &mut C,
    x: &Variable,
    eps: f64,
) -> ArrayD<f64> {
    debug!("numerical_diff: eps={:e} shape={:?}", eps, x.shape());
    let x0 = Variable::new(&x.data() - eps);
    let x1 = Variable::new(&x.data() + eps);
    let y0 = f.call(&x0);
    let y1 = f.call(&x1);
    (&y1.data() - &y0.data()) / (2. * eps)
}

/// Central difference of a plain scalar function.
pub fn numerical_diff_fn(f: impl Fn(f64) -> f64, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2. * h)
}

/// Perturbation settings for the binaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffConfig {
    pub eps: f64,
}

impl Default for DiffConfig {
    fn default() -> DiffConfig {
        DiffConfig { eps: DEFAULT_EPS }
    }
}

impl DiffConfig {
    pub fn new(eps: f64) -> Result<DiffConfig> {
        if eps.is_finite() && eps > 0. {
            Ok(DiffConfig { eps })
        } else {
            Err(Error::InvalidEps(eps))
        }
    }

    pub fn diff<C: Call + ?Sized>(&self, f: &mut C, x: &Variable) -> ArrayD<f64> {
        numerical_diff_with_eps(f, x, self.eps)
    }
}

#[cfg(test)]
use crate::function::Node;
#[cfg(test)]
use crate::functions::{composite, Chain, Square};
#[cfg(test)]
use approx::assert_abs_diff_eq;

#[cfg(test)]
fn scalar(a: ArrayD<f64>) -> f64 {
    a.iter().next().copied().unwrap()
}

#[test]
fn test_diff_square() {
    let dy = numerical_diff(&mut Node::new(Square), &Variable::scalar(2.0));
    assert_eq!(dy.ndim(), 0);
    assert_abs_diff_eq!(scalar(dy), 4.0, epsilon = 1e-4);
}

#[test]
fn test_diff_square_elementwise() {
    let x = Variable::from_array(array![-3.0, -0.5, 0.0, 1.0, 2.5]);
    let dy = numerical_diff(&mut Node::new(Square), &x);
    for (d, x) in dy.iter().zip(x.data().iter()) {
        assert_abs_diff_eq!(*d, 2. * x, epsilon = 1e-6);
    }
}

#[test]
fn test_diff_composite() {
    let x = 0.5f64;
    let expected = 4. * x * (2. * x * x).exp();
    assert_abs_diff_eq!(expected, 3.2974425414002564, epsilon = 1e-12);

    let dy = numerical_diff(&mut composite, &Variable::scalar(x));
    assert_abs_diff_eq!(scalar(dy), expected, epsilon = 1e-6);
}

#[test]
fn test_diff_chain_node_matches_composite() {
    let x = Variable::scalar(0.5);
    let a = numerical_diff(&mut Node::new(Chain::composite()), &x);
    let b = numerical_diff(&mut composite, &x);
    assert_eq!(a, b);
}

#[test]
fn test_diff_evaluates_upper_point_last() {
    let mut node = Node::new(Square);
    numerical_diff_with_eps(&mut node, &Variable::scalar(1.0), 0.5);
    assert_eq!(node.input().and_then(Variable::as_scalar), Some(1.5));
}

#[test]
fn test_diff_config() {
    let config = DiffConfig::new(1e-3).unwrap();
    let dy = config.diff(&mut Node::new(Square), &Variable::scalar(-1.0));
    assert_abs_diff_eq!(scalar(dy), -2.0, epsilon = 1e-9);
}

#[test]
fn test_diff_config_validation() {
    assert_eq!(DiffConfig::default().eps, 1e-4);
    assert_eq!(DiffConfig::new(1e-6).unwrap().eps, 1e-6);
    for &eps in &[0.0, -1e-4, f64::NAN, f64::INFINITY] {
        assert!(matches!(DiffConfig::new(eps), Err(Error::InvalidEps(_))));
    }
}

#[test]
fn test_tiny_eps_cancels_out() {
    // 2 ± 1e-17 rounds back to 2, so the numerator vanishes
    let x = Variable::scalar(2.0);
    let good = scalar(numerical_diff_with_eps(&mut Node::new(Square), &x, 1e-4));
    let bad = scalar(numerical_diff_with_eps(&mut Node::new(Square), &x, 1e-17));
    assert_eq!(bad, 0.0);
    assert!((bad - 4.0).abs() > (good - 4.0).abs());
    assert!((good - 4.0).abs() < 1e-6);
}

#[test]
fn test_tiny_eps_degrades_composite() {
    let x = Variable::scalar(1.0);
    let expected = 4. * 2f64.exp();
    let errors = [1e-4, 1e-17]
        .iter()
        .map(|&eps| {
            let dy = numerical_diff_with_eps(&mut composite, &x, eps);
            (scalar(dy) - expected).abs()
        })
        .collect::<Vec<_>>();
    assert!(errors[0] < 1e-5);
    assert!(errors[1] > 1.0);
}

#[test]
fn test_diff_fn() {
    assert_abs_diff_eq!(numerical_diff_fn(|x| x * x * x, 2., 1e-4), 12., epsilon = 1e-6);
}
