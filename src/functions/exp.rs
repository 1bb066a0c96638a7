use crate::function::Function;
use ndarray::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exp;

impl Function for Exp {
    fn forward(&self, x: ArrayViewD<f64>) -> ArrayD<f64> {
        x.mapv(f64::exp)
    }

    fn name(&self) -> &'static str {
        "Exp"
    }
}

#[test]
fn test_exp_at_zero() {
    assert_eq!(Exp.forward(arr0(0.0).into_dyn().view()), arr0(1.0).into_dyn());
}

#[test]
fn test_exp_strictly_increasing() {
    let xs = Array1::range(-20., 20., 0.25).into_dyn();
    let ys = Exp.forward(xs.view());
    let ys = ys.iter().copied().collect::<Vec<_>>();
    assert!(ys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_exp_increasing_on_random_pairs() {
    use rand::prelude::*;

    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let a: f64 = rng.gen_range(-5., 5.);
        let b = a + rng.gen_range(1e-3, 1.);
        let y = Exp.forward(array![a, b].into_dyn().view());
        let y = y.iter().copied().collect::<Vec<_>>();
        assert!(y[0] < y[1]);
    }
}

#[test]
fn test_exp_idempotent() {
    let x = array![-1.0, 0.25, 7.0].into_dyn();
    let y1 = Exp.forward(x.view());
    let y2 = Exp.forward(x.view());
    assert!(y1
        .iter()
        .zip(y2.iter())
        .all(|(a, b)| a.to_bits() == b.to_bits()));
}
