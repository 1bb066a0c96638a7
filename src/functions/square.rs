use crate::function::Function;
use ndarray::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square;

impl Function for Square {
    fn forward(&self, x: ArrayViewD<f64>) -> ArrayD<f64> {
        x.mapv(|x| x * x)
    }

    fn name(&self) -> &'static str {
        "Square"
    }
}

#[test]
fn test_square_forward() {
    for &x in &[-3.5, -1.0, 0.0, 0.5, 2.0, 1e3] {
        let y = Square.forward(arr0(x).into_dyn().view());
        assert_eq!(y, arr0(x * x).into_dyn());
    }
}

#[test]
fn test_square_elementwise() {
    let x = array![[-2.0, 0.0], [1.5, 3.0]].into_dyn();
    assert_eq!(
        Square.forward(x.view()),
        array![[4.0, 0.0], [2.25, 9.0]].into_dyn()
    );
}

#[test]
fn test_square_idempotent() {
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    let x = Array::random((4, 5), Uniform::new(-10., 10.)).into_dyn();
    let y1 = Square.forward(x.view());
    let y2 = Square.forward(x.view());
    assert!(y1
        .iter()
        .zip(y2.iter())
        .all(|(a, b)| a.to_bits() == b.to_bits()));
}
