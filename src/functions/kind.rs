use crate::function::Function;
use crate::functions::{Exp, Square};
use ndarray::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Square,
    Exp,
}

impl Function for FunctionKind {
    fn forward(&self, x: ArrayViewD<f64>) -> ArrayD<f64> {
        match self {
            FunctionKind::Square => Square.forward(x),
            FunctionKind::Exp => Exp.forward(x),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            FunctionKind::Square => Square.name(),
            FunctionKind::Exp => Exp.name(),
        }
    }
}

#[test]
fn test_kind_dispatch() {
    let x = array![-1.0, 0.0, 2.0].into_dyn();
    assert_eq!(
        FunctionKind::Square.forward(x.view()),
        Square.forward(x.view())
    );
    assert_eq!(FunctionKind::Exp.forward(x.view()), Exp.forward(x.view()));
    assert_eq!(FunctionKind::Exp.name(), "Exp");
}
