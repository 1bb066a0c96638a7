use crate::function::Function;
use crate::function::Node;
use crate::functions::{Exp, FunctionKind, Square};
use crate::variable::Variable;
use ndarray::prelude::*;

/// `square(exp(square(x)))`, built from fresh nodes on every call.
pub fn composite(x: &Variable) -> Variable {
    let mut a = Node::new(Square);
    let mut b = Node::new(Exp);
    let mut c = Node::new(Square);
    c.call(&b.call(&a.call(x)))
}

/// Functions applied in order, first to last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chain(pub Vec<FunctionKind>);

impl Chain {
    pub fn composite() -> Chain {
        Chain(vec![
            FunctionKind::Square,
            FunctionKind::Exp,
            FunctionKind::Square,
        ])
    }
}

impl Function for Chain {
    // empty chain is the identity
    fn forward(&self, x: ArrayViewD<f64>) -> ArrayD<f64> {
        self.0
            .iter()
            .fold(x.to_owned(), |y, f| f.forward(y.view()))
    }

    fn name(&self) -> &'static str {
        "Chain"
    }
}

#[test]
fn test_composite_value() {
    let y = composite(&Variable::scalar(0.5));
    let expected = (2.0 * 0.5f64.powi(2)).exp();
    approx::assert_abs_diff_eq!(y.as_scalar().unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn test_chain_matches_composite() {
    let x = Variable::from_array(array![-1.0, 0.0, 0.5, 1.25]);
    let mut node = Node::new(Chain::composite());
    assert_eq!(node.call(&x), composite(&x));
}

#[test]
fn test_empty_chain_is_identity() {
    let x = array![[1.0, -2.0], [3.0, 0.0]].into_dyn();
    assert_eq!(Chain::default().forward(x.view()), x);
}

#[test]
fn test_chain_applies_in_order() {
    let chain = Chain(vec![FunctionKind::Exp, FunctionKind::Square]);
    let y = chain.forward(arr0(1.0).into_dyn().view());
    approx::assert_abs_diff_eq!(
        y.iter().next().copied().unwrap(),
        2f64.exp(),
        epsilon = 1e-12
    );
}
