use crate::variable::Variable;
use log::debug;
use ndarray::prelude::*;

/// A unit of computation mapping one payload to another of the same shape.
pub trait Function {
    fn forward(&self, x: ArrayViewD<f64>) -> ArrayD<f64>;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Anything that turns one `Variable` into another: a `Node` or a plain
/// function/closure composing several nodes.
pub trait Call {
    fn call(&mut self, input: &Variable) -> Variable;
}

impl<C> Call for C
where
    C: FnMut(&Variable) -> Variable,
{
    fn call(&mut self, input: &Variable) -> Variable {
        self(input)
    }
}

/// Wraps a `Function` and keeps the last input and output it saw.
/// The cache is for inspection only and is overwritten on every call.
#[derive(Debug, Clone)]
pub struct Node<F> {
    func: F,
    input: Option<Variable>,
    output: Option<Variable>,
}

impl<F: Function> Node<F> {
    pub fn new(func: F) -> Node<F> {
        Node {
            func,
            input: None,
            output: None,
        }
    }

    pub fn call(&mut self, input: &Variable) -> Variable {
        let y = self.func.forward(input.data());
        debug!("{}: forward on shape {:?}", self.func.name(), input.shape());
        let output = Variable::new(y);
        self.input = Some(input.clone());
        self.output = Some(output.clone());
        output
    }

    pub fn input(&self) -> Option<&Variable> {
        self.input.as_ref()
    }

    pub fn output(&self) -> Option<&Variable> {
        self.output.as_ref()
    }
}

impl<F: Function> Call for Node<F> {
    fn call(&mut self, input: &Variable) -> Variable {
        Node::call(self, input)
    }
}

#[cfg(test)]
use crate::functions::{Exp, Square};

#[test]
fn test_node_records_last_call() {
    let mut f = Node::new(Square);
    assert!(f.input().is_none());
    assert!(f.output().is_none());

    let x = Variable::scalar(3.0);
    let y = f.call(&x);
    assert_eq!(f.input(), Some(&x));
    assert_eq!(f.output(), Some(&y));

    let x2 = Variable::scalar(-1.0);
    let y2 = f.call(&x2);
    assert_eq!(f.input(), Some(&x2));
    assert_eq!(y2.as_scalar(), Some(1.0));
}

#[test]
fn test_node_output_shares_payload_with_cache() {
    let mut f = Node::new(Exp);
    let y = f.call(&Variable::from_array(array![0.0, 1.0]));
    let cached = f.output().unwrap();
    assert_eq!(cached.data().as_ptr(), y.data().as_ptr());
}

#[test]
fn test_closure_is_callable() {
    let mut a = Node::new(Square);
    let mut b = Node::new(Exp);
    let mut f = |x: &Variable| b.call(&a.call(x));
    let y = Call::call(&mut f, &Variable::scalar(0.0));
    assert_eq!(y.as_scalar(), Some(1.0));
}
