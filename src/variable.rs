use ndarray::prelude::*;
use std::fmt;

/// A value container. The payload is shared, so cloning a `Variable` is cheap
/// and a clone observes the same data.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    data: ArcArray<f64, IxDyn>,
}

impl Variable {
    pub fn new(data: ArrayD<f64>) -> Variable {
        Variable {
            data: data.into_shared(),
        }
    }

    pub fn scalar(x: f64) -> Variable {
        Variable::new(arr0(x).into_dyn())
    }

    pub fn from_array<D: Dimension>(data: Array<f64, D>) -> Variable {
        Variable::new(data.into_dyn())
    }

    pub fn data(&self) -> ArrayViewD<'_, f64> {
        self.data.view()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// The payload as a plain number, if it holds exactly one element.
    pub fn as_scalar(&self) -> Option<f64> {
        if self.data.len() == 1 {
            self.data.iter().next().copied()
        } else {
            None
        }
    }
}

impl From<f64> for Variable {
    fn from(x: f64) -> Variable {
        Variable::scalar(x)
    }
}

impl From<ArrayD<f64>> for Variable {
    fn from(data: ArrayD<f64>) -> Variable {
        Variable::new(data)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.as_scalar() {
            Some(x) if self.data.ndim() == 0 => write!(f, "variable({})", x),
            _ => write!(f, "variable({})", self.data),
        }
    }
}

#[test]
fn test_scalar_is_zero_dim() {
    let x = Variable::scalar(2.0);
    assert_eq!(x.shape(), &[] as &[usize]);
    assert_eq!(x.as_scalar(), Some(2.0));
    assert_eq!(x.to_string(), "variable(2)");
}

#[test]
fn test_array_payload() {
    let x = Variable::from_array(array![1.0, 2.0, 3.0]);
    assert_eq!(x.shape(), &[3]);
    assert_eq!(x.as_scalar(), None);
    assert_eq!(x.data(), array![1.0, 2.0, 3.0].into_dyn());
}

#[test]
fn test_clone_shares_payload() {
    let x = Variable::from_array(array![[1.0, 2.0], [3.0, 4.0]]);
    let y = x.clone();
    assert_eq!(x.data().as_ptr(), y.data().as_ptr());
}

#[test]
fn test_from_conversions() {
    assert_eq!(Variable::from(1.5), Variable::scalar(1.5));
    let data = array![0.0, 1.0].into_dyn();
    assert_eq!(Variable::from(data.clone()).data(), data);
}
