pub mod activation;
pub mod config;
pub mod diff;
pub mod error;
pub mod function;
pub mod functions;
pub mod plot;
pub mod variable;

pub use config::PlotConfig;
pub use diff::{
    numerical_diff, numerical_diff_fn, numerical_diff_with_eps, DiffConfig, DEFAULT_EPS,
};
pub use error::{Error, Result};
pub use function::{Call, Function, Node};
pub use functions::{composite, Chain, Exp, FunctionKind, Square};
pub use variable::Variable;
