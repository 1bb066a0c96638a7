pub mod square;
pub use square::*;

pub mod exp;
pub use exp::*;

pub mod kind;
pub use kind::*;

pub mod chain;
pub use chain::*;
