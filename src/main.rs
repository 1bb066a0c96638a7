use clap::Parser;
use zero_dl_numdiff::{composite, DiffConfig, Node, Square, Variable, DEFAULT_EPS};

/// Estimates derivatives by central difference.
#[derive(Parser, Debug)]
struct Args {
    /// Perturbation used for the difference quotient
    #[arg(long, default_value_t = DEFAULT_EPS)]
    eps: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = DiffConfig::new(args.eps)?;

    let mut f = Node::new(Square);
    let x = Variable::scalar(2.0);
    let dy = config.diff(&mut f, &x);
    println!("f(x) = x^2 at x = 2.0: dy/dx = {}", dy);

    let x = Variable::scalar(0.5);
    let dy = config.diff(&mut composite, &x);
    println!("square(exp(square(x))) at x = 0.5: dy/dx = {}", dy);

    Ok(())
}
