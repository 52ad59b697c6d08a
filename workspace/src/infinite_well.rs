use std::f64::consts::PI;
use clap::Parser;
use sgl1d::{ InterpMethod, Params };

#[derive(Parser, Debug)]
#[command(author, version, about = "Grid convergence of the infinite square well")]
struct Args {
    /// Particle mass
    #[arg(long, default_value_t = 2.0)]
    mass: f64,

    /// Well width
    #[arg(long, default_value_t = 4.0)]
    width: f64,

    /// Number of states to compare
    #[arg(long, default_value_t = 5)]
    states: usize,

    /// Comma-separated list of grid sizes
    #[arg(long, default_value = "100,200,400,800,1600")]
    points: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let half = args.width / 2.0;
    let exact = |n: usize| {
        (n as f64 * PI / args.width).powi(2) / (2.0 * args.mass)
    };

    println!("{:>6}  {:>4}  {:>18}  {:>18}  {:>10}", "N", "n", "E", "exact", "rel. err");
    for tok in args.points.split(',') {
        let n_point: usize = tok.trim().parse()?;
        let params = Params {
            mass: args.mass,
            x_min: -half,
            x_max: half,
            n_point,
            first: 1,
            last: args.states,
            method: InterpMethod::Linear,
            x_decl: vec![-half, half],
            y_decl: vec![0.0, 0.0],
        };
        let out = params.solve()?;
        for (k, e) in out.energies.iter().enumerate() {
            let e0 = exact(k + 1);
            println!(
                "{:>6}  {:>4}  {:>18.12}  {:>18.12}  {:>10.3e}",
                n_point, k + 1, e, e0, (e - e0).abs() / e0,
            );
        }
    }
    Ok(())
}
