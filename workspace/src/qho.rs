use clap::Parser;
use sgl1d::{ InterpMethod, Params };

#[derive(Parser, Debug)]
#[command(author, version, about = "Harmonic oscillator spectrum for each interpolation method")]
struct Args {
    /// Particle mass
    #[arg(long, default_value_t = 4.0)]
    mass: f64,

    /// Half-width of the grid
    #[arg(long, default_value_t = 5.0)]
    half_width: f64,

    /// Number of grid points
    #[arg(long, default_value_t = 1999)]
    points: usize,

    /// Number of states
    #[arg(long, default_value_t = 5)]
    states: usize,

    /// Number of knots used for the linear and spline reconstructions
    #[arg(long, default_value_t = 21)]
    knots: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    // V = x² / 8 for any mass, so ω = 1 / (2 √m)
    let omega = (4.0 * args.mass).sqrt().recip();
    let v = |x: f64| 0.5 * args.mass * omega.powi(2) * x * x;
    let a = args.half_width;
    let dense_knots: Vec<f64>
        = (0..args.knots)
        .map(|k| -a + 2.0 * a * k as f64 / (args.knots - 1).max(1) as f64)
        .collect();

    for method in [InterpMethod::Polynomial, InterpMethod::Linear, InterpMethod::CubicSpline] {
        let x_decl
            = if method == InterpMethod::Polynomial {
                vec![-a, 0.0, a]
            } else {
                dense_knots.clone()
            };
        let y_decl: Vec<f64> = x_decl.iter().map(|x| v(*x)).collect();
        let params = Params {
            mass: args.mass,
            x_min: -a,
            x_max: a,
            n_point: args.points,
            first: 1,
            last: args.states,
            method,
            x_decl,
            y_decl,
        };
        let out = match params.solve() {
            Ok(out) => out,
            Err(err) => {
                eprintln!("{}: {}", method, err);
                continue;
            },
        };
        println!("{} ({} knots):", method, params.x_decl.len());
        for (n, (e, s)) in out.energies.iter().zip(&out.unc_x).enumerate() {
            let e0 = omega * (n as f64 + 0.5);
            let s0 = ((n as f64 + 0.5) / (args.mass * omega)).sqrt();
            println!(
                "  n = {:>2}  E = {:>16.12}  (exact {:>8.4}, err {:>9.2e})  \
                Δx = {:>10.6}  (exact {:>8.4})",
                n, e, e0, (e - e0).abs(), s, s0,
            );
        }
    }
    Ok(())
}
