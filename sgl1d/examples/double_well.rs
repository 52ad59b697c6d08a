use sgl1d::{ interp::InterpMethod, system::Params };

// tunneling splitting in a symmetric double well reconstructed from a handful
// of knots

fn main() {
    let x_decl: Vec<f64> = vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
    let y_decl: Vec<f64>
        = x_decl.iter()
        .map(|x: &f64| 0.5 * (x.powi(2) - 1.5_f64.powi(2)).powi(2))
        .collect();

    for method in [
        InterpMethod::Linear,
        InterpMethod::Polynomial,
        InterpMethod::CubicSpline,
    ] {
        let params = Params {
            mass: 1.0,
            x_min: -3.0,
            x_max: 3.0,
            n_point: 1201,
            first: 1,
            last: 4,
            method,
            x_decl: x_decl.clone(),
            y_decl: y_decl.clone(),
        };
        let out = match params.solve() {
            Ok(out) => out,
            Err(err) => {
                eprintln!("{}: {}", method, err);
                continue;
            },
        };
        println!("{}:", method);
        for (k, (e, xk)) in out.energies.iter().zip(&out.exp_x).enumerate() {
            println!("  E[{}] = {:+.6e}  <x> = {:+.3e}", k + 1, e, xk);
        }
        println!(
            "  splitting E[2] - E[1] = {:.6e}",
            out.energies[1] - out.energies[0],
        );
    }
}
