use std::path::PathBuf;
use clap::Parser;
use lib::{ inp, output };

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve the 1D time-independent Schrödinger equation")]
struct Args {
    /// Directory containing schrodinger.inp
    #[arg(long, short, default_value = ".")]
    input: PathBuf,

    /// Directory to write result tables to (defaults to the input directory)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Compare energies and potential against <input>/energies.ref and
    /// <input>/potential.ref where present
    #[arg(long)]
    check: bool,

    /// Maximum absolute deviation accepted by --check
    #[arg(long, default_value_t = 1e-6)]
    tol: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let params = inp::read_inp(&args.input)?;
    println!(
        "mass = {}; grid [{}, {}] with {} points; states {}..={}; {} interpolation \
        over {} knots",
        params.mass, params.x_min, params.x_max, params.n_point,
        params.first, params.last, params.method, params.x_decl.len(),
    );
    let out = params.solve()?;
    for (n, (e, (m, s))) in
        out.energies.iter().zip(out.exp_x.iter().zip(&out.unc_x)).enumerate()
    {
        println!(
            "{:>4}  E = {:>20.12e}  <x> = {:>12.6}  Δx = {:>12.6}",
            params.first + n, e, m, s,
        );
    }

    let outdir = args.output.unwrap_or_else(|| args.input.clone());
    output::write_output(&outdir, &out)?;
    println!("wrote results to {}", outdir.display());

    if args.check {
        let checks = [
            (output::ENERGIES_REF, &out.energies),
            (output::POTENTIAL_REF, &out.potential),
        ];
        for (name, computed) in checks {
            let ref_path = args.input.join(name);
            if !ref_path.is_file() {
                println!("no reference at {}; skipping", ref_path.display());
                continue;
            }
            let reference = output::read_column(&ref_path)?;
            let dev = output::max_deviation(computed, &reference)?;
            println!("max deviation from {}: {:.3e}", ref_path.display(), dev);
            if dev > args.tol {
                anyhow::bail!(
                    "{} deviates from reference by {:.3e} > {:.3e}",
                    name, dev, args.tol,
                );
            }
        }
    }
    Ok(())
}
