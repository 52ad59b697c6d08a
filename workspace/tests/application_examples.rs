use std::{ f64::consts::PI, fs, path::PathBuf };
use lib::{ inp, output };

fn example_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("application_examples").join(name)
}

fn example_dirs() -> Vec<PathBuf> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("application_examples");
    let mut dirs: Vec<PathBuf>
        = fs::read_dir(root).unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.join(inp::INP_FILE).is_file())
        .collect();
    dirs.sort();
    dirs
}

#[test]
fn all_examples_solve() {
    let dirs = example_dirs();
    assert_eq!(dirs.len(), 6);
    for dir in dirs {
        let params = inp::read_inp(&dir).unwrap();
        let out = params.solve().unwrap();
        assert_eq!(out.n_states(), params.last - params.first + 1);
        assert!(out.energies.iter().zip(out.energies.iter().skip(1)).all(|(a, b)| a <= b));
    }
}

#[test]
fn potentials_match_references() {
    for dir in example_dirs() {
        let params = inp::read_inp(&dir).unwrap();
        let potential = params.potential().unwrap().sample(&params.grid().unwrap());
        let reference = output::read_column(dir.join(output::POTENTIAL_REF)).unwrap();
        let dev = output::max_deviation(&potential, &reference).unwrap();
        assert!(dev < 1e-12, "{}: deviation {:e}", dir.display(), dev);
    }
}

#[test]
fn energies_match_references() {
    for dir in example_dirs() {
        let out = inp::read_inp(&dir).unwrap().solve().unwrap();
        let reference = output::read_column(dir.join(output::ENERGIES_REF)).unwrap();
        let dev = output::max_deviation(&out.energies, &reference).unwrap();
        assert!(dev < 1e-8, "{}: deviation {:e}", dir.display(), dev);
    }
}

#[test]
fn infinite_well_matches_discrete_spectrum() {
    let params = inp::read_inp(example_dir("infinite_potential_well")).unwrap();
    let out = params.solve().unwrap();
    let n = params.n_point as f64;
    let dx = out.get_dx();
    let width = params.x_max - params.x_min;
    for (k, e) in out.energies.iter().enumerate() {
        let q = (params.first + k) as f64;
        let discrete = (1.0 - (q * PI / (n + 1.0)).cos()) / (params.mass * dx.powi(2));
        assert!((e - discrete).abs() / discrete < 1e-8);
        let exact = (q * PI / width).powi(2) / (2.0 * params.mass);
        assert!((e - exact).abs() / exact < 5e-3);
    }
}

#[test]
fn harmonic_well_matches_oscillator() {
    // V = x² / 2 with m = 4, so ω = 1 / 2
    let out = inp::read_inp(example_dir("harmonic_potential_well")).unwrap()
        .solve().unwrap();
    for (n, e) in out.energies.iter().enumerate() {
        assert!((e - 0.5 * (n as f64 + 0.5)).abs() < 1e-4);
    }
}

#[test]
fn finite_well_states_are_bound_or_near_rim() {
    let out = inp::read_inp(example_dir("finite_potential_well")).unwrap()
        .solve().unwrap();
    assert!(out.energies[0] > -10.0 && out.energies[0] < 0.0);
    assert!(out.energies[1] < 0.0);
}

#[test]
fn double_wells_are_nearly_degenerate() {
    for name in ["double_linear", "double_cubic_spline"] {
        let out = inp::read_inp(example_dir(name)).unwrap().solve().unwrap();
        let splitting = out.energies[1] - out.energies[0];
        let gap = out.energies[2] - out.energies[1];
        assert!(splitting < 1e-2 * gap, "{}: {:e} vs {:e}", name, splitting, gap);
    }
}
