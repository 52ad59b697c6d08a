//! Reconstruction of a continuous potential from a small set of knots.
//!
//! A [`Potential`] is built once from knot coordinates and an
//! [`InterpMethod`], and can then be evaluated anywhere:
//!
//! ```
//! use ndarray as nd;
//! use sgl1d::interp::{ InterpMethod, Potential };
//!
//! let x = nd::array![-1.0, 0.0, 1.0];
//! let y = nd::array![0.5, 0.0, 0.5];
//! let v = Potential::new(&x, &y, InterpMethod::Polynomial).unwrap();
//! assert!((v.eval(0.5) - 0.125).abs() < 1e-14);
//! assert!((v.eval(2.0) - 2.0).abs() < 1e-14);
//! ```
//!
//! All methods pass through the knots exactly (up to rounding). Behavior
//! outside of the knot domain, as given by [`Potential::domain`], depends on
//! the method:
//! - [`Linear`][InterpMethod::Linear] continues the nearest end segment;
//! - [`Polynomial`][InterpMethod::Polynomial] evaluates the global polynomial,
//!   which can diverge quickly;
//! - [`CubicSpline`][InterpMethod::CubicSpline] continues the nearest end
//!   cubic piece.

use std::{ fmt, str::FromStr };
use ndarray as nd;
use num_traits::Num;
use crate::{
    error::{ ConfigError, LengthError },
    grid::Grid,
};

pub type ConfigResult<T> = Result<T, ConfigError>;

// past this many knots, a global polynomial is almost certainly oscillating
const POLY_WARN_KNOTS: usize = 10;

/// Interpolation method used to reconstruct a potential from its knots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InterpMethod {
    /// Piecewise-linear interpolation between neighboring knots.
    Linear,
    /// A single interpolating polynomial of degree `n - 1` through all `n`
    /// knots, evaluated in Lagrange form.
    Polynomial,
    /// Natural cubic spline (vanishing second derivative at the end knots).
    CubicSpline,
}

impl InterpMethod {
    /// Minimum number of knots required by the method.
    pub fn min_knots(self) -> usize {
        match self {
            Self::Linear => 2,
            Self::Polynomial => 2,
            Self::CubicSpline => 4,
        }
    }
}

impl fmt::Display for InterpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Polynomial => write!(f, "polynomial"),
            Self::CubicSpline => write!(f, "cspline"),
        }
    }
}

impl FromStr for InterpMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "polynomial" | "poly" => Ok(Self::Polynomial),
            "cspline" | "cubic_spline" | "spline" => Ok(Self::CubicSpline),
            _ => Err(ConfigError::UnknownMethod(s.to_string())),
        }
    }
}

/// Compute the value of a sampled function via a Lagrange polynomial.
///
/// *Panics if `data_y` is shorter than `data_x`*.
pub fn lagrange<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
    x: A,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Num + Copy
{
    data_x.iter().enumerate()
        .map(|(j, xj)| {
            let xj = *xj;
            let inner
                = data_x.iter().enumerate()
                .filter(|(m, _)| *m != j)
                .map(|(_, xm)| (x - *xm) / (xj - *xm))
                .fold(A::one(), A::mul);
            data_y[j] * inner
        })
        .fold(A::zero(), A::add)
}

// index `i` of the segment [x[i], x[i + 1]] to use for `x`; clamped to the end
// segments outside of the knot domain
fn find_interval(xs: &nd::Array1<f64>, x: f64) -> usize {
    let n = xs.len();
    if x <= xs[0] { return 0; }
    if x >= xs[n - 1] { return n - 2; }
    let mut lo: usize = 0;
    let mut hi: usize = n - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if xs[mid] <= x { lo = mid; } else { hi = mid; }
    }
    lo
}

// second derivatives of the natural cubic spline at each knot, via the Thomas
// algorithm on the interior knots
//
// requires at least 3 knots
fn natural_second_derivs(xs: &nd::Array1<f64>, ys: &nd::Array1<f64>)
    -> nd::Array1<f64>
{
    let n = xs.len();
    let h: nd::Array1<f64>
        = xs.iter().zip(xs.iter().skip(1))
        .map(|(xk, xkp1)| xkp1 - xk)
        .collect();
    let delta: nd::Array1<f64>
        = ys.iter().zip(ys.iter().skip(1)).zip(&h)
        .map(|((yk, ykp1), hk)| (ykp1 - yk) / hk)
        .collect();

    // row i (1 ≤ i ≤ n - 2):
    //   h[i-1] m[i-1] + 2 (h[i-1] + h[i]) m[i] + h[i] m[i+1]
    //     = 6 (delta[i] - delta[i-1])
    let mut m: nd::Array1<f64> = nd::Array1::zeros(n);
    let mut cp: nd::Array1<f64> = nd::Array1::zeros(n);
    let mut dp: nd::Array1<f64> = nd::Array1::zeros(n);
    for i in 1..n - 1 {
        let rhs = 6.0 * (delta[i] - delta[i - 1]);
        let (diag, rhs)
            = if i == 1 {
                (2.0 * (h[0] + h[1]), rhs)
            } else {
                (
                    2.0 * (h[i - 1] + h[i]) - h[i - 1] * cp[i - 1],
                    rhs - h[i - 1] * dp[i - 1],
                )
            };
        cp[i] = h[i] / diag;
        dp[i] = rhs / diag;
    }
    m[n - 2] = dp[n - 2];
    for i in (1..n - 2).rev() {
        m[i] = dp[i] - cp[i] * m[i + 1];
    }
    m
}

#[derive(Clone, Debug)]
enum Kind {
    Linear,
    Polynomial,
    // per-segment coefficients [a, b, c, d] for
    //   S(x) = a + b (x - x[i]) + c (x - x[i])² + d (x - x[i])³
    CubicSpline { coeffs: nd::Array2<f64> },
}

/// A continuous potential reconstructed from knots.
///
/// Evaluation is pure, so a `Potential` can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct Potential {
    x: nd::Array1<f64>,
    y: nd::Array1<f64>,
    method: InterpMethod,
    kind: Kind,
}

impl Potential {
    /// Build a potential from knot coordinates `x` and values `y`.
    ///
    /// Fails if `x` and `y` have different lengths, if there are fewer knots
    /// than [`InterpMethod::min_knots`], if any knot is not finite, or if `x`
    /// is not strictly increasing.
    pub fn new<S, T>(
        x: &nd::ArrayBase<S, nd::Ix1>,
        y: &nd::ArrayBase<T, nd::Ix1>,
        method: InterpMethod,
    ) -> ConfigResult<Self>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        LengthError::check(x, y)?;
        let n = x.len();
        if n < method.min_knots() {
            return Err(ConfigError::TooFewKnots {
                method,
                min: method.min_knots(),
                got: n,
            });
        }
        if let Some(k)
            = x.iter().zip(y)
            .position(|(xk, yk)| !xk.is_finite() || !yk.is_finite())
        {
            return Err(ConfigError::NonFiniteKnot(k));
        }
        if let Some(k)
            = x.iter().zip(x.iter().skip(1))
            .position(|(xk, xkp1)| xkp1 <= xk)
        {
            return Err(ConfigError::KnotsNotIncreasing(k + 1));
        }

        let x = x.to_owned();
        let y = y.to_owned();
        let kind
            = match method {
                InterpMethod::Linear => Kind::Linear,
                InterpMethod::Polynomial => {
                    if n > POLY_WARN_KNOTS {
                        println!(
                            "interp::Potential::new: WARNING: interpolating \
                            {} knots with a single polynomial; expect strong \
                            oscillations between knots",
                            n,
                        );
                    }
                    Kind::Polynomial
                },
                InterpMethod::CubicSpline => {
                    let m = natural_second_derivs(&x, &y);
                    let mut coeffs: nd::Array2<f64>
                        = nd::Array2::zeros((n - 1, 4));
                    for (i, mut row) in coeffs.outer_iter_mut().enumerate() {
                        let h = x[i + 1] - x[i];
                        row[0] = y[i];
                        row[1] = (y[i + 1] - y[i]) / h
                            - h * (2.0 * m[i] + m[i + 1]) / 6.0;
                        row[2] = m[i] / 2.0;
                        row[3] = (m[i + 1] - m[i]) / (6.0 * h);
                    }
                    Kind::CubicSpline { coeffs }
                },
            };
        Ok(Self { x, y, method, kind })
    }

    /// Evaluate the potential at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match &self.kind {
            Kind::Linear => {
                let i = find_interval(&self.x, x);
                let t = (x - self.x[i]) / (self.x[i + 1] - self.x[i]);
                self.y[i] + t * (self.y[i + 1] - self.y[i])
            },
            Kind::Polynomial => lagrange(&self.x, &self.y, x),
            Kind::CubicSpline { coeffs } => {
                let i = find_interval(&self.x, x);
                let dx = x - self.x[i];
                let c = coeffs.row(i);
                c[0] + dx * (c[1] + dx * (c[2] + dx * c[3]))
            },
        }
    }

    /// Evaluate the potential at every point of a grid, giving the
    /// reconstructed potential curve.
    pub fn sample(&self, grid: &Grid) -> nd::Array1<f64> {
        grid.get_x().mapv(|xk| self.eval(xk))
    }

    /// Get the interpolation method.
    pub fn method(&self) -> InterpMethod { self.method }

    /// Get the range `(first knot, last knot)` over which the potential is
    /// interpolated rather than extrapolated.
    pub fn domain(&self) -> (f64, f64) { (self.x[0], self.x[self.x.len() - 1]) }

    /// Return `true` if `x` lies within [`Self::domain`].
    pub fn contains(&self, x: f64) -> bool {
        let (lo, hi) = self.domain();
        (lo..=hi).contains(&x)
    }

    /// Get a reference to the knot x-coordinates.
    pub fn get_knots_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get a reference to the knot values.
    pub fn get_knots_y(&self) -> &nd::Array1<f64> { &self.y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METHODS: [InterpMethod; 3] = [
        InterpMethod::Linear,
        InterpMethod::Polynomial,
        InterpMethod::CubicSpline,
    ];

    fn knots() -> (nd::Array1<f64>, nd::Array1<f64>) {
        (
            nd::array![-2.0, -0.5, 0.0, 1.25, 3.0],
            nd::array![4.0, -1.0, 0.3, 2.0, -7.5],
        )
    }

    #[test]
    fn reproduces_knots() {
        let (x, y) = knots();
        for method in METHODS {
            let v = Potential::new(&x, &y, method).unwrap();
            for (xk, yk) in x.iter().zip(&y) {
                assert!(
                    (v.eval(*xk) - yk).abs() < 1e-12,
                    "{method} misses knot ({xk}, {yk}): {}", v.eval(*xk),
                );
            }
        }
    }

    #[test]
    fn linear_between_knots() {
        let (x, y) = knots();
        let v = Potential::new(&x, &y, InterpMethod::Linear).unwrap();
        assert!((v.eval(-1.25) - 1.5).abs() < 1e-14);
        assert!((v.eval(-0.25) - (-0.35)).abs() < 1e-14);
        // end segment continues outside of the domain
        assert!((v.eval(-3.0) - (4.0 + 5.0 / 1.5)).abs() < 1e-12);
    }

    #[test]
    fn polynomial_recovers_cubic() {
        let f = |x: f64| 2.0 * x.powi(3) - x + 0.5;
        let x = nd::array![-1.0, 0.0, 1.0, 2.0];
        let y = x.mapv(f);
        let v = Potential::new(&x, &y, InterpMethod::Polynomial).unwrap();
        for xk in [-0.75, 0.3, 1.5, 1.9] {
            assert!((v.eval(xk) - f(xk)).abs() < 1e-12);
        }
    }

    #[test]
    fn spline_is_exact_for_lines() {
        let x = nd::array![0.0, 0.5, 2.0, 2.5, 4.0];
        let y = x.mapv(|xk| 3.0 * xk - 1.0);
        let v = Potential::new(&x, &y, InterpMethod::CubicSpline).unwrap();
        for xk in [0.1, 1.0, 2.2, 3.9] {
            assert!((v.eval(xk) - (3.0 * xk - 1.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn spline_is_smooth_at_interior_knots() {
        let (x, y) = knots();
        let v = Potential::new(&x, &y, InterpMethod::CubicSpline).unwrap();
        let eps = 1e-5;
        for &xk in x.iter().skip(1).take(x.len() - 2) {
            let left = (v.eval(xk) - v.eval(xk - eps)) / eps;
            let right = (v.eval(xk + eps) - v.eval(xk)) / eps;
            assert!((left - right).abs() < 1e-3);
            let curv_l
                = (v.eval(xk) - 2.0 * v.eval(xk - eps) + v.eval(xk - 2.0 * eps))
                / eps.powi(2);
            let curv_r
                = (v.eval(xk + 2.0 * eps) - 2.0 * v.eval(xk + eps) + v.eval(xk))
                / eps.powi(2);
            assert!((curv_l - curv_r).abs() < 1e-1);
        }
    }

    #[test]
    fn spline_is_natural() {
        let (x, y) = knots();
        let m = natural_second_derivs(&x, &y);
        assert_eq!(m[0], 0.0);
        assert_eq!(m[x.len() - 1], 0.0);
    }

    #[test]
    fn four_knot_spline() {
        // the smallest spline: two interior second derivatives
        let x = nd::array![0.0, 1.0, 2.0, 3.0];
        let y = nd::array![1.0, -1.0, 2.0, 0.0];
        let m = natural_second_derivs(&x, &y);
        assert!((m - nd::array![0.0, 10.0, -10.0, 0.0]).iter().all(|d| d.abs() < 1e-12));

        let v = Potential::new(&x, &y, InterpMethod::CubicSpline).unwrap();
        for (xk, yk) in x.iter().zip(&y) {
            assert!((v.eval(*xk) - yk).abs() < 1e-12);
        }
        let Kind::CubicSpline { coeffs } = &v.kind else { panic!("not a spline") };
        // value, slope, and curvature agree across each interior knot
        for (c, cp1) in coeffs.outer_iter().zip(coeffs.outer_iter().skip(1)) {
            let val = c[0] + c[1] + c[2] + c[3];
            let slope = c[1] + 2.0 * c[2] + 3.0 * c[3];
            let curv = 2.0 * c[2] + 6.0 * c[3];
            assert!((val - cp1[0]).abs() < 1e-12);
            assert!((slope - cp1[1]).abs() < 1e-12);
            assert!((curv - 2.0 * cp1[2]).abs() < 1e-12);
        }
    }

    #[test]
    fn potential_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() { }
        assert_send_sync::<Potential>();
        assert_send_sync::<InterpMethod>();

        let (x, y) = knots();
        let v = Potential::new(&x, &y, InterpMethod::CubicSpline).unwrap();
        let expected = v.eval(0.7);
        let from_thread
            = std::thread::scope(|s| s.spawn(|| v.eval(0.7)).join().unwrap());
        assert_eq!(from_thread, expected);
    }

    #[test]
    fn rejects_bad_knots() {
        let x = nd::array![0.0, 1.0, 1.0, 2.0];
        let y = nd::array![0.0, 1.0, 2.0, 3.0];
        assert!(matches!(
            Potential::new(&x, &y, InterpMethod::Linear),
            Err(ConfigError::KnotsNotIncreasing(2)),
        ));

        let x = nd::array![0.0, 1.0, 2.0];
        let y = nd::array![0.0, 1.0, 2.0];
        assert!(matches!(
            Potential::new(&x, &y, InterpMethod::CubicSpline),
            Err(ConfigError::TooFewKnots { min: 4, got: 3, .. }),
        ));

        let y = nd::array![0.0, 1.0];
        assert!(matches!(
            Potential::new(&x, &y, InterpMethod::Linear),
            Err(ConfigError::Length(LengthError(3, 2))),
        ));

        let y = nd::array![0.0, f64::NAN, 2.0];
        assert!(matches!(
            Potential::new(&x, &y, InterpMethod::Polynomial),
            Err(ConfigError::NonFiniteKnot(1)),
        ));
    }

    #[test]
    fn parses_method_names() {
        assert_eq!("linear".parse::<InterpMethod>().unwrap(), InterpMethod::Linear);
        assert_eq!("Polynomial".parse::<InterpMethod>().unwrap(), InterpMethod::Polynomial);
        assert_eq!("cspline".parse::<InterpMethod>().unwrap(), InterpMethod::CubicSpline);
        assert!("quadratic".parse::<InterpMethod>().is_err());
    }
}
