//! Shared numeric aliases and pre-wired solver types.
//!
//! Everything the optimizer passes around is expressed through these
//! aliases so the surrounding code never spells out `ndarray` or argmin
//! generics. `Theta` and `Grad` are dense `f64` vectors over the free
//! parameters; `Cost` is the scalar objective; the `Lbfgs*` aliases pin
//! each line search to the `(Theta, Grad, Cost)` triple the builders
//! construct against.
use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    quasinewton::LBFGS,
};
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector in unconstrained optimizer space.
pub type Theta = Array1<f64>;

/// Gradient vector, same length and layout as [`Theta`].
pub type Grad = Array1<f64>;

/// Scalar objective value; the cost side is `c(theta) = -l(theta)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver, keyed by
/// argmin's counter names (`"cost_count"`, `"gradient_count"`, ...).
pub type FnEvalMap = HashMap<String, u64>;

/// L-BFGS history size used when the options leave it unset.
pub const DEFAULT_LBFGS_MEM: usize = 7;

/// Hager-Zhang line search over this crate's numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;

/// More-Thuente line search over this crate's numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// L-BFGS wired to the Hager-Zhang line search.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Theta, Grad, Cost>;

/// L-BFGS wired to the More-Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Theta, Grad, Cost>;
