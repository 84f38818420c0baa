//! L-BFGS solver construction.
//!
//! Purpose
//! -------
//! Hide argmin's solver generics behind two small builders, one per line
//! search. Each applies the crate-level options (gradient tolerance,
//! history size) and returns a solver ready to hand to
//! [`run_lbfgs`](crate::optimization::loglik_optimizer::run::run_lbfgs).
//!
//! Key behaviors
//! -------------
//! - Pair L-BFGS with the Hager-Zhang or More-Thuente line search using
//!   the aliases in [`types`](crate::optimization::loglik_optimizer::types).
//! - Use `opts.lbfgs_mem` for the history size, or
//!   [`DEFAULT_LBFGS_MEM`] when unset.
//! - Wire `opts.tols.tol_grad` into the solver; `max_iter` and
//!   `target_cost` are executor-state concerns and stay with the runner.
//!
//! Invariants & assumptions
//! ------------------------
//! - Tolerances were validated at [`Tolerances`]
//!   construction; a rejection out of argmin's `with_tolerance_grad` is
//!   still surfaced as an `OptError` rather than unwrapped.
//!
//! Testing notes
//! -------------
//! - Tests cover construction under both line searches, explicit and
//!   default memory, and tolerance application with and without a
//!   configured `tol_grad`.
//!
//! [`Tolerances`]: crate::optimization::loglik_optimizer::traits::Tolerances
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::MLEOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Theta,
        },
    },
};

/// Build an L-BFGS solver with the Hager-Zhang line search.
///
/// Consults `opts.lbfgs_mem` (falling back to [`DEFAULT_LBFGS_MEM`]) and
/// `opts.tols.tol_grad`; the initial iterate, iteration cap, and target
/// objective are applied later by the runner.
///
/// # Errors
/// - `OptError` if argmin rejects the gradient tolerance.
pub fn build_optimizer_hager_zhang(opts: &MLEOptions) -> OptResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Build an L-BFGS solver with the More-Thuente line search.
///
/// Identical wiring to [`build_optimizer_hager_zhang`] apart from the
/// line search.
///
/// # Errors
/// - `OptError` if argmin rejects the gradient tolerance.
pub fn build_optimizer_more_thuente(opts: &MLEOptions) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply the optional gradient tolerance to a solver, generically over
/// the line-search type so both builders share the wiring.
///
/// When `tol_grad` is `None` the solver keeps argmin's default; nothing
/// else on the solver is touched.
///
/// # Errors
/// - `OptError` if `with_tolerance_grad` rejects the value.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &MLEOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    Ok(solver)
}
