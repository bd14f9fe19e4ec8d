//! Basis functions: Bernstein polynomials for Bezier curves and the
//! Cox-de Boor recursion over a knot vector for B-splines.

pub mod bernstein;
pub mod knot;

pub use bernstein::{bernstein, binomial};
pub use knot::KnotVector;
