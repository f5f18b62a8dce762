//! Solvability check, matrix assembly, and the Cramer's-rule solver.
//!
//! Assembly is a pure reshape of normalized equations; determinants are
//! delegated to nalgebra.

use nalgebra::{DMatrix, DVector};
use serde::Serialize;

use crate::SolveError;
use crate::equation::Equation;

/// The matrix form of a normalized equation set: one coefficient row per
/// equation, columns in variable-axis order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrices {
  pub coefficients: Vec<Vec<f64>>,
  pub variables: Vec<char>,
  pub constants: Vec<f64>,
}

/// One solved variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assignment {
  pub variable: char,
  pub value: f64,
}

/// True when the set has more equations than distinct variables and so
/// cannot have a unique solution.
///
/// This is a necessary check, not a sufficient one: a square system can
/// still be singular, which [`cramer_solve`] reports. Sets with more
/// variables than equations pass this check and are rejected at assembly.
pub fn is_unsolvable(axis: &[char], equations: &[Equation]) -> bool {
  axis.len() < equations.len()
}

/// Project normalized equations into [`Matrices`].
///
/// Every equation must already span the identical variable axis. Sets whose
/// matrix would not be square, including under-determined sets with more
/// variables than equations, fail with [`SolveError::NonSquare`].
pub fn assemble(equations: &[Equation]) -> Result<Matrices, SolveError> {
  let variables = match equations.first() {
    Some(equation) => equation.variables.clone(),
    None => return Err(SolveError::EmptyInput),
  };

  if variables.len() != equations.len() {
    return Err(SolveError::NonSquare {
      rows: equations.len(),
      cols: variables.len(),
    });
  }

  let mut coefficients = Vec::with_capacity(equations.len());
  let mut constants = Vec::with_capacity(equations.len());
  for equation in equations {
    if equation.terms.len() != variables.len() {
      return Err(SolveError::NonSquare {
        rows: equations.len(),
        cols: equation.terms.len(),
      });
    }
    coefficients
      .push(equation.terms.iter().map(|term| term.coefficient).collect());
    constants.push(equation.constant);
  }

  Ok(Matrices {
    coefficients,
    variables,
    constants,
  })
}

/// Solve the assembled system by Cramer's rule: each variable's value is
/// the determinant of the coefficient matrix with that variable's column
/// replaced by the constants, divided by the main determinant.
///
/// The main determinant is compared against zero exactly. Near-singular
/// systems therefore solve to large finite values instead of failing with
/// [`SolveError::Singular`]; an epsilon tolerance would change that
/// behavior and is not applied.
pub fn cramer_solve(
  matrices: &Matrices,
) -> Result<Vec<Assignment>, SolveError> {
  let n = matrices.variables.len();
  let coefficients = DMatrix::from_row_iterator(
    n,
    n,
    matrices.coefficients.iter().flatten().copied(),
  );
  let constants = DVector::from_column_slice(&matrices.constants);

  let main_determinant = coefficients.determinant();
  if main_determinant == 0.0 {
    return Err(SolveError::Singular);
  }

  let mut solution = Vec::with_capacity(n);
  for (i, &variable) in matrices.variables.iter().enumerate() {
    let mut substituted = coefficients.clone();
    substituted.set_column(i, &constants);
    solution.push(Assignment {
      variable,
      value: substituted.determinant() / main_determinant,
    });
  }

  Ok(solution)
}
