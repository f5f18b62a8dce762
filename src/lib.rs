//! Solves small systems of linear equations written as plain text.
//!
//! Input lines like `"-100x+50z-2.1y+55t=0"` are parsed into canonical term
//! lists, aligned onto a shared variable axis, assembled into a coefficient
//! matrix and constant vector, and solved one variable at a time with
//! Cramer's determinant-ratio rule.

use pest::Parser;
use pest::iterators::Pairs;
use pest_derive::Parser;
use serde::Serialize;
use thiserror::Error;

pub mod equation;
pub mod solver;

pub use equation::{Equation, Term, variable_axis};
pub use solver::{Assignment, Matrices, assemble, cramer_solve, is_unsolvable};

#[derive(Parser)]
#[grammar = "equation.pest"]
pub struct EquationParser;

impl EquationParser {
  pub fn parse_equation(
    input: &str,
  ) -> Result<Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
    Self::parse(Rule::Equation, input).map_err(Box::new)
  }
}

pub fn parse(
  input: &str,
) -> Result<Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  EquationParser::parse_equation(input)
}

#[derive(Error, Debug)]
pub enum SolveError {
  #[error("equation {text:?} is not in a recognized format: {reason}")]
  Format { text: String, reason: String },
  #[error("empty input")]
  EmptyInput,
  #[error(
    "{equations} equations with only {variables} unknowns cannot have a unique solution"
  )]
  Unsolvable { variables: usize, equations: usize },
  #[error("coefficient matrix is {rows}x{cols}, expected a square system")]
  NonSquare { rows: usize, cols: usize },
  #[error("main determinant is zero, the system has no unique solution")]
  Singular,
}

/// Everything the caller handed in, plus the intermediate representations
/// derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct SolveInput {
  pub equations_str: Vec<String>,
  pub equations_formatted: Vec<Equation>,
  pub matrices: Matrices,
}

/// Result of a [`solve`] call: full provenance plus the per-variable values
/// in variable-axis order.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionBundle {
  pub input: SolveInput,
  pub solution: Vec<Assignment>,
}

/// Run the full pipeline over a set of equation strings.
///
/// Parses every string, pads each equation onto the shared variable axis,
/// rejects sets that cannot have a unique solution, assembles the matrices,
/// and solves by determinant ratios. Fails fast with the first component's
/// error.
pub fn solve<S: AsRef<str>>(
  inputs: &[S],
) -> Result<SolutionBundle, SolveError> {
  if inputs.is_empty() {
    return Err(SolveError::EmptyInput);
  }

  let mut parsed = Vec::with_capacity(inputs.len());
  for input in inputs {
    parsed.push(input.as_ref().parse::<Equation>()?);
  }

  let axis = variable_axis(&parsed);
  let equations: Vec<Equation> = parsed
    .iter()
    .map(|equation| equation.normalized(&axis))
    .collect();

  if is_unsolvable(&axis, &equations) {
    return Err(SolveError::Unsolvable {
      variables: axis.len(),
      equations: equations.len(),
    });
  }

  let matrices = assemble(&equations)?;
  let solution = cramer_solve(&matrices)?;

  Ok(SolutionBundle {
    input: SolveInput {
      equations_str: inputs.iter().map(|s| s.as_ref().to_string()).collect(),
      equations_formatted: equations,
      matrices,
    },
    solution,
  })
}
