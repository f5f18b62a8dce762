//! Equation data model and text conversion.
//!
//! An [`Equation`] is the canonical form of one input line: its terms sorted
//! by variable symbol, the variable list sorted alphabetically, and the
//! trailing constant split off. Conversion from text goes through the pest
//! grammar in `equation.pest`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use pest::iterators::Pair;
use serde::Serialize;

use crate::{Rule, SolveError};

/// A single coefficient-variable pairing within an equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Term {
  pub coefficient: f64,
  pub variable: char,
}

/// One parsed equation. After [`Equation::normalized`], `variables` equals
/// the shared axis of the whole set and `terms[i].variable == variables[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equation {
  pub source: String,
  pub variables: Vec<char>,
  pub terms: Vec<Term>,
  pub constant: f64,
}

/// Sign token of a term or constant. A missing token reads as `Plus`.
#[derive(Debug, Clone, Copy)]
enum Sign {
  Plus,
  Minus,
}

impl Sign {
  fn apply(self, magnitude: f64) -> f64 {
    match self {
      Sign::Plus => magnitude,
      Sign::Minus => -magnitude,
    }
  }
}

impl FromStr for Equation {
  type Err = SolveError;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    let mut pairs = crate::parse(input).map_err(|e| SolveError::Format {
      text: input.to_string(),
      reason: e.to_string(),
    })?;
    let equation = pairs.next().ok_or(SolveError::EmptyInput)?;
    pair_to_equation(input, equation)
  }
}

/// Convert a parsed `Rule::Equation` pair into an [`Equation`] value.
///
/// The grammar pairs each coefficient with its variable in order of
/// appearance; the term list is sorted by variable symbol afterwards, so
/// downstream consumers never depend on appearance order.
pub fn pair_to_equation(
  source: &str,
  pair: Pair<Rule>,
) -> Result<Equation, SolveError> {
  let mut terms = Vec::new();
  let mut constant = 0.0;

  for node in pair.into_inner() {
    match node.as_rule() {
      Rule::Term => terms.push(pair_to_term(node, source)?),
      Rule::Constant => constant = signed_number(node, source)?,
      Rule::EOI => {}
      rule => {
        return Err(SolveError::Format {
          text: source.to_string(),
          reason: format!("unexpected {rule:?} node"),
        });
      }
    }
  }

  terms.sort_by_key(|term| term.variable);
  let variables = terms.iter().map(|term| term.variable).collect();

  Ok(Equation {
    source: source.to_string(),
    variables,
    terms,
    constant,
  })
}

/// A `Term` node holds an optional sign, an optional numeric run, and the
/// variable letter. A term without a numeric run has coefficient 1 or -1.
fn pair_to_term(pair: Pair<Rule>, source: &str) -> Result<Term, SolveError> {
  let mut sign = Sign::Plus;
  let mut magnitude = None;
  let mut variable = None;

  for node in pair.into_inner() {
    match node.as_rule() {
      Rule::Sign => sign = sign_of(&node),
      Rule::Number => magnitude = Some(number_value(node.as_str(), source)?),
      Rule::Variable => variable = node.as_str().chars().next(),
      _ => {}
    }
  }

  let variable = variable.ok_or_else(|| SolveError::Format {
    text: source.to_string(),
    reason: "term without a variable".to_string(),
  })?;

  Ok(Term {
    coefficient: sign.apply(magnitude.unwrap_or(1.0)),
    variable,
  })
}

fn signed_number(pair: Pair<Rule>, source: &str) -> Result<f64, SolveError> {
  let mut sign = Sign::Plus;
  let mut magnitude = 0.0;

  for node in pair.into_inner() {
    match node.as_rule() {
      Rule::Sign => sign = sign_of(&node),
      Rule::Number => magnitude = number_value(node.as_str(), source)?,
      _ => {}
    }
  }

  Ok(sign.apply(magnitude))
}

fn sign_of(pair: &Pair<Rule>) -> Sign {
  if pair.as_str() == "-" {
    Sign::Minus
  } else {
    Sign::Plus
  }
}

/// Numeric runs accept both `.` and `,` as decimal separator; commas are
/// normalized to dots before conversion.
fn number_value(token: &str, source: &str) -> Result<f64, SolveError> {
  token
    .replace(',', ".")
    .parse::<f64>()
    .map_err(|e| SolveError::Format {
      text: source.to_string(),
      reason: e.to_string(),
    })
}

impl Equation {
  /// Pad this equation onto the full variable axis: every axis variable
  /// absent here gains a `0.0` term, then terms and variables are re-sorted
  /// into the shared canonical order.
  ///
  /// Returns a new value; the receiver is never mutated. Normalizing an
  /// already-normalized equation returns an equal value.
  pub fn normalized(&self, axis: &[char]) -> Equation {
    if self.variables == axis {
      return self.clone();
    }

    let mut equation = self.clone();
    for &variable in axis {
      if !equation.variables.contains(&variable) {
        equation.terms.push(Term {
          coefficient: 0.0,
          variable,
        });
        equation.variables.push(variable);
      }
    }
    equation.terms.sort_by_key(|term| term.variable);
    equation.variables.sort_unstable();
    equation
  }
}

/// The shared variable axis of an equation set: the sorted union of all
/// variables that appear in any equation.
pub fn variable_axis(equations: &[Equation]) -> Vec<char> {
  let mut axis = BTreeSet::new();
  for equation in equations {
    axis.extend(equation.variables.iter().copied());
  }
  axis.into_iter().collect()
}

impl fmt::Display for Equation {
  /// Canonical re-rendering: terms in sorted order with explicit
  /// coefficients, then `=constant`. Parsing the rendered text yields the
  /// same terms and constant back.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, term) in self.terms.iter().enumerate() {
      let coefficient = term.coefficient.to_string();
      if i > 0 && !coefficient.starts_with('-') {
        f.write_str("+")?;
      }
      write!(f, "{}{}", coefficient, term.variable)?;
    }
    write!(f, "={}", self.constant)
  }
}
