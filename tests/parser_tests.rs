use linsolve::parse;

#[cfg(test)]
mod tests {
  use linsolve::Rule;

  use super::*;

  #[test]
  fn test_parse_single_term() {
    let input = "2x=4";
    let pair = parse(input).unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Equation);
  }

  #[test]
  fn test_parse_multiple_terms() {
    let input = "-100x+50z-2.1y+55t=0";
    let pair = parse(input).unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Equation);
  }

  #[test]
  fn test_parse_implicit_coefficient() {
    let input = "x+y=2";
    let pair = parse(input).unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Equation);
  }

  #[test]
  fn test_parse_bare_minus_coefficient() {
    let input = "-x+y=0";
    let pair = parse(input).unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Equation);
  }

  #[test]
  fn test_parse_comma_decimal() {
    let input = "2,5x=5";
    let pair = parse(input).unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Equation);
  }

  #[test]
  fn test_parse_leading_dot_coefficient() {
    let input = ".5x=1";
    let pair = parse(input).unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Equation);
  }

  #[test]
  fn test_parse_zero_coefficient() {
    let input = "0t=0";
    let pair = parse(input).unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Equation);
  }

  #[test]
  fn test_parse_negative_constant() {
    let input = "x=-3";
    let pair = parse(input).unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Equation);
  }

  #[test]
  fn test_parse_constant_only() {
    let input = "=5";
    let pair = parse(input).unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Equation);
  }

  #[test]
  fn test_parse_spaces_between_tokens() {
    let input = "2x + 3y = 5";
    let pair = parse(input).unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Equation);
  }

  #[test]
  fn test_reject_double_sign() {
    assert!(parse("2x++3=5").is_err());
  }

  #[test]
  fn test_reject_missing_equals() {
    assert!(parse("2x+3y").is_err());
  }

  #[test]
  fn test_reject_terms_after_constant() {
    assert!(parse("2x=4+3y").is_err());
  }

  #[test]
  fn test_reject_multiple_equals() {
    assert!(parse("x=1=2").is_err());
  }

  #[test]
  fn test_reject_uppercase_variable() {
    assert!(parse("2X=4").is_err());
  }

  #[test]
  fn test_reject_unknown_character() {
    assert!(parse("2x*3y=5").is_err());
  }
}
