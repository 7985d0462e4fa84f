use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use eigenwell_core::{EquationProblem, Model};

use super::{
    Action, BracketError, Config, Error, Event, Precondition, Status, solve, solve_unobserved,
};

/// Model that squares its input.
struct SquareModel;

impl Model for SquareModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok(input * input)
    }
}

/// Equation problem that drives the model output to a target value.
struct TargetOutputProblem {
    target: f64,
}

impl EquationProblem<1> for TargetOutputProblem {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.target])
    }
}

#[test]
fn finds_square_root_within_tolerance() {
    let problem = TargetOutputProblem { target: 9.0 };

    let solution = solve_unobserved(&SquareModel, &problem, [0.0, 10.0], &Config::default())
        .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.bracket[1] - solution.bracket[0] <= 1e-12);
    assert!(solution.x >= 0.0 && solution.x <= 10.0);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-11);
    assert_relative_eq!(solution.snapshot.output, 9.0, epsilon = 1e-10);
}

#[test]
fn reports_left_endpoint_of_final_bracket() {
    let problem = TargetOutputProblem { target: 2.0 };
    let config = Config::new(1e-3).expect("valid tolerance");

    let solution =
        solve_unobserved(&SquareModel, &problem, [1.0, 2.0], &config).expect("should solve");

    assert_eq!(solution.x, solution.bracket[0]);
    assert!(solution.x <= 2.0_f64.sqrt());
    assert!(solution.bracket[1] >= 2.0_f64.sqrt());
    assert_relative_eq!(solution.residual, solution.x * solution.x - 2.0);
}

#[test]
fn bracket_width_halves_each_iteration() {
    let problem = TargetOutputProblem { target: 5.0 };

    let mut widths = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| {
        widths.push(event.width());
        None
    };

    let solution = solve(&SquareModel, &problem, [0.0, 8.0], &Config::default(), observer)
        .expect("should solve");

    assert_eq!(widths.len(), solution.iters);
    assert_relative_eq!(widths[0], 8.0);
    for pair in widths.windows(2) {
        assert_relative_eq!(pair[1], 0.5 * pair[0], max_relative = 1e-12);
    }
}

#[test]
fn iteration_count_matches_halvings() {
    let problem = TargetOutputProblem { target: 5.0 };
    let config = Config::new(1.0 / 1024.0).expect("valid tolerance");

    let solution =
        solve_unobserved(&SquareModel, &problem, [0.0, 8.0], &config).expect("should solve");

    // 8 / 2^13 = 1/1024
    assert_eq!(solution.iters, 13);
}

#[test]
fn observer_can_stop_iteration() {
    let problem = TargetOutputProblem { target: 9.0 };

    let mut calls = 0usize;
    let observer = |event: &Event<'_, f64, f64>| {
        calls += 1;
        (event.iter >= 3).then_some(Action::StopEarly)
    };

    let solution = solve(&SquareModel, &problem, [0.0, 10.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(calls, 3);
}

#[test]
fn normalizes_reversed_bracket() {
    let problem = TargetOutputProblem { target: 36.0 };

    let solution = solve_unobserved(&SquareModel, &problem, [10.0, 0.0], &Config::default())
        .expect("should solve with reversed bracket");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 6.0, epsilon = 1e-10);
}

#[test]
fn errors_on_zero_width_bracket() {
    let problem = TargetOutputProblem { target: 25.0 };

    let result = solve_unobserved(&SquareModel, &problem, [5.0, 5.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::ZeroWidth { .. }))
    ));
}

#[test]
fn errors_on_non_finite_bracket() {
    let problem = TargetOutputProblem { target: 67.0 };

    let result = solve_unobserved(&SquareModel, &problem, [f64::NAN, 10.0], &Config::default());
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NonFinite { .. }))
    ));

    let result = solve_unobserved(
        &SquareModel,
        &problem,
        [0.0, f64::INFINITY],
        &Config::default(),
    );
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NonFinite { .. }))
    ));
}

#[test]
fn errors_on_no_sign_change() {
    let problem = TargetOutputProblem { target: 9.0 };

    // Both endpoints are above the target.
    let result = solve_unobserved(&SquareModel, &problem, [5.0, 10.0], &Config::default());

    let Err(Error::InvalidBracket(BracketError::NoSignChange {
        left_residual,
        right_residual,
        ..
    })) = result
    else {
        panic!("expected a sign-change error, got {result:?}");
    };
    assert_relative_eq!(left_residual, 16.0);
    assert_relative_eq!(right_residual, 91.0);
}

/// Model whose output is `1e-200 · (x - offset)`.
struct Tiny {
    offset: f64,
}

impl Model for Tiny {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok(1e-200 * (input - self.offset))
    }
}

#[test]
fn tiny_residuals_without_sign_change_are_rejected() {
    let model = Tiny { offset: -10.0 };
    let problem = TargetOutputProblem { target: 0.0 };

    let result = solve_unobserved(&model, &problem, [1.0, 2.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
    ));
}

#[test]
fn tiny_residuals_still_bisect() {
    let model = Tiny { offset: 1.5 };
    let problem = TargetOutputProblem { target: 0.0 };
    let config = Config::new(1e-9).expect("valid tolerance");

    let solution = solve_unobserved(&model, &problem, [1.0, 2.0], &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.5, epsilon = 1e-8);
}

#[test]
fn assumed_bracket_skips_sign_check() {
    let problem = TargetOutputProblem { target: 9.0 };
    let config = Config::default().with_precondition(Precondition::Assume);

    // Without a root inside, the bracket collapses onto the right endpoint.
    let solution =
        solve_unobserved(&SquareModel, &problem, [5.0, 10.0], &config).expect("no sign check");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 10.0, epsilon = 1e-11);
}

#[test]
fn errors_on_invalid_config() {
    let problem = TargetOutputProblem { target: 4.0 };

    for x_abs_tol in [0.0, -1.0, f64::NAN] {
        let config = Config {
            x_abs_tol,
            ..Config::default()
        };
        let result = solve_unobserved(&SquareModel, &problem, [0.0, 10.0], &config);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}

#[test]
fn stalls_when_tolerance_is_below_float_resolution() {
    let problem = TargetOutputProblem { target: 5.0 };
    let config = Config::new(1e-300).expect("tiny but positive");

    let solution =
        solve_unobserved(&SquareModel, &problem, [2.0, 3.0], &config).expect("should stop");

    assert_eq!(solution.status, Status::Stalled);
    let [left, right] = solution.bracket;
    assert!(right > left);
    assert_relative_eq!(solution.x, 5.0_f64.sqrt(), epsilon = 1e-15);
}

#[test]
fn endpoint_root_is_accepted() {
    let problem = TargetOutputProblem { target: 4.0 };

    let solution = solve_unobserved(&SquareModel, &problem, [2.0, 5.0], &Config::default())
        .expect("root on the left endpoint");

    // f(left) == 0, so every midpoint moves the right endpoint.
    assert_relative_eq!(solution.x, 2.0);
    assert_relative_eq!(solution.residual, 0.0);
}

/// Residual that is non-finite above a threshold.
struct Blowup;

impl Model for Blowup {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok(if *input > 4.0 { f64::INFINITY } else { input - 1.0 })
    }
}

#[test]
fn errors_on_non_finite_residual() {
    let problem = TargetOutputProblem { target: 0.0 };

    let result = solve_unobserved(&Blowup, &problem, [0.0, 5.0], &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteResidual { x, .. }) if x == 5.0));
}

#[derive(Debug, Error)]
#[error("model failed at x={0}")]
struct Failure(f64);

/// Model that fails for negative input.
struct FailsBelowZero;

impl Model for FailsBelowZero {
    type Input = f64;
    type Output = f64;
    type Error = Failure;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        if *input < 0.0 {
            Err(Failure(*input))
        } else {
            Ok(*input)
        }
    }
}

#[test]
fn model_failure_propagates() {
    let problem = TargetOutputProblem { target: 1.0 };

    let result = solve_unobserved(&FailsBelowZero, &problem, [-1.0, 3.0], &Config::default());

    assert!(matches!(result, Err(Error::Model(_))));
}
