use std::cell::Cell;

use approx::assert_abs_diff_eq;

use super::{
    Config, ConfigError, Error, Event, Move, Status, minimize, minimize_unobserved,
    minimize_with_info,
};

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

fn rosenbrock(x: &[f64]) -> f64 {
    (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
}

#[test]
fn minimizes_sphere() {
    let solution =
        minimize_with_info(&sphere, &[5.0, 5.0, 5.0], &Config::default(), ()).expect("valid input");

    assert_eq!(solution.status, Status::Converged);
    for xi in &solution.x {
        assert_abs_diff_eq!(*xi, 0.0, epsilon = 1e-3);
    }
    assert_abs_diff_eq!(solution.objective, 0.0, epsilon = 1e-6);
}

#[test]
fn minimizes_rosenbrock_within_default_budget() {
    let solution =
        minimize_with_info(&rosenbrock, &[-1.2, 1.0], &Config::default(), ()).expect("valid input");

    assert!(solution.converged());
    assert!(solution.iters <= 400);
    assert!(solution.evals <= 400);
    assert_abs_diff_eq!(solution.x[0], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(solution.x[1], 1.0, epsilon = 2e-3);
    assert_abs_diff_eq!(solution.objective, 0.0, epsilon = 1e-6);
}

#[test]
fn minimize_returns_the_point() {
    let x = minimize_unobserved(&rosenbrock, &[-1.2, 1.0], &Config::default())
        .expect("should converge");

    assert_eq!(x.len(), 2);
    assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-3);
}

#[test]
fn reported_evaluations_match_actual_calls() {
    let calls = Cell::new(0);
    let counted_sphere = |x: &[f64]| {
        calls.set(calls.get() + 1);
        sphere(x)
    };
    let solution = minimize_with_info(&counted_sphere, &[5.0, 5.0, 5.0], &Config::default(), ())
        .expect("valid input");
    assert_eq!(solution.evals, calls.get());

    calls.set(0);
    let counted_rosenbrock = |x: &[f64]| {
        calls.set(calls.get() + 1);
        rosenbrock(x)
    };
    let solution =
        minimize_with_info(&counted_rosenbrock, &[-1.2, 1.0], &Config::default(), ())
            .expect("valid input");
    assert_eq!(solution.evals, calls.get());
}

#[test]
fn runs_are_deterministic() {
    let config = Config::default();
    let first = minimize_with_info(&rosenbrock, &[-1.2, 1.0], &config, ()).unwrap();
    let second = minimize_with_info(&rosenbrock, &[-1.2, 1.0], &config, ()).unwrap();

    assert_eq!(first.iters, second.iters);
    assert_eq!(first.evals, second.evals);
    assert_eq!(first.objective.to_bits(), second.objective.to_bits());
    assert_eq!(first, second);
}

#[test]
fn observer_sees_each_iteration_and_stops_seeing_at_convergence() {
    let mut iters = Vec::new();
    let mut last_best = Vec::new();
    let observer = |event: &Event<'_>| {
        iters.push(event.iter);
        last_best = event.best.to_vec();
        None
    };

    let solution = minimize_with_info(&sphere, &[1.0, -2.0], &Config::default(), observer)
        .expect("valid input");

    assert!(solution.converged());
    assert_eq!(iters, (0..=solution.iters).collect::<Vec<_>>());
    assert_eq!(last_best, solution.x);
}

#[test]
fn events_report_the_move_that_produced_them() {
    let mut moves = Vec::new();
    let observer = |event: &Event<'_>| {
        moves.push(event.last_move);
        None
    };

    let solution =
        minimize_with_info(&sphere, &[5.0, 5.0, 5.0], &Config::default(), observer).unwrap();

    assert_eq!(moves.len(), solution.iters + 1);
    assert_eq!(moves[0], None);
    assert!(moves[1..].iter().all(Option::is_some));

    // From `[5, 5, 5]` the reflected point (~75.95) misses the best (75) but
    // beats the second worst (~77.56).
    assert_eq!(moves[1], Some(Move::Reflect));
}

#[test]
fn already_converged_start_takes_no_steps() {
    let flat = |_: &[f64]| 1.0;
    let config = Config {
        simplex_tol: 1e-3,
        ..Config::default()
    };

    let solution = minimize_with_info(&flat, &[0.0, 0.0], &config, ()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.evals, 3);
    assert_eq!(solution.x, vec![0.0, 0.0]);
}

#[test]
fn zero_iteration_budget_stops_on_first_check() {
    let config = Config {
        max_iters: Some(0),
        ..Config::default()
    };

    let solution = minimize_with_info(&sphere, &[5.0, 5.0], &config, ()).unwrap();
    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.evals, 3);

    // Tolerances already met still count as converged.
    let flat = |_: &[f64]| 0.0;
    let config = Config {
        max_iters: Some(0),
        simplex_tol: 1.0,
        ..Config::default()
    };
    let solution = minimize_with_info(&flat, &[5.0, 5.0], &config, ()).unwrap();
    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
}

#[test]
fn iteration_budget_is_inclusive() {
    let config = Config {
        max_iters: Some(5),
        ..Config::default()
    };

    let solution = minimize_with_info(&rosenbrock, &[-1.2, 1.0], &config, ()).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 6);
}

#[test]
fn evaluation_budget_overshoots_by_at_most_one_step() {
    let n = 3;
    let max_evals = 20;
    let config = Config {
        max_evals: Some(max_evals),
        ..Config::default()
    };

    let solution = minimize_with_info(&rosenbrock_3d, &[-1.2, 1.0, 0.5], &config, ()).unwrap();

    assert_eq!(solution.status, Status::MaxEvals);
    assert!(solution.evals > max_evals);
    // A shrink is the most expensive step: reflection, contraction, n vertices.
    assert!(solution.evals <= max_evals + n + 2);
}

fn rosenbrock_3d(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| (1.0 - w[0]).powi(2) + 100.0 * (w[1] - w[0] * w[0]).powi(2))
        .sum()
}

#[test]
fn unconverged_minimize_reports_diagnostics() {
    let config = Config {
        max_iters: Some(3),
        ..Config::default()
    };

    let err = minimize_unobserved(&rosenbrock, &[-1.2, 1.0], &config).unwrap_err();

    let solution = match err {
        Error::NotConverged(solution) => solution,
        other => panic!("expected NotConverged, got {other:?}"),
    };
    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 4);
    assert_eq!(solution.x.len(), 2);
    assert!(solution.evals >= 3 + 4);
    assert_abs_diff_eq!(solution.objective, rosenbrock(&solution.x));
}

#[test]
fn info_form_returns_unconverged_solutions() {
    let config = Config {
        max_evals: Some(10),
        ..Config::default()
    };

    let solution = minimize_with_info(&rosenbrock, &[-1.2, 1.0], &config, ()).unwrap();

    assert!(!solution.converged());
    assert_eq!(solution.status, Status::MaxEvals);
}

#[test]
fn fixed_coefficients_also_converge() {
    let config = Config {
        adaptive: false,
        ..Config::default()
    };

    let solution = minimize_with_info(&sphere, &[1.0, 2.0, 3.0], &config, ()).unwrap();

    assert!(solution.converged());
    assert_abs_diff_eq!(solution.objective, 0.0, epsilon = 1e-6);
}

#[test]
fn rejects_invalid_starting_points() {
    let empty: [f64; 0] = [];
    assert!(matches!(
        minimize_unobserved(&sphere, &empty, &Config::default()),
        Err(Error::EmptyStart)
    ));

    assert!(matches!(
        minimize_unobserved(&sphere, &[1.0, f64::NAN], &Config::default()),
        Err(Error::NonFiniteStart { index: 1, .. })
    ));
}

#[test]
fn rejects_invalid_config() {
    let config = Config {
        fn_tol: -1.0,
        ..Config::default()
    };

    let result = minimize(&sphere, &[1.0], &config, ());

    assert!(matches!(result, Err(Error::Config(ConfigError::FnTol))));
}
