use approx::assert_relative_eq;
use simplex_solvers::optimization::nelder_mead::{self, Config, ConfigError, Error};

use integration_tests::test_functions::Rosenbrock;

#[test]
fn config_from_toml() {
    let config: Config = toml::from_str(
        r#"
        adaptive = false
        max_iters = 400
        simplex_tol = 1e-6
        fn_tol = 1e-8
        "#,
    )
    .unwrap();

    assert!(!config.adaptive);
    assert_eq!(config.max_iters, Some(400));
    assert_eq!(config.max_evals, None);
    assert_relative_eq!(config.zero_delta, Config::default().zero_delta);

    let solution =
        nelder_mead::minimize_with_info(&Rosenbrock::default(), &[-1.2, 1.0], &config, ())
            .unwrap();
    assert!(solution.converged());
    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-3);
    assert_relative_eq!(solution.x[1], 1.0, epsilon = 1e-3);
}

#[test]
fn config_from_json_with_overrides() {
    let config: Config = serde_json::from_str(r#"{ "alpha": 1.5, "gamma": 0.25 }"#).unwrap();
    let coefficients = config.coefficients(2);

    assert_relative_eq!(coefficients.alpha, 1.5);
    assert_relative_eq!(coefficients.beta, 2.0);
    assert_relative_eq!(coefficients.gamma, 0.25);
    assert_relative_eq!(coefficients.sigma, 0.5);
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<Config>("tolerance = 1e-3").is_err());
    assert!(serde_json::from_str::<Config>(r#"{ "maxiter": 10 }"#).is_err());
}

#[test]
fn deserialized_config_is_still_validated() {
    let config: Config = toml::from_str("sigma = 1.5").unwrap();

    let err = nelder_mead::minimize_unobserved(&Rosenbrock::default(), &[0.0, 0.0], &config)
        .unwrap_err();

    assert!(matches!(err, Error::Config(ConfigError::Sigma)));
}
