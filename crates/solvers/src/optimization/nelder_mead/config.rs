use thiserror::Error;

use super::{coefficients::Coefficients, limits::Limits, simplex::Tolerances};

/// Configuration for the Nelder-Mead solver.
///
/// Every recognised option is a field; [`Config::default`] gives the standard
/// settings. Budgets left as `None` scale with the problem dimension `n`
/// (`200 * n` each).
///
/// With the `serde` feature, configs deserialize with missing fields taking
/// their defaults and unknown fields rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Config {
    /// Use dimension-dependent step coefficients instead of the fixed preset.
    pub adaptive: bool,

    /// Reflection coefficient override.
    pub alpha: Option<f64>,

    /// Expansion coefficient override.
    pub beta: Option<f64>,

    /// Contraction coefficient override.
    pub gamma: Option<f64>,

    /// Shrink coefficient override.
    pub sigma: Option<f64>,

    /// Maximum number of simplex steps.
    pub max_iters: Option<usize>,

    /// Maximum number of objective evaluations.
    pub max_evals: Option<usize>,

    /// Convergence tolerance on the simplex extent.
    pub simplex_tol: f64,

    /// Convergence tolerance on the spread of objective values.
    pub fn_tol: f64,

    /// Initial simplex offset for coordinates that are exactly zero.
    pub zero_delta: f64,

    /// Initial simplex relative offset for nonzero coordinates.
    pub nonzero_delta: f64,
}

/// Errors that can occur when validating a Nelder-Mead config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha must be finite and positive")]
    Alpha,

    #[error("beta must be finite and greater than one")]
    Beta,

    #[error("gamma must lie strictly between zero and one")]
    Gamma,

    #[error("sigma must lie strictly between zero and one")]
    Sigma,

    #[error("simplex_tol must be finite and non-negative")]
    SimplexTol,

    #[error("fn_tol must be finite and non-negative")]
    FnTol,

    #[error("zero_delta must be finite and nonzero")]
    ZeroDelta,

    #[error("nonzero_delta must be finite and nonzero")]
    NonzeroDelta,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adaptive: true,
            alpha: None,
            beta: None,
            gamma: None,
            sigma: None,
            max_iters: None,
            max_evals: None,
            simplex_tol: 1e-4,
            fn_tol: 1e-4,
            zero_delta: 0.000_25,
            nonzero_delta: 0.05,
        }
    }
}

/// Settings resolved from a [`Config`] for a problem of known dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Settings {
    pub(super) coefficients: Coefficients,
    pub(super) tolerances: Tolerances,
    pub(super) limits: Limits,
    pub(super) zero_delta: f64,
    pub(super) nonzero_delta: f64,
}

impl Config {
    /// Checks every option for a usable value.
    ///
    /// # Errors
    ///
    /// Returns the first invalid option found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_unit = |v: f64| v > 0.0 && v < 1.0;

        if self.alpha.is_some_and(|a| !a.is_finite() || a <= 0.0) {
            return Err(ConfigError::Alpha);
        }
        if self.beta.is_some_and(|b| !b.is_finite() || b <= 1.0) {
            return Err(ConfigError::Beta);
        }
        if self.gamma.is_some_and(|g| !in_unit(g)) {
            return Err(ConfigError::Gamma);
        }
        if self.sigma.is_some_and(|s| !in_unit(s)) {
            return Err(ConfigError::Sigma);
        }
        if !self.simplex_tol.is_finite() || self.simplex_tol < 0.0 {
            return Err(ConfigError::SimplexTol);
        }
        if !self.fn_tol.is_finite() || self.fn_tol < 0.0 {
            return Err(ConfigError::FnTol);
        }
        if !self.zero_delta.is_finite() || self.zero_delta == 0.0 {
            return Err(ConfigError::ZeroDelta);
        }
        if !self.nonzero_delta.is_finite() || self.nonzero_delta == 0.0 {
            return Err(ConfigError::NonzeroDelta);
        }
        Ok(())
    }

    /// Returns the step coefficients for dimension `n`, overrides applied.
    #[must_use]
    pub fn coefficients(&self, n: usize) -> Coefficients {
        let preset = if self.adaptive {
            Coefficients::adaptive(n)
        } else {
            Coefficients::FIXED
        };

        Coefficients {
            alpha: self.alpha.unwrap_or(preset.alpha),
            beta: self.beta.unwrap_or(preset.beta),
            gamma: self.gamma.unwrap_or(preset.gamma),
            sigma: self.sigma.unwrap_or(preset.sigma),
        }
    }

    /// Validates the config and resolves it for dimension `n`.
    pub(super) fn resolve(&self, n: usize) -> Result<Settings, ConfigError> {
        self.validate()?;

        let default_budget = 200 * n;
        Ok(Settings {
            coefficients: self.coefficients(n),
            tolerances: Tolerances {
                simplex: self.simplex_tol,
                value: self.fn_tol,
            },
            limits: Limits {
                max_iters: self.max_iters.unwrap_or(default_budget),
                max_evals: self.max_evals.unwrap_or(default_budget),
            },
            zero_delta: self.zero_delta,
            nonzero_delta: self.nonzero_delta,
        })
    }
}
