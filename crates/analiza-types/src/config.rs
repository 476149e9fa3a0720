// ─────────────────────────────────────────────────────────────────────
// Analiza Numerics — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LINEAR_SAFETY_CAP, DEFAULT_LINEAR_TOLERANCE, DEFAULT_ROOT_EPSILON,
    DEFAULT_ROOT_MAX_ITER,
};
use crate::error::{ensure_positive_tolerance, NumericError, NumericResult};

/// Top-level solver configuration.
/// Every field is optional in JSON; missing values take the library defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericsConfig {
    #[serde(default)]
    pub roots: RootConfig,
    #[serde(default)]
    pub linear: IterativeConfig,
}

/// Stopping rule shared by bisection, Newton-Raphson and secant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootConfig {
    #[serde(default = "default_root_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_root_max_iter")]
    pub max_iter: usize,
}

/// Stopping rule for Jacobi and Gauss-Seidel.
///
/// `max_iterations: None` removes the safety cap; a divergent or oscillating
/// system then never returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterativeConfig {
    #[serde(default = "default_linear_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_linear_cap")]
    pub max_iterations: Option<usize>,
}

fn default_root_epsilon() -> f64 {
    DEFAULT_ROOT_EPSILON
}
fn default_root_max_iter() -> usize {
    DEFAULT_ROOT_MAX_ITER
}
fn default_linear_tolerance() -> f64 {
    DEFAULT_LINEAR_TOLERANCE
}
fn default_linear_cap() -> Option<usize> {
    Some(DEFAULT_LINEAR_SAFETY_CAP)
}

impl Default for RootConfig {
    fn default() -> Self {
        RootConfig {
            epsilon: default_root_epsilon(),
            max_iter: default_root_max_iter(),
        }
    }
}

impl Default for IterativeConfig {
    fn default() -> Self {
        IterativeConfig {
            tolerance: default_linear_tolerance(),
            max_iterations: default_linear_cap(),
        }
    }
}

impl RootConfig {
    pub fn validate(&self) -> NumericResult<()> {
        ensure_positive_tolerance("epsilon", self.epsilon)?;
        if self.max_iter == 0 {
            return Err(NumericError::InvalidParameter(
                "max_iter must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

impl IterativeConfig {
    /// Config with the given tolerance and the default safety cap.
    pub fn with_tolerance(tolerance: f64) -> Self {
        IterativeConfig {
            tolerance,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> NumericResult<()> {
        ensure_positive_tolerance("tolerance", self.tolerance)?;
        if self.max_iterations == Some(0) {
            return Err(NumericError::InvalidParameter(
                "max_iterations must be a positive integer when set".to_string(),
            ));
        }
        Ok(())
    }
}

impl NumericsConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> NumericResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> NumericResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NumericResult<()> {
        self.roots.validate()?;
        self.linear.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_match_library_constants() {
        let cfg = NumericsConfig::default();
        assert!((cfg.roots.epsilon - 1e-4).abs() < 1e-15);
        assert_eq!(cfg.roots.max_iter, 100);
        assert!((cfg.linear.tolerance - 1e-5).abs() < 1e-15);
        assert_eq!(cfg.linear.max_iterations, Some(100_000));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = NumericsConfig::from_json_str(r#"{"roots": {"epsilon": 1e-8}}"#).unwrap();
        assert!((cfg.roots.epsilon - 1e-8).abs() < 1e-20);
        assert_eq!(cfg.roots.max_iter, 100);
        assert_eq!(cfg.linear, IterativeConfig::default());
    }

    #[test]
    fn test_unbounded_linear_cap() {
        let cfg =
            NumericsConfig::from_json_str(r#"{"linear": {"tolerance": 1e-6, "max_iterations": null}}"#)
                .unwrap();
        assert_eq!(cfg.linear.max_iterations, None);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let zero_eps = NumericsConfig::from_json_str(r#"{"roots": {"epsilon": 0.0}}"#);
        assert!(matches!(zero_eps, Err(NumericError::InvalidParameter(_))));

        let zero_iter = NumericsConfig::from_json_str(r#"{"roots": {"max_iter": 0}}"#);
        assert!(matches!(zero_iter, Err(NumericError::InvalidParameter(_))));

        let zero_cap = NumericsConfig::from_json_str(r#"{"linear": {"max_iterations": 0}}"#);
        assert!(matches!(zero_cap, Err(NumericError::InvalidParameter(_))));

        let malformed = NumericsConfig::from_json_str(r#"{"roots": "#);
        assert!(matches!(malformed, Err(NumericError::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "analiza_config_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"linear": {"tolerance": 1e-9}}"#).unwrap();
        let cfg = NumericsConfig::from_file(&path.to_string_lossy()).unwrap();
        assert!((cfg.linear.tolerance - 1e-9).abs() < 1e-20);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("does_not_exist.json");
        let result = NumericsConfig::from_file(&path.to_string_lossy());
        assert!(matches!(result, Err(NumericError::Io(_))));
    }
}
