// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error and warning types for the projection engine.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Rejected computations. Inputs are never clamped inside the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl EngineError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Non-fatal findings returned next to a computed result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    OwnershipSumMismatch { total: Decimal },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::OwnershipSumMismatch { total } => write!(
                f,
                "Ownership percentages must sum to 100% (currently {}%)",
                total.normalize()
            ),
        }
    }
}
