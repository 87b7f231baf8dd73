//! Account standing: the closed set of states a client account can be in,
//! plus the policy for mapping wire labels onto it.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Account standing of a client.
///
/// Each named variant has a unique, stable wire label (see [`AccountType::as_label`]).
/// `Unknown` is the catch-all a lenient decode policy may produce for labels
/// outside the named set; it has no wire label of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    #[serde(rename = "Cancelada")]
    Cancelled,
    BlackList,
    #[serde(rename = "PlanoBasico")]
    BasicPlan,
    #[serde(rename = "ContaSalario")]
    SalaryAccount,
    Premium,
    #[serde(rename = "unknown")]
    Unknown,
}

impl AccountType {
    /// Stable wire label for this variant.
    pub fn as_label(self) -> &'static str {
        match self {
            AccountType::Cancelled => "Cancelada",
            AccountType::BlackList => "BlackList",
            AccountType::BasicPlan => "PlanoBasico",
            AccountType::SalaryAccount => "ContaSalario",
            AccountType::Premium => "Premium",
            AccountType::Unknown => "unknown",
        }
    }

    /// Case-sensitive lookup of a wire label.
    ///
    /// Total over the five named variants; anything else is `None` (never
    /// `Unknown` — producing a fallback is the caller's policy decision).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Cancelada" => Some(AccountType::Cancelled),
            "BlackList" => Some(AccountType::BlackList),
            "PlanoBasico" => Some(AccountType::BasicPlan),
            "ContaSalario" => Some(AccountType::SalaryAccount),
            "Premium" => Some(AccountType::Premium),
            _ => None,
        }
    }
}

impl core::fmt::Display for AccountType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// How to treat an account-type label that matches no named variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Unrecognized labels are an error.
    Strict,
    /// Unrecognized labels resolve to `fallback`.
    Lenient { fallback: AccountType },
}

impl LabelPolicy {
    /// Lenient with `Cancelled` as the fallback, matching the service's
    /// historical observable behavior.
    pub fn lenient_default() -> Self {
        LabelPolicy::Lenient {
            fallback: AccountType::Cancelled,
        }
    }

    /// Resolve a wire label under this policy.
    pub fn resolve(self, label: &str) -> DomainResult<AccountType> {
        match AccountType::from_label(label) {
            Some(t) => Ok(t),
            None => match self {
                LabelPolicy::Strict => Err(DomainError::unknown_label(label)),
                LabelPolicy::Lenient { fallback } => Ok(fallback),
            },
        }
    }
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self::lenient_default()
    }
}
