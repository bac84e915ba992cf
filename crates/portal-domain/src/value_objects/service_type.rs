//! Business service-type registry
//!
//! Category labels attached to organization accounts. The label text is
//! what gets stored and shown, so it must never be reworded.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business service type of an organization account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Managed service provider
    #[serde(rename = "MSP/Service provider")]
    MspServiceProvider,
    /// Systems integrator
    #[serde(rename = "Systems Integrator (SI)")]
    SystemsIntegrator,
    /// Value added reseller
    #[serde(rename = "Value Added Reseller (VAR)")]
    ValueAddedReseller,
    /// Telecom operator
    #[serde(rename = "Telco")]
    Telco,
    /// Software-as-a-service vendor
    #[serde(rename = "SaaS provider")]
    SaasProvider,
}

impl ServiceType {
    /// Number of registered service types
    pub const COUNT: usize = 5;

    /// All service types in display order
    pub const fn all() -> [ServiceType; Self::COUNT] {
        [
            Self::MspServiceProvider,
            Self::SystemsIntegrator,
            Self::ValueAddedReseller,
            Self::Telco,
            Self::SaasProvider,
        ]
    }

    /// Label as stored and displayed
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MspServiceProvider => "MSP/Service provider",
            Self::SystemsIntegrator => "Systems Integrator (SI)",
            Self::ValueAddedReseller => "Value Added Reseller (VAR)",
            Self::Telco => "Telco",
            Self::SaasProvider => "SaaS provider",
        }
    }

    /// Alternate spelling without punctuation accepted from older clients
    const fn plain_alias(self) -> Option<&'static str> {
        match self {
            Self::MspServiceProvider => Some("MSP Service provider"),
            Self::SystemsIntegrator => Some("Systems Integrator"),
            Self::ValueAddedReseller => Some("Value Added Reseller"),
            Self::Telco | Self::SaasProvider => None,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = Error;

    /// Exact label match only; see [`normalize_service_type`] for lenient input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown service type: {s}")))
    }
}

/// Map user input onto a registered service type
///
/// Accepts an exact label or a punctuation-free alias
/// (e.g. `"Systems Integrator"`), ignoring surrounding whitespace.
/// Returns `None` for empty or unknown input.
pub fn normalize_service_type(input: &str) -> Option<ServiceType> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }
    ServiceType::all()
        .into_iter()
        .find(|t| t.as_str() == value || t.plain_alias() == Some(value))
}
