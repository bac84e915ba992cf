//! Domain layer constants
//!
//! Values here are shared verbatim with the web frontend and with records
//! persisted by the accounts backend. Changing them is a compatibility break.

use crate::value_objects::ServiceType;

// ============================================================================
// SERVICE TYPE REGISTRY
// ============================================================================

/// Business service-type labels, in display order.
///
/// Derived from [`ServiceType`] so there is exactly one definition.
pub const SERVICE_TYPES: [&str; ServiceType::COUNT] = [
    ServiceType::MspServiceProvider.as_str(),
    ServiceType::SystemsIntegrator.as_str(),
    ServiceType::ValueAddedReseller.as_str(),
    ServiceType::Telco.as_str(),
    ServiceType::SaasProvider.as_str(),
];

// ============================================================================
// PUBLIC META CONSTANTS
// ============================================================================

/// Resource path of the public meta document
pub const PUBLIC_META_PATH: &str = "/api/public/meta";

/// Time a fetched meta document stays fresh, in milliseconds
pub const META_CACHE_TTL_MS: u64 = 30_000;
