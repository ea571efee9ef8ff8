//! Public types for the settings container
//!
//! This module contains the value types stored by the well-known settings and
//! the shared error type.

mod capabilities;
mod error;
mod marker;
pub mod scope;

pub use capabilities::RuntimeCapabilities;
pub use error::{Result, SettingsError};
pub use marker::{Inject, MarkerType, Obsolete};
pub use scope::{ActivationContext, ScopeCallback, ScopeKey, StandardScope};
