//! Domain layer for GrantGuide SA
//!
//! Contains core value objects, entities, and the static grant reference
//! dataset. This layer has no I/O dependencies and defines the ubiquitous
//! language of the grant-information assistant.

pub mod entities;
pub mod errors;
pub mod reference;

pub use entities::*;
pub use errors::DomainError;
pub use reference::{GrantKind, GrantStatus, PaymentMethod, PaymentMonth, PaymentWindow};
