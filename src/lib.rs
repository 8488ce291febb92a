//! # Creational Design Patterns
//!
//! Runnable demonstrations of the four classic creational patterns, each a
//! self-contained module with its own binary:
//!
//! ## Pattern 1: Abstract Factory
//! - Per-language film factories producing matched audio/subtitle pairs
//! - `CinemaRentalSystem` as a registry of factories
//!
//! ## Pattern 2: Builder
//! - Consuming fluent builder for a `Computer` configuration
//!
//! ## Pattern 3: Prototype
//! - `Shape` trait objects cloned through `clone_box`
//! - `ShapeManager` as a named prototype registry
//!
//! ## Pattern 4: Singleton
//! - `Building` and `Elevator` constructed once per process (`OnceLock`)
//! - `Premises` as the explicit context holding both
//!
//! Run individual demos with:
//! ```bash
//! cargo run --bin abstract_factory
//! cargo run --bin builder
//! cargo run --bin prototype
//! cargo run --bin singleton
//! ```

pub mod abstract_factory;
pub mod builder;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod narrate;
pub mod prototype;
pub mod singleton;

pub use catalog::Catalog;
pub use error::{CatalogError, ElevatorError, PrototypeError, RentalError};
