//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Horizons, categories and financial summary points are
//! value objects: two points for the same month with the same figures are the
//! same point.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Horizon::Days30` is always `Horizon::Days30`)
/// - **Entity**: has identity (two items with the same SKU are the same item)
///
/// Value objects are immutable: to "change" one, build a new one. The forecast
/// series builder follows this, producing fresh points instead of scaling
/// caller-supplied ones in place.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
