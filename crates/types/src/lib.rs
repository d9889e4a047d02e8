#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Identity and property model for the drift deployment planner
//!
//! This crate defines the vocabulary every other `drift-*` crate joins
//! on: [`Moniker`] (resource identity), [`ResourceType`] (routes to a
//! provider package), [`PropertyBag`] / [`PropertyValue`] (typed,
//! reference-aware properties), [`Resource`] (the two combined with an
//! optional provider-assigned ID), and [`Snapshot`] (an enumerable
//! collection of resources at a point in time).

mod moniker;
mod property;
mod resource;
mod snapshot;

pub use moniker::{Moniker, ResourceType};
pub use property::{PropertyBag, PropertyValue};
pub use resource::Resource;
pub use snapshot::Snapshot;
