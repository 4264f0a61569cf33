//! # gridscope-core: read-only network model
//!
//! The data source the view layer projects from. It holds substations,
//! voltage levels and the equipment connected to them, together with the
//! optional extensions attached to each entity.
//!
//! ## Design
//!
//! - **Read-only**: a [`Network`] is built once from a [`NetworkData`]
//!   document and then only queried through accessors. Nothing in the
//!   workspace mutates it, so it can be shared across threads without locks.
//! - **Explicit extensions**: every extension is an `Option<_>` field. An
//!   absent extension is `None`, not a failed downcast.
//! - **NaN means "not computed"**: terminal flows, bus voltages and unset
//!   extension values are NaN. Normalizing them is the view layer's job.
//! - **Typed handles**: [`Identifiable`] borrows one entity and knows its
//!   [`ElementType`].
//!
//! ## Quick Start
//!
//! ```rust
//! use gridscope_core::*;
//!
//! let network = Network::from_json_str(r#"{
//!     "id": "demo",
//!     "substations": [{"id": "S1", "country": "FR"}],
//!     "voltageLevels": [{"id": "VL1", "substationId": "S1", "nominalV": 225.0}],
//!     "loads": [{"id": "LD1", "terminal": {"voltageLevelId": "VL1", "p": 10.5}}]
//! }"#).unwrap();
//!
//! let load = network.identifiable("LD1").unwrap();
//! assert_eq!(load.element_type(), ElementType::Load);
//! ```
//!
//! ## Modules
//!
//! - [`model`] - entities, extensions, limits and tap changers
//! - [`network`] - the indexed container and [`Identifiable`]
//! - [`kinds`] - [`ElementType`] and [`InfoType`] tags
//! - [`units`] - unit newtypes
//! - [`error`] - [`GridscopeError`]

pub mod error;
pub mod kinds;
pub mod model;
pub mod network;
pub mod units;

pub use error::{GridscopeError, GridscopeResult};
pub use kinds::{ElementType, InfoType};
pub use model::*;
pub use network::{Identifiable, Network, NetworkData};
pub use units::{
    Amperes, Degrees, Kilovolts, Megavars, MegavoltAmperes, Megawatts, Ohms, Siemens,
};
