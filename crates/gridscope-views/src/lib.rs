//! # gridscope-views: JSON view projection
//!
//! Turns equipment of a [`gridscope_core::Network`] into serializable view
//! records, one shape per `(ElementType, InfoType)` pair.
//!
//! ## Layers
//!
//! - [`normalize`] - NaN to absent conversion and the omission predicates
//! - [`topology`] - busbar layout inference for node/breaker voltage levels
//! - [`records`] / [`extensions`] - view fragments and the helpers that build
//!   them from model extensions
//! - [`mappers`] - one plain function per supported view
//! - [`registry`] - the static `(ElementType, InfoType)` dispatch table
//! - [`service`] - id lookup and (parallel) projection
//!
//! ## Quick Start
//!
//! ```rust
//! use gridscope_core::{ElementType, InfoType, Network};
//! use gridscope_views::{project, InfoTypeParameters, MapperContext};
//!
//! let network = Network::from_json_str(r#"{
//!     "id": "demo",
//!     "substations": [{"id": "S1"}],
//!     "voltageLevels": [{"id": "VL1", "substationId": "S1", "nominalV": 63.0}],
//!     "loads": [{"id": "LD1", "terminal": {"voltageLevelId": "VL1"}}]
//! }"#).unwrap();
//!
//! let parameters = InfoTypeParameters::default();
//! let ctx = MapperContext::new(&network, &parameters);
//! let view = project(&ctx, ElementType::Load, InfoType::Tab, "LD1").unwrap();
//!
//! let json = serde_json::to_value(&view).unwrap();
//! assert_eq!(json["voltageLevelId"], "VL1");
//! assert!(json.get("p").is_none());
//! ```

pub mod context;
pub mod element_infos;
pub mod extensions;
pub mod mappers;
pub mod normalize;
pub mod records;
pub mod registry;
pub mod service;
pub mod topology;

pub use context::{InfoTypeParameters, MapperContext};
pub use element_infos::ElementInfos;
pub use mappers::ElementMapper;
pub use normalize::{extension_value, is_null_or_nan, nan_to_none};
pub use registry::ViewRegistry;
pub use service::{project, project_many};
pub use topology::{infer_topology, SwitchKind, TopologySnapshot};
