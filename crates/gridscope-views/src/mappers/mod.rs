//! Per-type view mappers.
//!
//! One module per element type. Each view kind is a free function with the
//! [`ElementMapper`] signature; the registry binds them to
//! `(ElementType, InfoType)` pairs.

use gridscope_core::{GridscopeResult, Identifiable};

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;

/// Project one piece of equipment into one view.
pub type ElementMapper =
    for<'a> fn(&MapperContext<'a>, Identifiable<'a>) -> GridscopeResult<ElementInfos>;

/// Unwrap the expected [`Identifiable`] variant or return a type mismatch.
macro_rules! downcast {
    ($identifiable:expr, $variant:ident) => {
        match $identifiable {
            gridscope_core::Identifiable::$variant(entity) => entity,
            other => {
                return Err(gridscope_core::GridscopeError::TypeMismatch {
                    id: other.id().to_string(),
                    expected: gridscope_core::ElementType::$variant,
                    found: other.element_type(),
                })
            }
        }
    };
}

pub mod battery;
pub mod bus;
pub mod busbar_section;
pub mod converter_station;
pub mod dangling_line;
pub mod generator;
pub mod hvdc_line;
pub mod line;
pub mod load;
pub mod shunt_compensator;
pub mod static_var_compensator;
pub mod substation;
pub mod three_windings_transformer;
pub mod tie_line;
pub mod two_windings_transformer;
pub mod voltage_level;

/// LIST view shared by every type without a richer one.
pub fn to_list_infos(
    _ctx: &MapperContext<'_>,
    identifiable: Identifiable<'_>,
) -> GridscopeResult<ElementInfos> {
    Ok(ElementInfos::List(crate::extensions::list_infos(identifiable)))
}
