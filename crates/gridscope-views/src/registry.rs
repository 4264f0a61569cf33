//! Static dispatch table from `(ElementType, InfoType)` to a mapper.
//!
//! The table below is the whole support matrix. A pair that is not listed is
//! rejected with [`GridscopeError::UnsupportedView`]; there is no fallback
//! mapper.

use gridscope_core::{ElementType, GridscopeError, GridscopeResult, InfoType};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use crate::mappers::{self, ElementMapper};

use ElementType as E;
use InfoType as V;

const TABLE: &[(ElementType, InfoType, ElementMapper)] = &[
    (E::Substation, V::List, mappers::substation::to_list),
    (E::Substation, V::Form, mappers::substation::to_form),
    (E::Substation, V::Tab, mappers::substation::to_tab),
    (E::Substation, V::Map, mappers::substation::to_map),
    (E::VoltageLevel, V::List, mappers::voltage_level::to_list),
    (E::VoltageLevel, V::Form, mappers::voltage_level::to_form),
    (E::VoltageLevel, V::Tab, mappers::voltage_level::to_tab),
    (E::VoltageLevel, V::Map, mappers::voltage_level::to_map),
    (E::Line, V::List, mappers::to_list_infos),
    (E::Line, V::Form, mappers::line::to_form),
    (E::Line, V::Tab, mappers::line::to_tab),
    (E::Line, V::Map, mappers::line::to_map),
    (E::Line, V::Tooltip, mappers::line::to_tooltip),
    (E::TieLine, V::List, mappers::to_list_infos),
    (E::TieLine, V::Tab, mappers::tie_line::to_tab),
    (E::TieLine, V::Map, mappers::tie_line::to_map),
    (E::HvdcLine, V::List, mappers::to_list_infos),
    (E::HvdcLine, V::Form, mappers::hvdc_line::to_form),
    (E::HvdcLine, V::Tab, mappers::hvdc_line::to_tab),
    (E::HvdcLine, V::Map, mappers::hvdc_line::to_map),
    (E::TwoWindingsTransformer, V::List, mappers::to_list_infos),
    (E::TwoWindingsTransformer, V::Form, mappers::two_windings_transformer::to_form),
    (E::TwoWindingsTransformer, V::Tab, mappers::two_windings_transformer::to_tab),
    (E::TwoWindingsTransformer, V::Tooltip, mappers::two_windings_transformer::to_tooltip),
    (E::ThreeWindingsTransformer, V::List, mappers::to_list_infos),
    (E::ThreeWindingsTransformer, V::Tab, mappers::three_windings_transformer::to_tab),
    (E::Generator, V::List, mappers::to_list_infos),
    (E::Generator, V::Form, mappers::generator::to_form),
    (E::Generator, V::Tab, mappers::generator::to_tab),
    (E::Battery, V::List, mappers::to_list_infos),
    (E::Battery, V::Form, mappers::battery::to_form),
    (E::Battery, V::Tab, mappers::battery::to_tab),
    (E::Load, V::List, mappers::to_list_infos),
    (E::Load, V::Form, mappers::load::to_form),
    (E::Load, V::Tab, mappers::load::to_tab),
    (E::ShuntCompensator, V::List, mappers::to_list_infos),
    (E::ShuntCompensator, V::Form, mappers::shunt_compensator::to_form),
    (E::ShuntCompensator, V::Tab, mappers::shunt_compensator::to_tab),
    (E::StaticVarCompensator, V::List, mappers::to_list_infos),
    (E::StaticVarCompensator, V::Tab, mappers::static_var_compensator::to_tab),
    (E::LccConverterStation, V::List, mappers::to_list_infos),
    (E::LccConverterStation, V::Form, mappers::converter_station::lcc_to_form),
    (E::LccConverterStation, V::Tab, mappers::converter_station::lcc_to_tab),
    (E::VscConverterStation, V::List, mappers::to_list_infos),
    (E::VscConverterStation, V::Form, mappers::converter_station::vsc_to_form),
    (E::VscConverterStation, V::Tab, mappers::converter_station::vsc_to_tab),
    (E::DanglingLine, V::List, mappers::to_list_infos),
    (E::DanglingLine, V::Tab, mappers::dangling_line::to_tab),
    (E::BusbarSection, V::List, mappers::to_list_infos),
    (E::BusbarSection, V::Form, mappers::busbar_section::to_form),
    (E::BusbarSection, V::Tab, mappers::busbar_section::to_tab),
    (E::Bus, V::List, mappers::to_list_infos),
    (E::Bus, V::Tab, mappers::bus::to_tab),
];

static REGISTRY: Lazy<ViewRegistry> = Lazy::new(ViewRegistry::build);

/// Immutable lookup over the dispatch table.
pub struct ViewRegistry {
    mappers: HashMap<(ElementType, InfoType), ElementMapper>,
}

impl ViewRegistry {
    fn build() -> Self {
        let mappers = TABLE
            .iter()
            .map(|&(element_type, info_type, mapper)| ((element_type, info_type), mapper))
            .collect();
        Self { mappers }
    }

    /// The process-wide registry.
    pub fn global() -> &'static ViewRegistry {
        &REGISTRY
    }

    pub fn resolve(
        &self,
        element_type: ElementType,
        info_type: InfoType,
    ) -> GridscopeResult<ElementMapper> {
        match self.mappers.get(&(element_type, info_type)) {
            Some(mapper) => Ok(*mapper),
            None => {
                debug!(%element_type, %info_type, "no mapper registered");
                Err(GridscopeError::UnsupportedView {
                    element_type,
                    info_type,
                })
            }
        }
    }

    pub fn supports(&self, element_type: ElementType, info_type: InfoType) -> bool {
        self.mappers.contains_key(&(element_type, info_type))
    }

    /// Every supported pair, in table order.
    pub fn supported(&self) -> Vec<(ElementType, InfoType)> {
        TABLE.iter().map(|&(e, v, _)| (e, v)).collect()
    }

    /// View kinds available for one element type, in table order.
    pub fn info_types_of(&self, element_type: ElementType) -> Vec<InfoType> {
        TABLE
            .iter()
            .filter(|(e, _, _)| *e == element_type)
            .map(|&(_, v, _)| v)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_pairs() {
        let registry = ViewRegistry::global();
        assert_eq!(registry.mappers.len(), TABLE.len());
    }

    #[test]
    fn every_element_type_has_list_and_tab() {
        let registry = ViewRegistry::global();
        for element_type in ElementType::ALL {
            assert!(
                registry.supports(element_type, InfoType::List),
                "{element_type} LIST"
            );
            assert!(
                registry.supports(element_type, InfoType::Tab),
                "{element_type} TAB"
            );
        }
    }

    #[test]
    fn unlisted_pair_is_rejected() {
        let err = ViewRegistry::global()
            .resolve(ElementType::Bus, InfoType::Map)
            .err()
            .unwrap();
        assert!(err.is_unsupported());
        assert!(matches!(
            err,
            GridscopeError::UnsupportedView {
                element_type: ElementType::Bus,
                info_type: InfoType::Map
            }
        ));
    }

    #[test]
    fn tooltips_exist_for_lines_and_two_winding_transformers_only() {
        let registry = ViewRegistry::global();
        let with_tooltip: Vec<ElementType> = ElementType::ALL
            .into_iter()
            .filter(|t| registry.supports(*t, InfoType::Tooltip))
            .collect();
        assert_eq!(
            with_tooltip,
            vec![ElementType::Line, ElementType::TwoWindingsTransformer]
        );
    }

    #[test]
    fn info_types_follow_table_order() {
        assert_eq!(
            ViewRegistry::global().info_types_of(ElementType::Line),
            vec![InfoType::List, InfoType::Form, InfoType::Tab, InfoType::Map, InfoType::Tooltip]
        );
    }
}
