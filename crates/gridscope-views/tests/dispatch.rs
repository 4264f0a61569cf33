mod common;

use gridscope_core::{ElementType, GridscopeError, InfoType};
use gridscope_views::{project, InfoTypeParameters, MapperContext, ViewRegistry};

use ElementType as E;
use InfoType as V;

fn expected_views(element_type: ElementType) -> &'static [InfoType] {
    match element_type {
        E::Substation | E::VoltageLevel => &[V::List, V::Form, V::Tab, V::Map],
        E::Line => &[V::List, V::Form, V::Tab, V::Map, V::Tooltip],
        E::TieLine => &[V::List, V::Tab, V::Map],
        E::HvdcLine => &[V::List, V::Form, V::Tab, V::Map],
        E::TwoWindingsTransformer => &[V::List, V::Form, V::Tab, V::Tooltip],
        E::Generator
        | E::Battery
        | E::Load
        | E::ShuntCompensator
        | E::LccConverterStation
        | E::VscConverterStation
        | E::BusbarSection => &[V::List, V::Form, V::Tab],
        E::ThreeWindingsTransformer
        | E::StaticVarCompensator
        | E::DanglingLine
        | E::Bus => &[V::List, V::Tab],
    }
}

fn sample_id(element_type: ElementType) -> &'static str {
    match element_type {
        E::Substation => "S1",
        E::VoltageLevel => "VL1",
        E::Line => "L1",
        E::TieLine => "TL1",
        E::HvdcLine => "HVDC1",
        E::TwoWindingsTransformer => "T2W",
        E::ThreeWindingsTransformer => "T3W",
        E::Generator => "G1",
        E::Battery => "B1",
        E::Load => "LD1",
        E::ShuntCompensator => "SH1",
        E::StaticVarCompensator => "SVC1",
        E::LccConverterStation => "LCC1",
        E::VscConverterStation => "VSC1",
        E::DanglingLine => "DL1",
        E::BusbarSection => "BBS1.1",
        E::Bus => "VL2_0",
    }
}

#[test]
fn test_registry_matches_support_matrix() {
    let registry = ViewRegistry::global();
    for element_type in ElementType::ALL {
        for info_type in InfoType::ALL {
            let expected = expected_views(element_type).contains(&info_type);
            assert_eq!(
                registry.supports(element_type, info_type),
                expected,
                "{element_type} {info_type}"
            );
        }
    }
}

#[test]
fn test_every_pair_dispatches_or_is_unsupported() {
    let network = common::sample_network();
    let parameters = InfoTypeParameters::default();
    let ctx = MapperContext::new(&network, &parameters);

    for element_type in ElementType::ALL {
        let id = sample_id(element_type);
        for info_type in InfoType::ALL {
            let result = project(&ctx, element_type, info_type, id);
            if expected_views(element_type).contains(&info_type) {
                let infos = result.unwrap_or_else(|e| panic!("{element_type} {info_type}: {e}"));
                assert_eq!(infos.id(), id);
            } else {
                match result {
                    Err(GridscopeError::UnsupportedView {
                        element_type: e,
                        info_type: v,
                    }) => {
                        assert_eq!(e, element_type);
                        assert_eq!(v, info_type);
                    }
                    other => panic!(
                        "{element_type} {info_type}: expected unsupported, got {other:?}"
                    ),
                }
            }
        }
    }
}

#[test]
fn test_list_view_is_identity_only() {
    let network = common::sample_network();
    let parameters = InfoTypeParameters::default();
    let ctx = MapperContext::new(&network, &parameters);

    let infos = project(&ctx, ElementType::Generator, InfoType::List, "G1").unwrap();
    assert_eq!(
        serde_json::to_value(infos).unwrap(),
        serde_json::json!({"id": "G1"})
    );
}
