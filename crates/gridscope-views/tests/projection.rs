mod common;

use gridscope_core::*;
use gridscope_views::{project, project_many, InfoTypeParameters, MapperContext, ViewRegistry};
use serde_json::{json, Value};

fn view(network: &Network, element_type: ElementType, info_type: InfoType, id: &str) -> Value {
    let parameters = InfoTypeParameters::default();
    let ctx = MapperContext::new(network, &parameters);
    let infos = project(&ctx, element_type, info_type, id).unwrap();
    serde_json::to_value(infos).unwrap()
}

#[test]
fn test_nan_quantities_are_omitted_or_null_per_field() {
    let network = common::nan_network();

    let load_tab = view(&network, ElementType::Load, InfoType::Tab, "LD1");
    assert!(load_tab.get("p").is_none());
    assert!(load_tab.get("q").is_none());
    assert_eq!(load_tab["p0"], Value::Null);
    assert_eq!(load_tab["q0"], Value::Null);
    assert_eq!(load_tab["nominalVoltage"], Value::Null);

    let load_form = view(&network, ElementType::Load, InfoType::Form, "LD1");
    assert!(load_form.get("p").is_none());
    assert_eq!(load_form["p0"], Value::Null);

    let line = view(&network, ElementType::Line, InfoType::Tab, "L1");
    for side in ["p1", "q1", "i1", "p2", "q2", "i2"] {
        assert!(line.get(side).is_none(), "{side} should be omitted");
    }
    assert_eq!(line["nominalVoltage1"], Value::Null);

    let bus = view(&network, ElementType::Bus, InfoType::Tab, "VL1_0");
    assert!(bus.get("v").is_none());
    assert!(bus.get("angle").is_none());
    assert_eq!(bus["nominalVoltage"], Value::Null);

    let twt = view(
        &network,
        ElementType::TwoWindingsTransformer,
        InfoType::Form,
        "T2W",
    );
    assert!(twt.get("ratedS").is_none());
    let ptc = &twt["phaseTapChanger"];
    assert!(ptc.get("regulationValue").is_none());
    assert!(ptc.get("targetDeadband").is_none());
    let step = &ptc["steps"][0];
    assert!(step.get("alpha").is_none());
    assert_eq!(step["rho"], Value::Null);
    assert_eq!(step["r"], 0.0);
}

#[test]
fn test_every_supported_view_projects_the_sample_network() {
    let network = common::sample_network();
    let parameters = InfoTypeParameters {
        load_operational_limit_groups: true,
    };
    let ctx = MapperContext::new(&network, &parameters);

    for (element_type, info_type) in ViewRegistry::global().supported() {
        let views = project_many(&ctx, element_type, info_type, &[]).unwrap();
        assert!(
            !views.is_empty(),
            "{element_type} {info_type} projected nothing"
        );
    }
}

#[test]
fn test_load_views_share_identity_and_differ_on_nan_policy() {
    let network = common::sample_network();

    let form = view(&network, ElementType::Load, InfoType::Form, "LD2");
    let tab = view(&network, ElementType::Load, InfoType::Tab, "LD2");

    assert_eq!(form["id"], "LD2");
    assert_eq!(tab["id"], "LD2");
    assert!(form.get("p").is_none());
    assert!(tab.get("p").is_none());
    assert_eq!(tab["country"], "BE");
    assert_eq!(tab["type"], "UNDEFINED");
    assert_eq!(form["p0"], 0.0);
}

#[test]
fn test_line_sides_are_resolved_independently() {
    let network = common::sample_network();
    let form = view(&network, ElementType::Line, InfoType::Form, "L1");

    assert_eq!(form["voltageLevelId1"], "VL1");
    assert_eq!(form["voltageLevelId2"], "VL2");
    assert_eq!(form["p1"], 100.0);
    assert!(form.get("p2").is_none());
    assert_eq!(form["currentLimits1"]["permanentLimit"], 1000.0);
    assert_eq!(
        form["currentLimits1"]["temporaryLimits"][0],
        json!({"name": "20'", "value": 1200.0, "acceptableDuration": 1200})
    );
}

#[test]
fn test_operational_limit_groups_only_when_requested() {
    let network = common::sample_network();

    let plain = view(&network, ElementType::Line, InfoType::Tab, "L1");
    assert!(plain.get("operationalLimitsGroups1").is_none());
    assert!(plain.get("currentLimits1").is_some());

    let parameters = InfoTypeParameters {
        load_operational_limit_groups: true,
    };
    let ctx = MapperContext::new(&network, &parameters);
    let widened = serde_json::to_value(
        project(&ctx, ElementType::Line, InfoType::Tab, "L1").unwrap(),
    )
    .unwrap();
    let groups = widened["operationalLimitsGroups1"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["id"], "DEFAULT");

    let without_groups = view(
        &network,
        ElementType::TwoWindingsTransformer,
        InfoType::Tab,
        "T2W",
    );
    assert!(without_groups.get("operationalLimitsGroups1").is_none());
    let twt = project(
        &ctx,
        ElementType::TwoWindingsTransformer,
        InfoType::Tab,
        "T2W",
    )
    .unwrap();
    let twt = serde_json::to_value(twt).unwrap();
    assert!(
        twt.get("operationalLimitsGroups1").is_none(),
        "empty groups are omitted"
    );
}

#[test]
fn test_node_breaker_voltage_level_carries_topology() {
    let network = common::sample_network();

    let node_breaker = view(&network, ElementType::VoltageLevel, InfoType::Form, "VL1");
    assert_eq!(node_breaker["topologyKind"], "NODE_BREAKER");
    assert_eq!(node_breaker["busbarCount"], 2);
    assert_eq!(node_breaker["sectionCount"], 2);
    assert_eq!(node_breaker["switchKinds"], json!(["DISCONNECTOR"]));
    assert_eq!(node_breaker["isRetrievedBusbarSections"], true);

    let bus_breaker = view(&network, ElementType::VoltageLevel, InfoType::Form, "VL2");
    assert!(bus_breaker.get("busbarCount").is_none());
    assert!(bus_breaker.get("isRetrievedBusbarSections").is_none());
}

#[test]
fn test_form_extension_fields_are_tri_state() {
    let network = common::sample_network();

    let vl3 = view(&network, ElementType::VoltageLevel, InfoType::Form, "VL3");
    assert_eq!(vl3["ipMin"], 1000.0);
    assert_eq!(vl3["ipMax"], Value::Null);
    let vl1 = view(&network, ElementType::VoltageLevel, InfoType::Form, "VL1");
    assert!(vl1.get("ipMin").is_none());

    let generator = view(&network, ElementType::Generator, InfoType::Form, "G1");
    assert_eq!(generator["marginalCost"], 42.0);
    assert_eq!(generator["plannedOutageRate"], Value::Null);
    assert!(generator.get("directTransientX").is_none());
    assert!(generator.get("qPercent").is_none());
    assert!(generator.get("targetQ").is_none());

    let tab = view(&network, ElementType::Generator, InfoType::Tab, "G1");
    assert_eq!(tab["marginalCost"], 42.0);
}

#[test]
fn test_three_winding_legs_keep_their_own_flows() {
    let network = common::sample_network();
    let tab = view(
        &network,
        ElementType::ThreeWindingsTransformer,
        InfoType::Tab,
        "T3W",
    );

    assert_eq!(tab["leg1"]["p"], 30.0);
    assert!(tab["leg2"].get("p").is_none());
    assert_eq!(tab["leg2"]["voltageLevelId"], "VL2");
    assert_eq!(tab["leg3"]["p"], -30.0);
    assert_eq!(tab["leg3"]["country"], "FR");
}

#[test]
fn test_leg_on_unknown_voltage_level_is_missing_data() {
    let network = Network::from(NetworkData {
        id: "broken".into(),
        substations: vec![Substation {
            id: "S1".into(),
            ..Substation::default()
        }],
        voltage_levels: vec![VoltageLevel {
            id: "VL1".into(),
            substation_id: "S1".into(),
            ..VoltageLevel::default()
        }],
        three_windings_transformers: vec![ThreeWindingsTransformer {
            id: "T3W".into(),
            leg1: ThreeWindingsTransformerLeg {
                terminal: Terminal::new("VL1"),
                ..ThreeWindingsTransformerLeg::default()
            },
            leg2: ThreeWindingsTransformerLeg {
                terminal: Terminal::new("GHOST"),
                ..ThreeWindingsTransformerLeg::default()
            },
            leg3: ThreeWindingsTransformerLeg {
                terminal: Terminal::new("VL1"),
                ..ThreeWindingsTransformerLeg::default()
            },
            ..ThreeWindingsTransformer::default()
        }],
        ..NetworkData::default()
    });
    let parameters = InfoTypeParameters::default();
    let ctx = MapperContext::new(&network, &parameters);

    let err = project(
        &ctx,
        ElementType::ThreeWindingsTransformer,
        InfoType::Tab,
        "T3W",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        GridscopeError::MissingData(ref msg) if msg.contains("GHOST")
    ));
}

#[test]
fn test_hvdc_form_embeds_both_stations() {
    let network = common::sample_network();
    let form = view(&network, ElementType::HvdcLine, InfoType::Form, "HVDC1");

    assert_eq!(form["converterStation1"]["id"], "LCC1");
    assert_eq!(form["converterStation1"]["hvdcLineId"], "HVDC1");
    assert_eq!(form["converterStation2"]["id"], "VSC1");
    assert_eq!(form["converterStation2"]["voltageRegulatorOn"], false);
    assert_eq!(form["p0"], 100.0);
    assert_eq!(form["droop"], Value::Null);
    assert_eq!(form["isEnabled"], true);
    assert!(form.get("oprFromCs1ToCs2").is_none());

    let tab = view(&network, ElementType::HvdcLine, InfoType::Tab, "HVDC1");
    assert_eq!(tab["hvdcType"], "LCC");
    assert_eq!(tab["country2"], "BE");
    assert_eq!(
        tab["hvdcAngleDroopActivePowerControl"],
        json!({"p0": 100.0, "isEnabled": true})
    );
}

#[test]
fn test_hvdc_with_unknown_station_is_missing_data() {
    let network = Network::from(NetworkData {
        id: "broken".into(),
        hvdc_lines: vec![HvdcLine {
            id: "HVDC1".into(),
            converter_station1_id: "NOPE1".into(),
            converter_station2_id: "NOPE2".into(),
            ..HvdcLine::default()
        }],
        ..NetworkData::default()
    });
    let parameters = InfoTypeParameters::default();
    let ctx = MapperContext::new(&network, &parameters);

    for info_type in [InfoType::Form, InfoType::Tab, InfoType::Map] {
        let err = project(&ctx, ElementType::HvdcLine, info_type, "HVDC1").unwrap_err();
        assert!(matches!(
            err,
            GridscopeError::MissingData(ref msg) if msg.contains("NOPE1")
        ));
    }
}

#[test]
fn test_tie_line_reads_its_dangling_lines() {
    let network = common::sample_network();
    let tab = view(&network, ElementType::TieLine, InfoType::Tab, "TL1");

    assert_eq!(tab["danglingLine1Id"], "DL1");
    assert_eq!(tab["voltageLevelId2"], "VL2");
    assert_eq!(tab["p2"], -20.0);
    assert_eq!(tab["pairingKey"], "XNODE");

    let dangling = view(&network, ElementType::DanglingLine, InfoType::Tab, "DL1");
    assert_eq!(dangling["tieLineId"], "TL1");
    assert_eq!(dangling["paired"], true);
}

#[test]
fn test_substation_views_embed_voltage_levels() {
    let network = common::sample_network();

    let map = view(&network, ElementType::Substation, InfoType::Map, "S1");
    assert_eq!(map["voltageLevelIds"], json!(["VL1", "VL3"]));
    assert_eq!(map["voltageLevels"][1]["nominalV"], 20.0);

    let list = view(&network, ElementType::Substation, InfoType::List, "S1");
    assert_eq!(list["name"], "North");
    assert_eq!(list["voltageLevels"][0]["topologyKind"], "NODE_BREAKER");
}

#[test]
fn test_shunt_derived_susceptance() {
    let network = common::sample_network();
    let form = view(
        &network,
        ElementType::ShuntCompensator,
        InfoType::Form,
        "SH1",
    );

    let max_b = form["maxSusceptance"].as_f64().unwrap();
    assert!((max_b + 0.002).abs() < 1e-12);
    let max_q = form["maxQAtNominalV"].as_f64().unwrap();
    assert!((max_q - 0.8).abs() < 1e-9);
}

#[test]
fn test_project_many_preserves_order() {
    let network = common::sample_network();
    let parameters = InfoTypeParameters::default();
    let ctx = MapperContext::new(&network, &parameters);

    let ids = vec!["LD2".to_string(), "LD1".to_string()];
    let views = project_many(&ctx, ElementType::Load, InfoType::List, &ids).unwrap();
    let projected: Vec<&str> = views.iter().map(|v| v.id()).collect();
    assert_eq!(projected, vec!["LD2", "LD1"]);

    let all = project_many(&ctx, ElementType::Load, InfoType::List, &[]).unwrap();
    let projected: Vec<&str> = all.iter().map(|v| v.id()).collect();
    assert_eq!(projected, vec!["LD1", "LD2"]);
}

#[test]
fn test_unknown_id_and_wrong_type_are_rejected() {
    let network = common::sample_network();
    let parameters = InfoTypeParameters::default();
    let ctx = MapperContext::new(&network, &parameters);

    let err = project(&ctx, ElementType::Load, InfoType::Tab, "NOPE").unwrap_err();
    assert!(matches!(err, GridscopeError::NotFound(ref id) if id == "NOPE"));

    let err = project(&ctx, ElementType::Load, InfoType::Tab, "G1").unwrap_err();
    assert!(matches!(
        err,
        GridscopeError::TypeMismatch {
            expected: ElementType::Load,
            found: ElementType::Generator,
            ..
        }
    ));

    let ids = vec!["LD1".to_string(), "G1".to_string()];
    assert!(project_many(&ctx, ElementType::Load, InfoType::Tab, &ids).is_err());
}

#[test]
fn test_mapper_called_with_wrong_equipment_is_type_mismatch() {
    let network = common::sample_network();
    let parameters = InfoTypeParameters::default();
    let ctx = MapperContext::new(&network, &parameters);

    let mapper = ViewRegistry::global()
        .resolve(ElementType::Generator, InfoType::Form)
        .unwrap();
    let load = network.identifiable("LD1").unwrap();
    let err = mapper(&ctx, load).unwrap_err();
    assert!(matches!(
        err,
        GridscopeError::TypeMismatch { ref id, .. } if id == "LD1"
    ));
}
