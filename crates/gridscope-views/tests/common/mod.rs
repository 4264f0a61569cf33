#![allow(dead_code)]

use gridscope_core::*;

pub fn terminal(voltage_level_id: &str, p: f64, q: f64, i: f64) -> Terminal {
    Terminal::new(voltage_level_id).with_flows(p, q, i)
}

/// Small two-substation grid carrying one element of every type.
///
/// Flows of `G1`, `L1` side 2 and the second leg of `T3W` are left NaN.
pub fn sample_network() -> Network {
    let limits = SideLimits::single(
        "DEFAULT",
        CurrentLimits {
            permanent_limit: 1000.0,
            temporary_limits: vec![TemporaryLimit {
                name: "20'".into(),
                value: 1200.0,
                acceptable_duration: Some(1200),
            }],
        },
    );

    Network::from(NetworkData {
        id: "sample".into(),
        substations: vec![
            Substation {
                id: "S1".into(),
                name: Some("North".into()),
                country: Some("FR".into()),
                ..Substation::default()
            },
            Substation {
                id: "S2".into(),
                country: Some("BE".into()),
                ..Substation::default()
            },
        ],
        voltage_levels: vec![
            VoltageLevel {
                id: "VL1".into(),
                substation_id: "S1".into(),
                nominal_v: Kilovolts(400.0),
                topology_kind: TopologyKind::NodeBreaker,
                ..VoltageLevel::default()
            },
            VoltageLevel {
                id: "VL2".into(),
                substation_id: "S2".into(),
                nominal_v: Kilovolts(400.0),
                ..VoltageLevel::default()
            },
            VoltageLevel {
                id: "VL3".into(),
                substation_id: "S1".into(),
                nominal_v: Kilovolts(20.0),
                identifiable_short_circuit: Some(IdentifiableShortCircuit {
                    ip_min: 1000.0,
                    ..IdentifiableShortCircuit::default()
                }),
                ..VoltageLevel::default()
            },
        ],
        busbar_sections: vec![
            BusbarSection::positioned("BBS1.1", "VL1", 1, 1),
            BusbarSection::positioned("BBS1.2", "VL1", 1, 2),
            BusbarSection::positioned("BBS2.1", "VL1", 2, 1),
            BusbarSection::positioned("BBS2.2", "VL1", 2, 2),
        ],
        buses: vec![Bus {
            id: "VL2_0".into(),
            voltage_level_id: "VL2".into(),
            v: Kilovolts(401.2),
            connected_component: Some(0),
            ..Bus::default()
        }],
        lines: vec![Line {
            id: "L1".into(),
            terminal1: terminal("VL1", 100.0, 10.0, 150.0),
            terminal2: Terminal::new("VL2"),
            r: Ohms(1.0),
            x: Ohms(10.0),
            limits1: limits.clone(),
            limits2: limits.clone(),
            ..Line::default()
        }],
        tie_lines: vec![TieLine {
            id: "TL1".into(),
            dangling_line1_id: "DL1".into(),
            dangling_line2_id: "DL2".into(),
            ..TieLine::default()
        }],
        dangling_lines: vec![
            DanglingLine {
                id: "DL1".into(),
                terminal: terminal("VL1", 20.0, 1.0, 30.0),
                pairing_key: Some("XNODE".into()),
                tie_line_id: Some("TL1".into()),
                ..DanglingLine::default()
            },
            DanglingLine {
                id: "DL2".into(),
                terminal: terminal("VL2", -20.0, -1.0, 30.0),
                tie_line_id: Some("TL1".into()),
                ..DanglingLine::default()
            },
        ],
        hvdc_lines: vec![HvdcLine {
            id: "HVDC1".into(),
            converter_station1_id: "LCC1".into(),
            converter_station2_id: "VSC1".into(),
            nominal_v: Kilovolts(320.0),
            max_p: Megawatts(1000.0),
            angle_droop_active_power_control: Some(HvdcAngleDroopActivePowerControl {
                p0: 100.0,
                droop: f32::NAN,
                enabled: true,
            }),
            ..HvdcLine::default()
        }],
        lcc_converter_stations: vec![LccConverterStation {
            id: "LCC1".into(),
            terminal: terminal("VL1", 50.0, 5.0, f64::NAN),
            loss_factor: 1.1,
            power_factor: 0.5,
            ..LccConverterStation::default()
        }],
        vsc_converter_stations: vec![VscConverterStation {
            id: "VSC1".into(),
            terminal: Terminal::new("VL2"),
            loss_factor: 1.0,
            ..VscConverterStation::default()
        }],
        two_windings_transformers: vec![TwoWindingsTransformer {
            id: "T2W".into(),
            terminal1: terminal("VL1", 40.0, 2.0, 60.0),
            terminal2: terminal("VL3", -40.0, -2.0, 1200.0),
            rated_u1: Kilovolts(400.0),
            rated_u2: Kilovolts(20.0),
            ratio_tap_changer: Some(RatioTapChanger {
                low_tap_position: 0,
                tap_position: 1,
                steps: vec![TapChangerStep::default(); 3],
                ..RatioTapChanger::default()
            }),
            ..TwoWindingsTransformer::default()
        }],
        three_windings_transformers: vec![ThreeWindingsTransformer {
            id: "T3W".into(),
            rated_u0: Kilovolts(400.0),
            leg1: ThreeWindingsTransformerLeg {
                terminal: terminal("VL1", 30.0, 3.0, 45.0),
                ..ThreeWindingsTransformerLeg::default()
            },
            leg2: ThreeWindingsTransformerLeg {
                terminal: Terminal::new("VL2"),
                ..ThreeWindingsTransformerLeg::default()
            },
            leg3: ThreeWindingsTransformerLeg {
                terminal: terminal("VL3", -30.0, -3.0, 900.0),
                ..ThreeWindingsTransformerLeg::default()
            },
            ..ThreeWindingsTransformer::default()
        }],
        generators: vec![Generator {
            id: "G1".into(),
            terminal: Terminal::new("VL1"),
            max_p: Megawatts(500.0),
            target_p: Megawatts(300.0),
            startup: Some(GeneratorStartup {
                marginal_cost: 42.0,
                ..GeneratorStartup::default()
            }),
            ..Generator::default()
        }],
        batteries: vec![Battery {
            id: "B1".into(),
            terminal: terminal("VL3", -5.0, 0.0, 150.0),
            ..Battery::default()
        }],
        loads: vec![
            Load {
                id: "LD1".into(),
                terminal: terminal("VL3", 12.0, 3.0, 350.0),
                p0: Megawatts(12.0),
                ..Load::default()
            },
            Load {
                id: "LD2".into(),
                terminal: Terminal::new("VL2"),
                ..Load::default()
            },
        ],
        shunt_compensators: vec![ShuntCompensator {
            id: "SH1".into(),
            terminal: Terminal::new("VL3"),
            section_count: 1,
            maximum_section_count: 2,
            b_per_section: Siemens(-0.001),
            ..ShuntCompensator::default()
        }],
        static_var_compensators: vec![StaticVarCompensator {
            id: "SVC1".into(),
            terminal: Terminal::new("VL2"),
            standby_automaton: Some(StandbyAutomaton::default()),
            ..StaticVarCompensator::default()
        }],
    })
}

/// One voltage level whose nominal voltage, flows, setpoints and tap
/// changer values are all NaN.
pub fn nan_network() -> Network {
    Network::from(NetworkData {
        id: "nan".into(),
        substations: vec![Substation {
            id: "S1".into(),
            ..Substation::default()
        }],
        voltage_levels: vec![VoltageLevel {
            id: "VL1".into(),
            substation_id: "S1".into(),
            nominal_v: Kilovolts::nan(),
            ..VoltageLevel::default()
        }],
        buses: vec![Bus {
            id: "VL1_0".into(),
            voltage_level_id: "VL1".into(),
            ..Bus::default()
        }],
        lines: vec![Line {
            id: "L1".into(),
            terminal1: Terminal::new("VL1"),
            terminal2: Terminal::new("VL1"),
            ..Line::default()
        }],
        two_windings_transformers: vec![TwoWindingsTransformer {
            id: "T2W".into(),
            terminal1: Terminal::new("VL1"),
            terminal2: Terminal::new("VL1"),
            phase_tap_changer: Some(PhaseTapChanger {
                steps: vec![TapChangerStep {
                    rho: f64::NAN,
                    alpha: f64::NAN,
                    ..TapChangerStep::default()
                }],
                ..PhaseTapChanger::default()
            }),
            ..TwoWindingsTransformer::default()
        }],
        loads: vec![Load {
            id: "LD1".into(),
            terminal: Terminal::new("VL1"),
            p0: Megawatts::nan(),
            q0: Megavars::nan(),
            ..Load::default()
        }],
        ..NetworkData::default()
    })
}
