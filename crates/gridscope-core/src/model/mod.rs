//! Entities of the network model.
//!
//! Everything here is plain data, deserialized from a network document and
//! only read afterwards. Extensions are optional fields; computed quantities
//! the model has no value for are NaN.

pub mod branches;
pub mod containers;
pub mod extensions;
pub mod injections;
pub mod limits;
pub mod terminal;

pub use branches::{
    ConvertersMode, HvdcLine, Line, ThreeWindingsTransformer, ThreeWindingsTransformerLeg,
    TieLine, TwoWindingsTransformer,
};
pub use containers::{Bus, BusbarSection, Substation, TopologyKind, VoltageLevel};
pub use extensions::{
    ActivePowerControl, BusbarSectionPosition, ConnectableDirection, ConnectablePosition,
    CoordinatedReactiveControl, Feeder, GeneratorShortCircuit, GeneratorStartup,
    HvdcAngleDroopActivePowerControl, HvdcOperatorActivePowerRange, IdentifiableShortCircuit,
    Measurement, MeasurementSide, MeasurementType, Measurements, OperatingStatus,
    ReactiveCapabilityCurvePoint, ReactiveLimits, StandbyAutomaton,
};
pub use injections::{
    Battery, DanglingLine, EnergySource, Generator, LccConverterStation, Load, LoadType,
    ShuntCompensator, StaticVarCompensator, SvcRegulationMode, VscConverterStation,
};
pub use limits::{
    high_tap_position, CurrentLimits, OperationalLimitsGroup, PhaseRegulationMode,
    PhaseTapChanger, RatioTapChanger, SideLimits, TapChangerStep, TemporaryLimit,
};
pub use terminal::Terminal;
