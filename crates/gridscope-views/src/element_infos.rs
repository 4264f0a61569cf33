//! The closed set of view records a mapper can return.

use serde::Serialize;

use crate::mappers::battery::{BatteryFormInfos, BatteryTabInfos};
use crate::mappers::bus::BusTabInfos;
use crate::mappers::busbar_section::{BusbarSectionFormInfos, BusbarSectionTabInfos};
use crate::mappers::converter_station::{
    LccConverterStationFormInfos, LccConverterStationTabInfos, VscConverterStationFormInfos,
    VscConverterStationTabInfos,
};
use crate::mappers::dangling_line::DanglingLineTabInfos;
use crate::mappers::generator::{GeneratorFormInfos, GeneratorTabInfos};
use crate::mappers::hvdc_line::{HvdcLineFormInfos, HvdcLineMapInfos, HvdcLineTabInfos};
use crate::mappers::line::{LineFormInfos, LineMapInfos, LineTabInfos, LineTooltipInfos};
use crate::mappers::load::{LoadFormInfos, LoadTabInfos};
use crate::mappers::shunt_compensator::{ShuntCompensatorFormInfos, ShuntCompensatorTabInfos};
use crate::mappers::static_var_compensator::StaticVarCompensatorTabInfos;
use crate::mappers::substation::{
    SubstationFormInfos, SubstationListInfos, SubstationMapInfos, SubstationTabInfos,
};
use crate::mappers::three_windings_transformer::ThreeWindingsTransformerTabInfos;
use crate::mappers::tie_line::{TieLineMapInfos, TieLineTabInfos};
use crate::mappers::two_windings_transformer::{
    TwoWindingsTransformerFormInfos, TwoWindingsTransformerTabInfos,
    TwoWindingsTransformerTooltipInfos,
};
use crate::mappers::voltage_level::{
    VoltageLevelFormInfos, VoltageLevelListInfos, VoltageLevelMapInfos, VoltageLevelTabInfos,
};
use crate::records::ElementListInfos;

macro_rules! element_infos {
    ($($variant:ident($record:ty)),* $(,)?) => {
        /// One projected view. Serializes as the bare record, without a tag.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum ElementInfos {
            $($variant($record),)*
        }

        impl ElementInfos {
            /// Id of the projected equipment.
            pub fn id(&self) -> &str {
                match self {
                    $(ElementInfos::$variant(record) => &record.id,)*
                }
            }
        }
    };
}

element_infos! {
    List(ElementListInfos),
    SubstationList(SubstationListInfos),
    SubstationForm(SubstationFormInfos),
    SubstationTab(SubstationTabInfos),
    SubstationMap(SubstationMapInfos),
    VoltageLevelList(VoltageLevelListInfos),
    VoltageLevelForm(VoltageLevelFormInfos),
    VoltageLevelTab(VoltageLevelTabInfos),
    VoltageLevelMap(VoltageLevelMapInfos),
    LineForm(LineFormInfos),
    LineTab(LineTabInfos),
    LineMap(LineMapInfos),
    LineTooltip(LineTooltipInfos),
    TieLineTab(TieLineTabInfos),
    TieLineMap(TieLineMapInfos),
    HvdcLineForm(HvdcLineFormInfos),
    HvdcLineTab(HvdcLineTabInfos),
    HvdcLineMap(HvdcLineMapInfos),
    TwoWindingsTransformerForm(TwoWindingsTransformerFormInfos),
    TwoWindingsTransformerTab(TwoWindingsTransformerTabInfos),
    TwoWindingsTransformerTooltip(TwoWindingsTransformerTooltipInfos),
    ThreeWindingsTransformerTab(ThreeWindingsTransformerTabInfos),
    GeneratorForm(GeneratorFormInfos),
    GeneratorTab(GeneratorTabInfos),
    BatteryForm(BatteryFormInfos),
    BatteryTab(BatteryTabInfos),
    LoadForm(LoadFormInfos),
    LoadTab(LoadTabInfos),
    ShuntCompensatorForm(ShuntCompensatorFormInfos),
    ShuntCompensatorTab(ShuntCompensatorTabInfos),
    StaticVarCompensatorTab(StaticVarCompensatorTabInfos),
    LccConverterStationForm(LccConverterStationFormInfos),
    LccConverterStationTab(LccConverterStationTabInfos),
    VscConverterStationForm(VscConverterStationFormInfos),
    VscConverterStationTab(VscConverterStationTabInfos),
    DanglingLineTab(DanglingLineTabInfos),
    BusbarSectionForm(BusbarSectionFormInfos),
    BusbarSectionTab(BusbarSectionTabInfos),
    BusTab(BusTabInfos),
}
