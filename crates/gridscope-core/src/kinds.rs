//! Type tags used to index views: the equipment type and the view kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GridscopeError;

/// Kind of grid element a view is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementType {
    Substation,
    VoltageLevel,
    Line,
    TieLine,
    HvdcLine,
    TwoWindingsTransformer,
    ThreeWindingsTransformer,
    Generator,
    Battery,
    Load,
    ShuntCompensator,
    StaticVarCompensator,
    LccConverterStation,
    VscConverterStation,
    DanglingLine,
    BusbarSection,
    Bus,
}

impl ElementType {
    pub const ALL: [ElementType; 17] = [
        ElementType::Substation,
        ElementType::VoltageLevel,
        ElementType::Line,
        ElementType::TieLine,
        ElementType::HvdcLine,
        ElementType::TwoWindingsTransformer,
        ElementType::ThreeWindingsTransformer,
        ElementType::Generator,
        ElementType::Battery,
        ElementType::Load,
        ElementType::ShuntCompensator,
        ElementType::StaticVarCompensator,
        ElementType::LccConverterStation,
        ElementType::VscConverterStation,
        ElementType::DanglingLine,
        ElementType::BusbarSection,
        ElementType::Bus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Substation => "SUBSTATION",
            ElementType::VoltageLevel => "VOLTAGE_LEVEL",
            ElementType::Line => "LINE",
            ElementType::TieLine => "TIE_LINE",
            ElementType::HvdcLine => "HVDC_LINE",
            ElementType::TwoWindingsTransformer => "TWO_WINDINGS_TRANSFORMER",
            ElementType::ThreeWindingsTransformer => "THREE_WINDINGS_TRANSFORMER",
            ElementType::Generator => "GENERATOR",
            ElementType::Battery => "BATTERY",
            ElementType::Load => "LOAD",
            ElementType::ShuntCompensator => "SHUNT_COMPENSATOR",
            ElementType::StaticVarCompensator => "STATIC_VAR_COMPENSATOR",
            ElementType::LccConverterStation => "LCC_CONVERTER_STATION",
            ElementType::VscConverterStation => "VSC_CONVERTER_STATION",
            ElementType::DanglingLine => "DANGLING_LINE",
            ElementType::BusbarSection => "BUSBAR_SECTION",
            ElementType::Bus => "BUS",
        }
    }

    /// Lower-case names accepted on the command line.
    pub fn available() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|kind| kind.as_str().to_ascii_lowercase())
            .collect()
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = GridscopeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let wanted = input.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                GridscopeError::Parse(format!(
                    "unknown element type '{}'; supported values: {}",
                    input,
                    Self::available().join(", ")
                ))
            })
    }
}

/// View kind: which subset and shape of fields a mapper returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InfoType {
    List,
    Form,
    Tab,
    Map,
    Tooltip,
}

impl InfoType {
    pub const ALL: [InfoType; 5] = [
        InfoType::List,
        InfoType::Form,
        InfoType::Tab,
        InfoType::Map,
        InfoType::Tooltip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::List => "LIST",
            InfoType::Form => "FORM",
            InfoType::Tab => "TAB",
            InfoType::Map => "MAP",
            InfoType::Tooltip => "TOOLTIP",
        }
    }

    pub fn available() -> &'static [&'static str] {
        &["list", "form", "tab", "map", "tooltip"]
    }
}

impl fmt::Display for InfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfoType {
    type Err = GridscopeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(InfoType::List),
            "form" => Ok(InfoType::Form),
            "tab" => Ok(InfoType::Tab),
            "map" => Ok(InfoType::Map),
            "tooltip" => Ok(InfoType::Tooltip),
            other => Err(GridscopeError::Parse(format!(
                "unknown info type '{}'; supported values: {}",
                other,
                Self::available().join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_type_parsing_accepts_common_spellings() {
        assert_eq!(
            "two-windings-transformer".parse::<ElementType>().unwrap(),
            ElementType::TwoWindingsTransformer
        );
        assert_eq!("LOAD".parse::<ElementType>().unwrap(), ElementType::Load);
        assert_eq!(
            " busbar_section ".parse::<ElementType>().unwrap(),
            ElementType::BusbarSection
        );
        assert!("transformer".parse::<ElementType>().is_err());
    }

    #[test]
    fn element_type_names_round_trip() {
        for kind in ElementType::ALL {
            assert_eq!(kind.as_str().parse::<ElementType>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn info_type_parsing() {
        assert_eq!("Tab".parse::<InfoType>().unwrap(), InfoType::Tab);
        assert_eq!("tooltip".parse::<InfoType>().unwrap(), InfoType::Tooltip);
        let err = "operating_status".parse::<InfoType>().unwrap_err();
        assert!(err.to_string().contains("supported values"));
    }
}
