use gridscope_core::Network;
use serde::{Deserialize, Serialize};

/// Caller-supplied switches that widen some views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoTypeParameters {
    /// Project every operational limits group of a branch side, not only the
    /// selected one.
    pub load_operational_limit_groups: bool,
}

/// Everything a mapper reads besides the equipment itself.
#[derive(Debug, Clone, Copy)]
pub struct MapperContext<'a> {
    pub network: &'a Network,
    pub parameters: &'a InfoTypeParameters,
}

impl<'a> MapperContext<'a> {
    pub fn new(network: &'a Network, parameters: &'a InfoTypeParameters) -> Self {
        Self {
            network,
            parameters,
        }
    }
}
