use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Top-level dashboard page.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum Page {
    #[default]
    Employees,
    TimeClock,
}
