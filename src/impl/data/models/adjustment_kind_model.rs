use std::str::FromStr;

use serde::Deserialize;

use crate::{entities::AdjustmentKind, errors::LedgerError};

/// Adjustment kind strings as persisted by the original system
/// (`FIXED`, `PERCENTAGE`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct AdjustmentKindModel(pub AdjustmentKind);

impl AdjustmentKindModel {
    pub(crate) fn as_str(&self) -> &'static str {
        match self.0 {
            AdjustmentKind::Fixed => "FIXED",
            AdjustmentKind::Percentage => "PERCENTAGE",
        }
    }
}

impl FromStr for AdjustmentKindModel {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "FIXED" => AdjustmentKind::Fixed,
            "PERCENTAGE" => AdjustmentKind::Percentage,
            _ => {
                return Err(LedgerError::InvalidAdjustmentKind {
                    value: s.to_string(),
                })
            }
        };
        Ok(AdjustmentKindModel(kind))
    }
}

impl<'de> Deserialize<'de> for AdjustmentKindModel {
    fn deserialize<D>(deserializer: D) -> Result<AdjustmentKindModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AdjustmentKindModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for AdjustmentKindModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
