use std::str::FromStr;

use serde::Deserialize;

use crate::{entities::PaymentStatus, errors::LedgerError};

/// Status strings as persisted by the original system
/// (`UNPAID`, `PARTIALLY_PAID`, `PAID`, `PAUSED`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct PaymentStatusModel(pub PaymentStatus);

impl PaymentStatusModel {
    pub(crate) fn as_str(&self) -> &'static str {
        match self.0 {
            PaymentStatus::Unpaid => "UNPAID",
            PaymentStatus::PartiallyPaid => "PARTIALLY_PAID",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Paused => "PAUSED",
        }
    }
}

impl FromStr for PaymentStatusModel {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s {
            "UNPAID" => PaymentStatus::Unpaid,
            "PARTIALLY_PAID" => PaymentStatus::PartiallyPaid,
            "PAID" => PaymentStatus::Paid,
            "PAUSED" => PaymentStatus::Paused,
            _ => {
                return Err(LedgerError::InvalidPaymentStatus {
                    value: s.to_string(),
                })
            }
        };
        Ok(PaymentStatusModel(status))
    }
}

impl<'de> Deserialize<'de> for PaymentStatusModel {
    fn deserialize<D>(deserializer: D) -> Result<PaymentStatusModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PaymentStatusModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for PaymentStatusModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_status() {
        for s in ["UNPAID", "PARTIALLY_PAID", "PAID", "PAUSED"] {
            assert_eq!(PaymentStatusModel::from_str(s).unwrap().as_str(), s);
        }
    }

    #[test]
    fn rejects_unknown_statuses() {
        assert!(matches!(
            PaymentStatusModel::from_str("paid"),
            Err(LedgerError::InvalidPaymentStatus { .. })
        ));
    }
}
