use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::LedgerError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ISODateModel(pub NaiveDate);

impl FromStr for ISODateModel {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            LedgerError::InvalidIsoDate {
                date: s.to_string(),
            }
        })?;
        Ok(ISODateModel(d))
    }
}

impl<'de> Deserialize<'de> for ISODateModel {
    fn deserialize<D>(deserializer: D) -> Result<ISODateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISODateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for ISODateModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.format("%Y-%m-%d").to_string())
    }
}

impl From<NaiveDate> for ISODateModel {
    fn from(d: NaiveDate) -> Self {
        ISODateModel(d)
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(m: ISODateModel) -> Self {
        m.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let d = ISODateModel::from_str("2024-03-10").unwrap();
        assert_eq!(NaiveDate::from(d), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn rejects_non_iso_dates() {
        assert!(matches!(
            ISODateModel::from_str("10/03/2024"),
            Err(LedgerError::InvalidIsoDate { .. })
        ));
    }
}
