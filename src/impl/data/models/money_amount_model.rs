use std::{str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::errors::LedgerError;

/// Accepts plain decimals with an optional sign and optional thousands
/// separators ("1200", "-35.5", "1,200.00").
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(\d{1,3}(,\d{3})+|\d+)(\.\d+)?$").expect("hardcoded regex should be valid")
});

/// A money amount crossing the snapshot boundary. The original system took
/// these from form inputs, so string values are validated before parsing;
/// JSON numbers are accepted as-is when finite.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MoneyAmountModel(pub f64);

impl FromStr for MoneyAmountModel {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !AMOUNT_PATTERN.is_match(trimmed) {
            return Err(LedgerError::InvalidMoneyAmount {
                value: s.to_string(),
            });
        }
        let amount = trimmed
            .replace(',', "")
            .parse::<f64>()
            .map_err(|_| LedgerError::InvalidMoneyAmount {
                value: s.to_string(),
            })?;
        if !amount.is_finite() {
            return Err(LedgerError::InvalidMoneyAmount {
                value: s.to_string(),
            });
        }
        Ok(MoneyAmountModel(amount))
    }
}

impl<'de> serde::Deserialize<'de> for MoneyAmountModel {
    fn deserialize<D>(deserializer: D) -> Result<MoneyAmountModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AmountVisitor;

        impl serde::de::Visitor<'_> for AmountVisitor {
            type Value = MoneyAmountModel;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                if v.is_finite() {
                    Ok(MoneyAmountModel(v))
                } else {
                    Err(E::custom(LedgerError::InvalidMoneyAmount {
                        value: v.to_string(),
                    }))
                }
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(MoneyAmountModel(v as f64))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(MoneyAmountModel(v as f64))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                MoneyAmountModel::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

impl serde::Serialize for MoneyAmountModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl From<MoneyAmountModel> for f64 {
    fn from(m: MoneyAmountModel) -> Self {
        m.0
    }
}

impl From<f64> for MoneyAmountModel {
    fn from(v: f64) -> Self {
        MoneyAmountModel(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_separated_amounts() {
        assert_eq!(MoneyAmountModel::from_str("1200").unwrap().0, 1200.0);
        assert_eq!(MoneyAmountModel::from_str("1,200.50").unwrap().0, 1200.5);
        assert_eq!(MoneyAmountModel::from_str("-35.5").unwrap().0, -35.5);
    }

    #[test]
    fn rejects_malformed_amounts() {
        for s in ["12a", "1,20", "", "1.2.3", "NaN"] {
            assert!(
                matches!(
                    MoneyAmountModel::from_str(s),
                    Err(LedgerError::InvalidMoneyAmount { .. })
                ),
                "expected rejection for {s:?}"
            );
        }
    }
}
