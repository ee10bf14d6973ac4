//! Report Data

use crate::domain::reports::errors::ReportsServiceError;

/// Window a sales report covers, in UTC calendar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesReportPeriod {
    Monthly { year: i16, month: i8 },
    Yearly { year: i16 },
}

impl SalesReportPeriod {
    /// Build a period from a `MONTHLY`/`YEARLY` frequency name.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown frequency, a missing month on a monthly
    /// report, or a month outside 1-12.
    pub fn from_frequency(
        frequency: &str,
        year: i16,
        month: Option<i8>,
    ) -> Result<Self, ReportsServiceError> {
        let period = if frequency.eq_ignore_ascii_case("MONTHLY") {
            Self::Monthly {
                year,
                month: month.ok_or(ReportsServiceError::InvalidMonth)?,
            }
        } else if frequency.eq_ignore_ascii_case("YEARLY") {
            Self::Yearly { year }
        } else {
            return Err(ReportsServiceError::InvalidFrequency(frequency.to_string()));
        };

        period.validate()?;

        Ok(period)
    }

    /// # Errors
    ///
    /// Returns [`ReportsServiceError::InvalidMonth`] outside 1-12.
    pub fn validate(self) -> Result<(), ReportsServiceError> {
        match self {
            Self::Monthly { month, .. } if !(1..=12).contains(&month) => {
                Err(ReportsServiceError::InvalidMonth)
            }
            Self::Monthly { .. } | Self::Yearly { .. } => Ok(()),
        }
    }

    #[must_use]
    pub fn year(self) -> i16 {
        match self {
            Self::Monthly { year, .. } | Self::Yearly { year } => year,
        }
    }

    #[must_use]
    pub fn month(self) -> Option<i8> {
        match self {
            Self::Monthly { month, .. } => Some(month),
            Self::Yearly { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_needs_month_in_range() {
        assert_eq!(
            SalesReportPeriod::from_frequency("MONTHLY", 2026, Some(3)).ok(),
            Some(SalesReportPeriod::Monthly {
                year: 2026,
                month: 3
            })
        );
        assert!(matches!(
            SalesReportPeriod::from_frequency("MONTHLY", 2026, None),
            Err(ReportsServiceError::InvalidMonth)
        ));
        assert!(matches!(
            SalesReportPeriod::from_frequency("monthly", 2026, Some(13)),
            Err(ReportsServiceError::InvalidMonth)
        ));
    }

    #[test]
    fn yearly_ignores_month() {
        assert_eq!(
            SalesReportPeriod::from_frequency("YEARLY", 2025, Some(40)).ok(),
            Some(SalesReportPeriod::Yearly { year: 2025 })
        );
    }

    #[test]
    fn unknown_frequency_is_rejected() {
        assert!(matches!(
            SalesReportPeriod::from_frequency("WEEKLY", 2025, None),
            Err(ReportsServiceError::InvalidFrequency(f)) if f == "WEEKLY"
        ));
    }
}
