//! Fishing calendar - Open seasons, bans and catch limits per species

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::SpeciesId};

/// A recurring calendar day, written `MM-DD`
///
/// 29 February is rejected so that every day exists in every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// # Errors
    ///
    /// Returns `ValidationError` if the day does not exist in a common year.
    pub fn new(month: u32, day: u32) -> Result<Self, DomainError> {
        if NaiveDate::from_ymd_opt(2001, month, day).is_none() {
            return Err(DomainError::ValidationError(format!(
                "{month:02}-{day:02} is not a valid calendar day"
            )));
        }
        Ok(Self { month, day })
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn day(self) -> u32 {
        self.day
    }

    /// The date of this day in the given year
    #[must_use]
    pub fn in_year(self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::ValidationError(format!("'{s}' is not an MM-DD day"));
        let (month, day) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month = month.parse().map_err(|_| invalid())?;
        let day = day.parse().map_err(|_| invalid())?;
        Self::new(month, day)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(day: MonthDay) -> Self {
        day.to_string()
    }
}

/// A ban inside the open season (e.g. spawning protection)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedPeriod {
    pub from: MonthDay,
    pub until: MonthDay,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Regulations for one species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub species: SpeciesId,
    pub opens: MonthDay,
    pub closes: MonthDay,
    /// Zone references where the regulation applies
    pub zones: Vec<String>,
    #[serde(default)]
    pub min_size_cm: Option<u32>,
    #[serde(default)]
    pub daily_limit: Option<u32>,
    #[serde(default)]
    pub closed_periods: Vec<ClosedPeriod>,
    /// Catches must not be released (invasive species)
    #[serde(default)]
    pub removal_required: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CalendarEntry {
    /// Check that the season and bans do not wrap the year end
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if a window is inverted or a ban lies outside
    /// the open season.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.opens > self.closes {
            return Err(DomainError::invalid_catalog(format!(
                "calendar for '{}' opens {} after it closes {}",
                self.species, self.opens, self.closes
            )));
        }
        for period in &self.closed_periods {
            if period.from > period.until
                || period.from < self.opens
                || period.until > self.closes
            {
                return Err(DomainError::invalid_catalog(format!(
                    "calendar for '{}' has an invalid ban {}..{}",
                    self.species, period.from, period.until
                )));
            }
        }
        Ok(())
    }

    /// Regulatory status on a given day
    #[must_use]
    pub fn status_on(&self, today: NaiveDate) -> SeasonStatus {
        let year = today.year();
        let (Some(opens), Some(closes)) = (self.opens.in_year(year), self.closes.in_year(year))
        else {
            return SeasonStatus::Closed;
        };
        if today < opens {
            return SeasonStatus::NotYetOpen {
                days_until: (opens - today).num_days(),
            };
        }
        if today > closes {
            return SeasonStatus::Closed;
        }
        for period in &self.closed_periods {
            if let (Some(from), Some(until)) =
                (period.from.in_year(year), period.until.in_year(year))
            {
                if (from..=until).contains(&today) {
                    return SeasonStatus::Suspended { until };
                }
            }
        }
        SeasonStatus::Open {
            days_remaining: (closes - today).num_days(),
        }
    }
}

/// Status of a species' season on a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeasonStatus {
    Open { days_remaining: i64 },
    Suspended { until: NaiveDate },
    NotYetOpen { days_until: i64 },
    Closed,
}

impl SeasonStatus {
    /// Fishing is allowed today
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

impl fmt::Display for SeasonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { days_remaining } => write!(f, "Open ({days_remaining} days left)"),
            Self::Suspended { until } => write!(f, "Suspended until {}", until.format("%d/%m")),
            Self::NotYetOpen { days_until } => write!(f, "Opens in {days_until} days"),
            Self::Closed => f.write_str("Closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, d).unwrap()
    }

    fn trout() -> CalendarEntry {
        CalendarEntry {
            species: SpeciesId::new("trota_fario").unwrap(),
            opens: "03-01".parse().unwrap(),
            closes: "09-30".parse().unwrap(),
            zones: vec!["panperduto".into()],
            min_size_cm: Some(22),
            daily_limit: Some(5),
            closed_periods: Vec::new(),
            removal_required: false,
            notes: None,
        }
    }

    fn pike() -> CalendarEntry {
        CalendarEntry {
            species: SpeciesId::new("luccio").unwrap(),
            opens: "01-01".parse().unwrap(),
            closes: "12-31".parse().unwrap(),
            zones: vec!["maggiore".into()],
            min_size_cm: Some(50),
            daily_limit: None,
            closed_periods: vec![ClosedPeriod {
                from: "03-15".parse().unwrap(),
                until: "05-31".parse().unwrap(),
                reason: Some("spawning".into()),
            }],
            removal_required: false,
            notes: None,
        }
    }

    #[test]
    fn month_day_parsing() {
        assert_eq!("03-15".parse::<MonthDay>().unwrap().to_string(), "03-15");
        assert!("02-29".parse::<MonthDay>().is_err());
        assert!("13-01".parse::<MonthDay>().is_err());
        assert!("0315".parse::<MonthDay>().is_err());
    }

    #[test]
    fn trout_status_through_the_year() {
        let entry = trout();
        assert_eq!(
            entry.status_on(day(2, 20)),
            SeasonStatus::NotYetOpen { days_until: 9 }
        );
        assert_eq!(
            entry.status_on(day(9, 20)),
            SeasonStatus::Open { days_remaining: 10 }
        );
        assert_eq!(entry.status_on(day(10, 1)), SeasonStatus::Closed);
    }

    #[test]
    fn pike_is_suspended_during_spawning() {
        let entry = pike();
        assert_eq!(
            entry.status_on(day(4, 10)),
            SeasonStatus::Suspended { until: day(5, 31) }
        );
        assert!(entry.status_on(day(6, 1)).is_open());
    }

    #[test]
    fn validate_rejects_ban_outside_season() {
        let mut entry = trout();
        entry.closed_periods.push(ClosedPeriod {
            from: "01-01".parse().unwrap(),
            until: "01-31".parse().unwrap(),
            reason: None,
        });
        assert!(entry.validate().is_err());
        assert!(pike().validate().is_ok());
    }

    #[test]
    fn status_display() {
        assert_eq!(SeasonStatus::Closed.to_string(), "Closed");
        assert_eq!(
            SeasonStatus::Suspended { until: day(5, 31) }.to_string(),
            "Suspended until 31/05"
        );
    }
}
