//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::ValidationError;

/// Date format accepted from forms and API clients
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub author_id: i64,
    pub author_name: String,
    pub birth_date: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
}

/// Create author request, as submitted by the form or the API
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateAuthor {
    #[validate(required, length(max = 200))]
    pub name: Option<String>,
    /// Birth date (YYYY-MM-DD)
    #[serde(alias = "birthdate")]
    #[validate(required)]
    pub birth_date: Option<String>,
    /// Optional date of death (YYYY-MM-DD)
    pub date_of_death: Option<String>,
}

impl CreateAuthor {
    pub const FIELDS: &'static [&'static str] = &["name", "birth_date"];

    /// Trim every field; blank values become absent.
    pub fn normalized(self) -> Self {
        Self {
            name: super::non_blank(self.name),
            birth_date: super::non_blank(self.birth_date),
            date_of_death: super::non_blank(self.date_of_death),
        }
    }
}

/// Validated author, ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub birth_date: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
}

/// Birth and death dates that passed the chronology checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeDates {
    pub birth_date: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
}

impl LifeDates {
    /// Parse and check the dates of an author relative to `today`.
    ///
    /// Checks run in order and the first failure is returned:
    /// birth date format, birth date not in the future, then (if given)
    /// death date format, death not before birth, death not in the future.
    pub fn parse(
        birth_date: &str,
        date_of_death: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let birth_date = parse_date("birth_date", birth_date)?;
        if birth_date > today {
            return Err(ValidationError::FutureBirthDate);
        }

        let date_of_death = match date_of_death {
            Some(raw) => {
                let death = parse_date("date_of_death", raw)?;
                if death < birth_date {
                    return Err(ValidationError::DeathBeforeBirth);
                }
                if death > today {
                    return Err(ValidationError::FutureDeathDate);
                }
                Some(death)
            }
            None => None,
        };

        Ok(Self {
            birth_date,
            date_of_death,
        })
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::MalformedDate {
        field,
        value: value.to_string(),
    })
}
