use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::{Validate, ValidationError};

use crate::dto::entity::TokenSetInput;
use crate::models::draw_time::{DrawTimeCatalog, DrawTimeId};
use crate::{Result, SharedError};

lazy_static! {
    // ASCII digits only; `\d` would also match other scripts' digits.
    static ref DIGITS_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref POSITIVE_INTEGER_REGEX: Regex = Regex::new(r"^[1-9][0-9]*$").unwrap();
}

pub const TOKEN_NUMBER_MAX_DIGITS: usize = 2;
/// Upper bound on the numeric value of a row's count.
pub const TOKEN_COUNT_MAX: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenField {
    TokenNumber,
    Count,
    DrawTime,
    Date,
}

impl TokenField {
    pub const ALL: [TokenField; 4] = [
        TokenField::TokenNumber,
        TokenField::Count,
        TokenField::DrawTime,
        TokenField::Date,
    ];

    /// Wire/form name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            TokenField::TokenNumber => "tokenNumber",
            TokenField::Count => "count",
            TokenField::DrawTime => "drawTime",
            TokenField::Date => "date",
        }
    }

    /// Accepts both the Rust field name reported by `validator` and the wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "token_number" | "tokenNumber" => Some(TokenField::TokenNumber),
            "count" => Some(TokenField::Count),
            "draw_time" | "drawTime" => Some(TokenField::DrawTime),
            "date" => Some(TokenField::Date),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    Required,
    NotNumeric,
    TooLong,
    NotPositiveInteger,
    AboveMaximum,
    UnknownDrawTime,
}

impl FieldErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            FieldErrorKind::Required => "required",
            FieldErrorKind::NotNumeric => "not_numeric",
            FieldErrorKind::TooLong => "too_long",
            FieldErrorKind::NotPositiveInteger => "not_positive_integer",
            FieldErrorKind::AboveMaximum => "above_maximum",
            FieldErrorKind::UnknownDrawTime => "unknown_draw_time",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "required" => Some(FieldErrorKind::Required),
            "not_numeric" => Some(FieldErrorKind::NotNumeric),
            "too_long" => Some(FieldErrorKind::TooLong),
            "not_positive_integer" => Some(FieldErrorKind::NotPositiveInteger),
            "above_maximum" => Some(FieldErrorKind::AboveMaximum),
            "unknown_draw_time" => Some(FieldErrorKind::UnknownDrawTime),
            _ => None,
        }
    }

    pub fn message(&self, field: TokenField) -> &'static str {
        match (field, self) {
            (TokenField::TokenNumber, FieldErrorKind::Required) => "Token Number is required",
            (TokenField::TokenNumber, FieldErrorKind::NotNumeric) => "Token Number must be a number",
            (TokenField::TokenNumber, FieldErrorKind::TooLong) => "Token Number cannot be more than 2 digits",
            (TokenField::Count, FieldErrorKind::Required) => "Token Count is required",
            (TokenField::Count, FieldErrorKind::NotPositiveInteger) => {
                "Token Count must be a number greater than 0"
            }
            (TokenField::Count, FieldErrorKind::AboveMaximum) => "Token Count cannot be more than 1000",
            (TokenField::DrawTime, FieldErrorKind::Required) => "Draw Time is required",
            (TokenField::DrawTime, FieldErrorKind::UnknownDrawTime) => {
                "Draw Time must be one of the available draw times"
            }
            (TokenField::Date, _) => "Select a date",
            _ => "Invalid value",
        }
    }
}

fn field_error(kind: FieldErrorKind, field: TokenField) -> ValidationError {
    let mut error = ValidationError::new(kind.code());
    error.message = Some(Cow::Borrowed(kind.message(field)));
    error
}

pub fn validate_token_number(value: &str) -> std::result::Result<(), ValidationError> {
    let field = TokenField::TokenNumber;
    if value.is_empty() {
        return Err(field_error(FieldErrorKind::Required, field));
    }
    if !DIGITS_REGEX.is_match(value) {
        return Err(field_error(FieldErrorKind::NotNumeric, field));
    }
    if value.chars().count() > TOKEN_NUMBER_MAX_DIGITS {
        return Err(field_error(FieldErrorKind::TooLong, field));
    }
    Ok(())
}

pub fn validate_count(value: &str) -> std::result::Result<(), ValidationError> {
    let field = TokenField::Count;
    if value.is_empty() {
        return Err(field_error(FieldErrorKind::Required, field));
    }
    if !POSITIVE_INTEGER_REGEX.is_match(value) {
        return Err(field_error(FieldErrorKind::NotPositiveInteger, field));
    }
    // Digit strings too long for u64 are certainly above the bound.
    match value.parse::<u64>() {
        Ok(n) if n <= TOKEN_COUNT_MAX => Ok(()),
        _ => Err(field_error(FieldErrorKind::AboveMaximum, field)),
    }
}

/// One in-progress row of the add-token form.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct TokenSetDraft {
    #[validate(custom = "validate_token_number")]
    pub token_number: String,

    #[validate(custom = "validate_count")]
    pub count: String,

    /// Referenced by id; the time-of-day string is looked up when rendering
    /// and when building the create payload.
    #[validate(required(message = "Draw Time is required"))]
    pub draw_time: Option<DrawTimeId>,

    #[validate(required(message = "Select a date"))]
    pub date: Option<NaiveDate>,
}

impl TokenSetDraft {
    pub fn new(draw_time: Option<DrawTimeId>, date: Option<NaiveDate>) -> Self {
        Self {
            token_number: String::new(),
            count: String::new(),
            draw_time,
            date,
        }
    }

    /// First failing rule per field.
    ///
    /// Draw-time membership is only checked against a non-empty catalog so a
    /// failed draw-time fetch does not make every row unsubmittable on its own.
    pub fn field_errors(&self, catalog: &DrawTimeCatalog) -> BTreeMap<TokenField, FieldErrorKind> {
        let mut found = BTreeMap::new();

        if let Err(errors) = self.validate() {
            for (name, field_errors) in errors.field_errors() {
                let Some(field) = TokenField::from_name(name) else {
                    continue;
                };
                let kind = field_errors
                    .first()
                    .and_then(|e| FieldErrorKind::from_code(&e.code))
                    .unwrap_or(FieldErrorKind::Required);
                found.insert(field, kind);
            }
        }

        if let Some(id) = &self.draw_time {
            if !catalog.is_empty() && !catalog.contains(id) {
                found.insert(TokenField::DrawTime, FieldErrorKind::UnknownDrawTime);
            }
        }

        found
    }

    /// Wire form of a row that has passed validation.
    pub fn to_input(&self, catalog: &DrawTimeCatalog) -> Result<TokenSetInput> {
        let draw_time_id = self
            .draw_time
            .as_ref()
            .ok_or_else(|| SharedError::MissingField("drawTime".to_string()))?;
        let draw_time = catalog
            .label(draw_time_id)
            .ok_or_else(|| SharedError::Validation(format!("unknown draw time {}", draw_time_id)))?;
        let date = self
            .date
            .ok_or_else(|| SharedError::MissingField("date".to_string()))?;

        Ok(TokenSetInput {
            token_number: self.token_number.clone(),
            count: self.count.clone(),
            draw_time: draw_time.to_string(),
            date,
        })
    }
}

/// Validation outcome for the whole row sequence, keyed by row index and field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<(usize, TokenField), FieldErrorKind>,
}

impl FormErrors {
    pub fn collect(rows: &[TokenSetDraft], catalog: &DrawTimeCatalog) -> Self {
        let mut errors = BTreeMap::new();
        for (index, row) in rows.iter().enumerate() {
            for (field, kind) in row.field_errors(catalog) {
                errors.insert((index, field), kind);
            }
        }
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, row: usize, field: TokenField) -> Option<FieldErrorKind> {
        self.errors.get(&(row, field)).copied()
    }

    pub fn message(&self, row: usize, field: TokenField) -> Option<&'static str> {
        self.get(row, field).map(|kind| kind.message(field))
    }

    pub fn rows_with_errors(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.errors.keys().map(|(row, _)| *row).collect();
        rows.dedup();
        rows
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, TokenField, FieldErrorKind)> + '_ {
        self.errors.iter().map(|((row, field), kind)| (*row, *field, *kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::draw_time::DrawTime;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn catalog() -> DrawTimeCatalog {
        DrawTimeCatalog::new(vec![DrawTime::new("d1", "10:00"), DrawTime::new("d2", "14:30")])
    }

    fn valid_row() -> TokenSetDraft {
        TokenSetDraft {
            token_number: "42".to_string(),
            count: "10".to_string(),
            draw_time: Some("d2".into()),
            date: NaiveDate::from_ymd_opt(2024, 3, 5),
        }
    }

    #[test_case("7" ; "one digit")]
    #[test_case("42" ; "two digits")]
    #[test_case("00" ; "leading zero allowed")]
    fn test_token_number_accepts(value: &str) {
        assert!(validate_token_number(value).is_ok());
    }

    #[test_case("", FieldErrorKind::Required ; "empty")]
    #[test_case("abc", FieldErrorKind::NotNumeric ; "letters")]
    #[test_case("4 2", FieldErrorKind::NotNumeric ; "inner space")]
    #[test_case("-1", FieldErrorKind::NotNumeric ; "negative")]
    #[test_case("123", FieldErrorKind::TooLong ; "three digits")]
    #[test_case("٤٢", FieldErrorKind::NotNumeric ; "arabic indic digits")]
    #[test_case("４２", FieldErrorKind::NotNumeric ; "fullwidth digits")]
    fn test_token_number_rejects(value: &str, expected: FieldErrorKind) {
        let err = validate_token_number(value).unwrap_err();
        assert_eq!(FieldErrorKind::from_code(&err.code), Some(expected));
    }

    #[test_case("1" ; "one")]
    #[test_case("250" ; "middle")]
    #[test_case("1000" ; "upper bound")]
    fn test_count_accepts(value: &str) {
        assert!(validate_count(value).is_ok());
    }

    #[test_case("", FieldErrorKind::Required ; "empty")]
    #[test_case("0", FieldErrorKind::NotPositiveInteger ; "zero")]
    #[test_case("01", FieldErrorKind::NotPositiveInteger ; "leading zero")]
    #[test_case("-5", FieldErrorKind::NotPositiveInteger ; "negative")]
    #[test_case("ten", FieldErrorKind::NotPositiveInteger ; "letters")]
    #[test_case("1.5", FieldErrorKind::NotPositiveInteger ; "decimal")]
    #[test_case("1٠", FieldErrorKind::NotPositiveInteger ; "arabic indic zero")]
    #[test_case("５", FieldErrorKind::NotPositiveInteger ; "fullwidth digit")]
    #[test_case("1001", FieldErrorKind::AboveMaximum ; "just above bound")]
    #[test_case("99999999999999999999999", FieldErrorKind::AboveMaximum ; "overflows u64")]
    fn test_count_rejects(value: &str, expected: FieldErrorKind) {
        let err = validate_count(value).unwrap_err();
        assert_eq!(FieldErrorKind::from_code(&err.code), Some(expected));
    }

    #[test]
    fn test_valid_row_has_no_errors() {
        assert!(valid_row().field_errors(&catalog()).is_empty());
    }

    #[test]
    fn test_blank_row_reports_every_field_as_required() {
        let row = TokenSetDraft::new(None, None);
        let errors = row.field_errors(&catalog());
        assert_eq!(errors.len(), 4);
        assert!(errors.values().all(|k| *k == FieldErrorKind::Required));
    }

    #[test]
    fn test_unknown_draw_time_only_checked_against_loaded_catalog() {
        let mut row = valid_row();
        row.draw_time = Some("gone".into());
        assert_eq!(
            row.field_errors(&catalog()).get(&TokenField::DrawTime),
            Some(&FieldErrorKind::UnknownDrawTime)
        );
        assert!(row.field_errors(&DrawTimeCatalog::default()).is_empty());
    }

    #[test]
    fn test_form_errors_are_keyed_by_row_and_field() {
        let mut second = valid_row();
        second.count = "0".to_string();
        let rows = vec![valid_row(), second];
        let errors = FormErrors::collect(&rows, &catalog());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(1, TokenField::Count), Some(FieldErrorKind::NotPositiveInteger));
        assert_eq!(
            errors.message(1, TokenField::Count),
            Some("Token Count must be a number greater than 0")
        );
        assert_eq!(errors.get(0, TokenField::Count), None);
        assert_eq!(errors.rows_with_errors(), vec![1]);
    }

    #[test]
    fn test_to_input_resolves_draw_time_label() {
        let input = valid_row().to_input(&catalog()).unwrap();
        assert_eq!(input.draw_time, "14:30");
        assert_eq!(input.token_number, "42");
        assert_eq!(input.count, "10");
    }

    #[test]
    fn test_to_input_without_draw_time_fails() {
        let mut row = valid_row();
        row.draw_time = None;
        assert!(matches!(row.to_input(&catalog()), Err(SharedError::MissingField(_))));
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in TokenField::ALL {
            assert_eq!(TokenField::from_name(field.name()), Some(field));
        }
    }
}
