use chrono::NaiveDate;

use crate::errors::{ConvertError, ConvertResult};

/// Como a data de origem é escrita no arquivo YNAB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// Mantém o texto original do banco
    #[default]
    Keep,
    /// Converte para `DD/MM/YY`
    Ynab,
}

impl DateStyle {
    pub fn apply(&self, raw: &str) -> ConvertResult<String> {
        match self {
            DateStyle::Keep => Ok(raw.trim().to_string()),
            DateStyle::Ynab => {
                parse_source_date(raw).map(|date| date.format("%d/%m/%y").to_string())
            }
        }
    }
}

/// Aceita as variantes de data dos extratos alemães.
///
/// Os formatos com ano de dois dígitos são tentados primeiro: `%Y` aceitaria
/// "26" como o ano 26.
pub fn parse_source_date(raw: &str) -> ConvertResult<NaiveDate> {
    const FORMATS: [&str; 4] = ["%d.%m.%y", "%d/%m/%y", "%d.%m.%Y", "%d/%m/%Y"];

    let s = raw.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| ConvertError::InvalidDate(raw.to_string()))
}
