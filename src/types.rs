use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::ConvertError;

/// Statement layout selected by the user. Never inferred from the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Girokonto,
    Visa,
    GirokontoNeu,
}

impl AccountType {
    pub const ALL: [AccountType; 3] = [
        AccountType::Girokonto,
        AccountType::Visa,
        AccountType::GirokontoNeu,
    ];

    /// Account summary lines the bank puts above the header row.
    pub fn preamble_lines(&self) -> usize {
        match self {
            AccountType::Girokonto | AccountType::Visa => 6,
            AccountType::GirokontoNeu => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Girokonto => "GIROKONTO",
            AccountType::Visa => "VISA",
            AccountType::GirokontoNeu => "GIROKONTO_NEU",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");

        AccountType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ConvertError::UnsupportedAccountType(s.to_string()))
    }
}

/// One line of a YNAB4 import file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YnabRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Payee")]
    pub payee: String,
    #[serde(rename = "Memo")]
    pub memo: String,
    #[serde(rename = "Outflow")]
    pub outflow: String,
    #[serde(rename = "Inflow")]
    pub inflow: String,
}

impl YnabRow {
    pub const HEADER: [&'static str; 5] = ["Date", "Payee", "Memo", "Outflow", "Inflow"];

    /// Fields in output column order.
    pub fn fields(&self) -> [&str; 5] {
        [
            self.date.as_str(),
            self.payee.as_str(),
            self.memo.as_str(),
            self.outflow.as_str(),
            self.inflow.as_str(),
        ]
    }
}
