//! Source column layouts, one per [`AccountType`].

use crate::types::AccountType;

/// Where the payee comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayeeColumn {
    Fixed(usize),
    /// Newer checking exports keep payer and recipient in separate columns.
    BySign { outflow: usize, inflow: usize },
}

/// How the raw amount sign maps onto Outflow/Inflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignConvention {
    /// Negative amounts are money out (checking accounts).
    NegativeIsOutflow,
    /// Positive amounts are money out (card statements list charges as positive).
    PositiveIsOutflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub arity: usize,
    pub date: usize,
    pub payee: PayeeColumn,
    pub memo: Option<usize>,
    pub amount: usize,
    pub sign: SignConvention,
}

/// `Date; Payee; Memo; Amount`
pub const GIROKONTO: ColumnLayout = ColumnLayout {
    arity: 4,
    date: 0,
    payee: PayeeColumn::Fixed(1),
    memo: Some(2),
    amount: 3,
    sign: SignConvention::NegativeIsOutflow,
};

/// `Umsatz abgerechnet; Wertstellung; Belegdatum; Beschreibung; Betrag (EUR);
/// Ursprünglicher Betrag`
pub const VISA: ColumnLayout = ColumnLayout {
    arity: 6,
    date: 1,
    payee: PayeeColumn::Fixed(3),
    memo: None,
    amount: 4,
    sign: SignConvention::PositiveIsOutflow,
};

/// `Buchungsdatum; Wertstellung; Status; Zahlungspflichtige*r;
/// Zahlungsempfänger*in; Verwendungszweck; Umsatztyp; IBAN; Betrag (€);
/// Gläubiger-ID; Mandatsreferenz; Kundenreferenz`
pub const GIROKONTO_NEU: ColumnLayout = ColumnLayout {
    arity: 12,
    date: 1,
    payee: PayeeColumn::BySign {
        outflow: 4,
        inflow: 3,
    },
    memo: Some(5),
    amount: 8,
    sign: SignConvention::NegativeIsOutflow,
};

impl AccountType {
    pub fn layout(&self) -> &'static ColumnLayout {
        match self {
            AccountType::Girokonto => &GIROKONTO,
            AccountType::Visa => &VISA,
            AccountType::GirokontoNeu => &GIROKONTO_NEU,
        }
    }
}

impl ColumnLayout {
    /// Field count once trailing empty fields beyond the layout are dropped.
    /// Bank exports end every line with the delimiter.
    pub fn effective_len<S: AsRef<str>>(&self, row: &[S]) -> usize {
        let mut len = row.len();
        while len > self.arity && row[len - 1].as_ref().trim().is_empty() {
            len -= 1;
        }
        len
    }

    pub fn is_outflow(&self, negative: bool) -> bool {
        match self.sign {
            SignConvention::NegativeIsOutflow => negative,
            SignConvention::PositiveIsOutflow => !negative,
        }
    }

    pub fn payee_index(&self, outflow: bool) -> usize {
        match self.payee {
            PayeeColumn::Fixed(index) => index,
            PayeeColumn::BySign { outflow: out, inflow } => {
                if outflow {
                    out
                } else {
                    inflow
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AccountType::Girokonto, 4)]
    #[case(AccountType::Visa, 6)]
    #[case(AccountType::GirokontoNeu, 12)]
    fn test_layout_indices_within_arity(#[case] kind: AccountType, #[case] arity: usize) {
        let layout = kind.layout();
        assert_eq!(layout.arity, arity);
        assert!(layout.date < arity);
        assert!(layout.amount < arity);
        assert!(layout.memo.is_none_or(|m| m < arity));
        assert!(layout.payee_index(true) < arity);
        assert!(layout.payee_index(false) < arity);
    }

    #[rstest]
    #[case(vec!["a", "b", "c", "d"], 4)]
    #[case(vec!["a", "b", "c", "d", ""], 4)]
    #[case(vec!["a", "b", "c", "d", "", " "], 4)]
    #[case(vec!["a", "b", "c", "d", "e"], 5)]
    #[case(vec!["a", "", ""], 3)]
    fn test_effective_len(#[case] row: Vec<&str>, #[case] expected: usize) {
        assert_eq!(GIROKONTO.effective_len(&row), expected);
    }

    #[test]
    fn test_visa_sign_is_inverted() {
        assert!(GIROKONTO.is_outflow(true));
        assert!(!GIROKONTO.is_outflow(false));
        assert!(!VISA.is_outflow(true));
        assert!(VISA.is_outflow(false));
    }

    #[test]
    fn test_girokonto_neu_payee_by_sign() {
        assert_eq!(GIROKONTO_NEU.payee_index(true), 4);
        assert_eq!(GIROKONTO_NEU.payee_index(false), 3);
    }
}
