use log::trace;

use super::{
    amount::Amount,
    date::DateStyle,
    text::{extract_paypal_store, is_paypal, normalize_text},
};
use crate::{
    errors::{ConvertError, ConvertResult},
    types::{AccountType, YnabRow},
};

/// Maps one source row onto a [`YnabRow`]. Stateless apart from its options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowTransformer {
    date_style: DateStyle,
}

impl RowTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_style(mut self, date_style: DateStyle) -> Self {
        self.date_style = date_style;
        self
    }

    pub fn date_style(&self) -> DateStyle {
        self.date_style
    }

    pub fn transform<S: AsRef<str>>(
        &self,
        row: &[S],
        account_type: AccountType,
    ) -> ConvertResult<YnabRow> {
        let layout = account_type.layout();

        let found = layout.effective_len(row);
        if found != layout.arity {
            return Err(ConvertError::Schema {
                account_type,
                expected: layout.arity,
                found,
            });
        }

        let amount = Amount::parse_german(row[layout.amount].as_ref())?;
        let date = self.date_style.apply(row[layout.date].as_ref())?;

        let outflow = !amount.is_zero() && layout.is_outflow(amount.is_negative());
        let memo = layout
            .memo
            .map(|i| normalize_text(row[i].as_ref()))
            .unwrap_or_default();
        let mut payee = normalize_text(row[layout.payee_index(outflow)].as_ref());

        if is_paypal(&payee) {
            if let Some(store) = extract_paypal_store(&memo) {
                payee = store;
            }
        }

        let (outflow, inflow) = match (amount.is_zero(), outflow) {
            (true, _) => (String::new(), String::new()),
            (false, true) => (amount.magnitude(), String::new()),
            (false, false) => (String::new(), amount.magnitude()),
        };

        let out = YnabRow {
            date,
            payee,
            memo,
            outflow,
            inflow,
        };
        trace!(
            "{account_type}: {:?} -> {:?}",
            row.iter().map(|f| f.as_ref()).collect::<Vec<&str>>(),
            out
        );

        Ok(out)
    }
}

/// [`RowTransformer::transform`] with default options.
pub fn transform<S: AsRef<str>>(row: &[S], account_type: AccountType) -> ConvertResult<YnabRow> {
    RowTransformer::new().transform(row, account_type)
}
