/// Collapses whitespace runs into single spaces and trims the ends.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

const PAYPAL_MARKER: &str = "Ihr Einkauf bei ";

/// PayPal debits name PayPal as the payee; the real store is in the memo:
/// `..., Ihr Einkauf bei <store>, ...`.
pub fn extract_paypal_store(memo: &str) -> Option<String> {
    let start = memo.find(PAYPAL_MARKER)? + PAYPAL_MARKER.len();
    let rest = &memo[start..];
    let store = rest.split(',').next().unwrap_or(rest).trim();

    (!store.is_empty()).then(|| store.to_string())
}

pub fn is_paypal(payee: &str) -> bool {
    payee.to_lowercase().contains("paypal")
}
