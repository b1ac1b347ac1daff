//! Loose, multi-field text search over transactions.

use crate::{
    format::{format_date_short, format_time_12_hour},
    transaction::Transaction,
    zone::LocalZone,
};

/// A normalized, non-blank search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Trim and lower-case `raw`.
    ///
    /// Returns `None` for an empty or whitespace-only term, which matches
    /// every transaction.
    pub fn new(raw: &str) -> Option<Self> {
        let term = raw.trim().to_lowercase();

        if term.is_empty() {
            None
        } else {
            Some(Self(term))
        }
    }

    /// The normalized term.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether any searchable field of `transaction` contains the term.
    ///
    /// The fields are the id, the payment method, the reference, the amount in
    /// minor units, the local date (`d/m/yyyy`), the local 12-hour time
    /// (`hh:mm a. m.`), date and time joined by a space, and the franchise if
    /// present. Dates and times are taken in `zone` at the transaction's own
    /// instant.
    pub fn matches(&self, transaction: &Transaction, zone: LocalZone) -> bool {
        let term = self.as_str();

        if transaction.id.to_lowercase().contains(term)
            || transaction
                .payment_method
                .as_str()
                .to_lowercase()
                .contains(term)
            || transaction.transaction_reference.to_string().contains(term)
            || transaction.amount.to_string().contains(term)
        {
            return true;
        }

        let date = format_date_short(transaction.created_at, zone);
        let time = format_time_12_hour(transaction.created_at, zone);

        if date.contains(term) || time.contains(term) || format!("{date} {time}").contains(term) {
            return true;
        }

        transaction
            .franchise
            .is_some_and(|franchise| franchise.as_str().to_lowercase().contains(term))
    }
}

/// Whether `transaction` matches the free-text `term`.
///
/// A blank term matches everything. See [SearchTerm::matches] for the fields
/// searched.
pub fn matches_search(
    transaction: &Transaction,
    term: &str,
    zone: impl Into<LocalZone>,
) -> bool {
    match SearchTerm::new(term) {
        Some(term) => term.matches(transaction, zone.into()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{datetime, offset};

    use super::{SearchTerm, matches_search};
    use crate::{
        transaction::{CardFranchise, PaymentMethod, Transaction},
        zone::LocalZone,
    };

    fn test_transaction() -> Transaction {
        Transaction::build("GZEN23784UBV2", 2_500_000, datetime!(2024-10-20 14:05 UTC))
            .payment_method(PaymentMethod::Daviplata)
            .reference(8786)
            .finalise()
    }

    #[test]
    fn blank_term_matches_everything() {
        let transaction = test_transaction();

        assert!(matches_search(&transaction, "", offset!(UTC)));
        assert!(matches_search(&transaction, "   \t", offset!(UTC)));
    }

    #[test]
    fn blank_term_normalizes_to_none() {
        assert_eq!(SearchTerm::new("  "), None);
    }

    #[test]
    fn term_is_trimmed_and_lower_cased() {
        assert_eq!(SearchTerm::new("  ViSa ").unwrap().as_str(), "visa");
    }

    #[test]
    fn matches_id_case_insensitively() {
        assert!(matches_search(&test_transaction(), "gzen23", offset!(UTC)));
    }

    #[test]
    fn matches_payment_method() {
        assert!(matches_search(&test_transaction(), "Davi", offset!(UTC)));
    }

    #[test]
    fn matches_reference() {
        assert!(matches_search(&test_transaction(), "878", offset!(UTC)));
    }

    #[test]
    fn matches_raw_amount_in_minor_units() {
        assert!(matches_search(&test_transaction(), "2500000", offset!(UTC)));
    }

    #[test]
    fn does_not_match_formatted_amount() {
        assert!(!matches_search(&test_transaction(), "25.000", offset!(UTC)));
    }

    #[test]
    fn matches_local_date() {
        assert!(matches_search(&test_transaction(), "20/10/2024", offset!(UTC)));
    }

    #[test]
    fn matches_local_time() {
        assert!(matches_search(&test_transaction(), "09:05", offset!(-5)));
    }

    #[test]
    fn matches_date_and_time_joined_by_space() {
        assert!(matches_search(
            &test_transaction(),
            "2024 09:05",
            offset!(-5)
        ));
    }

    #[test]
    fn matches_franchise_when_present() {
        let transaction = Transaction::build("abc", 100, datetime!(2024-10-20 14:05 UTC))
            .card(CardFranchise::AmericanExpress)
            .finalise();

        assert!(matches_search(&transaction, "american", offset!(UTC)));
    }

    #[test]
    fn franchise_absent_does_not_match() {
        assert!(!matches_search(&test_transaction(), "visa", offset!(UTC)));
    }

    #[test]
    fn unrelated_term_does_not_match() {
        assert!(!matches_search(&test_transaction(), "nequi", offset!(UTC)));
    }

    #[test]
    fn matches_unpadded_colombian_date() {
        let transaction =
            Transaction::build("abc", 100, datetime!(2024-03-05 19:07 UTC)).finalise();

        assert!(matches_search(&transaction, "5/3/2024", offset!(-5)));
        assert!(!matches_search(&transaction, "05/03/2024", offset!(-5)));
    }

    #[test]
    fn matches_twelve_hour_time_with_period() {
        let transaction =
            Transaction::build("abc", 100, datetime!(2024-03-05 19:07 UTC)).finalise();

        assert!(matches_search(&transaction, "02:07", offset!(-5)));
        assert!(matches_search(&transaction, "P. M.", offset!(-5)));
        assert!(matches_search(&transaction, "5/3/2024 02:07 p. m.", offset!(-5)));
        assert!(!matches_search(&transaction, "14:07", offset!(-5)));
    }

    #[test]
    fn matches_time_in_summer_when_zone_has_daylight_saving() {
        // 04:30 UTC on 1 October 2025 is 00:30 EDT.
        let transaction =
            Transaction::build("abc", 100, datetime!(2025-10-01 04:30 UTC)).finalise();
        let new_york = LocalZone::named("America/New_York").unwrap();

        assert!(matches_search(&transaction, "12:30 a. m.", new_york));
        assert!(matches_search(&transaction, "1/10/2025", new_york));
    }
}
