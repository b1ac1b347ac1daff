//! Sales channel membership for the transaction type filter.

use std::collections::BTreeSet;

use crate::{filter_state::TransactionTypeFilter, transaction::SalesType};

/// Whether a transaction sold through `sales_type` passes the `selected` tags.
///
/// An empty selection, or one containing [TransactionTypeFilter::All], is a
/// wildcard. Unrecognized tags never match on their own.
pub fn matches_transaction_type(
    sales_type: SalesType,
    selected: &BTreeSet<TransactionTypeFilter>,
) -> bool {
    if selected.is_empty() || selected.contains(&TransactionTypeFilter::All) {
        return true;
    }

    selected.iter().any(|tag| tag_selects(*tag, sales_type))
}

fn tag_selects(tag: TransactionTypeFilter, sales_type: SalesType) -> bool {
    match tag {
        TransactionTypeFilter::Terminal => sales_type == SalesType::Terminal,
        TransactionTypeFilter::PaymentLink => sales_type == SalesType::PaymentLink,
        TransactionTypeFilter::All => true,
        TransactionTypeFilter::Unrecognized => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::matches_transaction_type;
    use crate::{filter_state::TransactionTypeFilter, transaction::SalesType};

    #[test]
    fn empty_selection_matches_everything() {
        let selected = BTreeSet::new();

        assert!(matches_transaction_type(SalesType::Terminal, &selected));
        assert!(matches_transaction_type(SalesType::PaymentLink, &selected));
    }

    #[test]
    fn all_matches_everything_even_with_other_tags() {
        let selected = BTreeSet::from([TransactionTypeFilter::Terminal, TransactionTypeFilter::All]);

        assert!(matches_transaction_type(SalesType::PaymentLink, &selected));
    }

    #[test]
    fn terminal_only_matches_terminal() {
        let selected = BTreeSet::from([TransactionTypeFilter::Terminal]);

        assert!(matches_transaction_type(SalesType::Terminal, &selected));
        assert!(!matches_transaction_type(SalesType::PaymentLink, &selected));
    }

    #[test]
    fn payment_link_only_matches_payment_link() {
        let selected = BTreeSet::from([TransactionTypeFilter::PaymentLink]);

        assert!(matches_transaction_type(SalesType::PaymentLink, &selected));
        assert!(!matches_transaction_type(SalesType::Terminal, &selected));
    }

    #[test]
    fn both_channels_match_both() {
        let selected = BTreeSet::from([
            TransactionTypeFilter::Terminal,
            TransactionTypeFilter::PaymentLink,
        ]);

        assert!(matches_transaction_type(SalesType::Terminal, &selected));
        assert!(matches_transaction_type(SalesType::PaymentLink, &selected));
    }

    #[test]
    fn unrecognized_tag_alone_matches_nothing() {
        let selected = BTreeSet::from([TransactionTypeFilter::Unrecognized]);

        assert!(!matches_transaction_type(SalesType::Terminal, &selected));
        assert!(!matches_transaction_type(SalesType::PaymentLink, &selected));
    }

    #[test]
    fn unrecognized_tag_does_not_disable_wildcard() {
        let selected = BTreeSet::from([
            TransactionTypeFilter::Unrecognized,
            TransactionTypeFilter::All,
        ]);

        assert!(matches_transaction_type(SalesType::Terminal, &selected));
    }
}
