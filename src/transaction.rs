//! Defines the payment transaction record as it arrives from the transactions endpoint.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Whether the payment went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// The charge was collected.
    Successful,
    /// The charge was not collected.
    Rejected,
}

impl TransactionStatus {
    /// The raw wire form, e.g. `"SUCCESSFUL"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Successful => "SUCCESSFUL",
            Self::Rejected => "REJECTED",
        }
    }
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Debit or credit card.
    Card,
    /// Bank transfer through PSE.
    Pse,
    /// Daviplata wallet.
    Daviplata,
    /// Nequi wallet.
    Nequi,
    /// Bancolombia button.
    Bancolombia,
}

impl PaymentMethod {
    /// The raw wire form, e.g. `"DAVIPLATA"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "CARD",
            Self::Pse => "PSE",
            Self::Daviplata => "DAVIPLATA",
            Self::Nequi => "NEQUI",
            Self::Bancolombia => "BANCOLOMBIA",
        }
    }
}

/// The sales channel the transaction came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesType {
    /// A physical card terminal.
    Terminal,
    /// A shareable payment link.
    PaymentLink,
}

impl SalesType {
    /// The raw wire form, e.g. `"PAYMENT_LINK"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "TERMINAL",
            Self::PaymentLink => "PAYMENT_LINK",
        }
    }
}

/// The card network, only present for card payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardFranchise {
    /// Visa.
    Visa,
    /// Mastercard.
    Mastercard,
    /// American Express.
    AmericanExpress,
}

impl CardFranchise {
    /// The raw wire form, e.g. `"AMERICAN_EXPRESS"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visa => "VISA",
            Self::Mastercard => "MASTERCARD",
            Self::AmericanExpress => "AMERICAN_EXPRESS",
        }
    }
}

/// A single payment, as returned by the transactions endpoint.
///
/// Transactions are never mutated after they are fetched. A refetch replaces
/// the whole collection.
///
/// To create a `Transaction` by hand, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Opaque unique identifier.
    pub id: String,
    /// Whether the charge was collected.
    pub status: TransactionStatus,
    /// How the customer paid.
    pub payment_method: PaymentMethod,
    /// The channel the sale came through.
    pub sales_type: SalesType,
    /// When the transaction was created, millisecond resolution.
    #[serde(with = "time::serde::timestamp::milliseconds")]
    pub created_at: OffsetDateTime,
    /// The numeric reference code shown to the merchant.
    pub transaction_reference: u64,
    /// The charged amount in minor currency units (cents).
    pub amount: i64,
    /// The fee withheld in minor units, if any.
    ///
    /// When present it is no larger than `amount`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deduction: Option<i64>,
    /// The card network. Only set when `payment_method` is [PaymentMethod::Card].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub franchise: Option<CardFranchise>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(id: &str, amount: i64, created_at: OffsetDateTime) -> TransactionBuilder {
        TransactionBuilder {
            id: id.to_owned(),
            status: TransactionStatus::Successful,
            payment_method: PaymentMethod::Pse,
            sales_type: SalesType::Terminal,
            created_at,
            transaction_reference: 0,
            amount,
            deduction: None,
            franchise: None,
        }
    }

    /// Whether the charge was collected.
    pub fn is_successful(&self) -> bool {
        self.status == TransactionStatus::Successful
    }

    /// The amount left after the deduction, if a deduction was withheld.
    pub fn net_amount(&self) -> Option<i64> {
        self.deduction.map(|deduction| self.amount - deduction)
    }
}

/// A builder for [Transaction] with defaults for everything but the id, amount
/// and creation time.
///
/// Defaults to a successful PSE payment through a terminal with reference 0
/// and no deduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionBuilder {
    id: String,
    status: TransactionStatus,
    payment_method: PaymentMethod,
    sales_type: SalesType,
    created_at: OffsetDateTime,
    transaction_reference: u64,
    amount: i64,
    deduction: Option<i64>,
    franchise: Option<CardFranchise>,
}

impl TransactionBuilder {
    /// Set the status.
    pub fn status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the payment method.
    pub fn payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    /// Set the sales channel.
    pub fn sales_type(mut self, sales_type: SalesType) -> Self {
        self.sales_type = sales_type;
        self
    }

    /// Set the reference code.
    pub fn reference(mut self, transaction_reference: u64) -> Self {
        self.transaction_reference = transaction_reference;
        self
    }

    /// Set the withheld fee.
    pub fn deduction(mut self, deduction: Option<i64>) -> Self {
        self.deduction = deduction;
        self
    }

    /// Mark the transaction as a card payment through `franchise`.
    pub fn card(mut self, franchise: CardFranchise) -> Self {
        self.payment_method = PaymentMethod::Card;
        self.franchise = Some(franchise);
        self
    }

    /// Create the [Transaction].
    pub fn finalise(self) -> Transaction {
        Transaction {
            id: self.id,
            status: self.status,
            payment_method: self.payment_method,
            sales_type: self.sales_type,
            created_at: self.created_at,
            transaction_reference: self.transaction_reference,
            amount: self.amount,
            deduction: self.deduction,
            franchise: self.franchise,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::{CardFranchise, PaymentMethod, SalesType, Transaction, TransactionStatus};

    #[test]
    fn deserializes_wire_record() {
        let json = r#"{
            "id": "GZEN23784UBV2",
            "status": "SUCCESSFUL",
            "paymentMethod": "CARD",
            "salesType": "PAYMENT_LINK",
            "createdAt": 1729382400123,
            "transactionReference": 8786,
            "amount": 2500000,
            "deduction": 1500,
            "franchise": "AMERICAN_EXPRESS"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.id, "GZEN23784UBV2");
        assert_eq!(transaction.status, TransactionStatus::Successful);
        assert_eq!(transaction.payment_method, PaymentMethod::Card);
        assert_eq!(transaction.sales_type, SalesType::PaymentLink);
        assert_eq!(
            transaction.created_at,
            datetime!(2024-10-20 00:00:00.123 UTC)
        );
        assert_eq!(transaction.transaction_reference, 8786);
        assert_eq!(transaction.amount, 2_500_000);
        assert_eq!(transaction.deduction, Some(1500));
        assert_eq!(transaction.franchise, Some(CardFranchise::AmericanExpress));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{
            "id": "abc",
            "status": "REJECTED",
            "paymentMethod": "NEQUI",
            "salesType": "TERMINAL",
            "createdAt": 0,
            "transactionReference": 1,
            "amount": 100
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.deduction, None);
        assert_eq!(transaction.franchise, None);
        assert!(!transaction.is_successful());
    }

    #[test]
    fn unknown_payment_method_is_rejected() {
        let json = r#"{
            "id": "abc",
            "status": "SUCCESSFUL",
            "paymentMethod": "CASH",
            "salesType": "TERMINAL",
            "createdAt": 0,
            "transactionReference": 1,
            "amount": 100
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn net_amount_subtracts_deduction() {
        let transaction = Transaction::build("a", 10_000, datetime!(2024-10-20 12:00 UTC))
            .deduction(Some(250))
            .finalise();

        assert_eq!(transaction.net_amount(), Some(9_750));
    }

    #[test]
    fn net_amount_is_none_without_deduction() {
        let transaction = Transaction::build("a", 10_000, datetime!(2024-10-20 12:00 UTC)).finalise();

        assert_eq!(transaction.net_amount(), None);
    }

    #[test]
    fn raw_forms_match_wire_names() {
        assert_eq!(PaymentMethod::Daviplata.as_str(), "DAVIPLATA");
        assert_eq!(SalesType::PaymentLink.as_str(), "PAYMENT_LINK");
        assert_eq!(CardFranchise::AmericanExpress.as_str(), "AMERICAN_EXPRESS");
        assert_eq!(TransactionStatus::Rejected.as_str(), "REJECTED");
    }
}
