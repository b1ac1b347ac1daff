//! Human readable names and captions shown next to the transactions.
//!
//! These are user-facing Spanish (es-CO) strings.

use std::collections::BTreeSet;

use time::{Duration, Month, OffsetDateTime};

use crate::{
    filter_state::{DateFilter, TransactionTypeFilter},
    transaction::{CardFranchise, PaymentMethod, SalesType, TransactionStatus},
};

/// The heading above the transactions list.
pub fn table_title(date_filter: DateFilter) -> &'static str {
    match date_filter {
        DateFilter::Today => "Tus ventas de hoy",
        DateFilter::Week => "Tus ventas de esta semana",
        DateFilter::October => "Tus ventas de octubre",
        DateFilter::Unrecognized => "Tus ventas",
    }
}

/// The heading of the total sales card.
pub fn sales_card_title(date_filter: DateFilter) -> &'static str {
    match date_filter {
        DateFilter::Today => "Total de ventas de hoy",
        DateFilter::Week => "Total de ventas de esta semana",
        DateFilter::October => "Total de ventas de octubre",
        DateFilter::Unrecognized => "Total de ventas",
    }
}

/// The period shown under the total, e.g. "19 de Octubre 2026".
///
/// The week caption starts seven days before `now`, and only names the month
/// and year once when both ends share them. Other filters show the month and
/// year of `now`.
pub fn date_filter_caption(date_filter: DateFilter, now: OffsetDateTime) -> String {
    match date_filter {
        DateFilter::Today => format!(
            "{} de {} {}",
            now.day(),
            month_name(now.month()),
            now.year()
        ),
        DateFilter::Week => {
            let week_ago = now - Duration::days(7);

            if week_ago.month() == now.month() && week_ago.year() == now.year() {
                format!(
                    "{} - {} de {} {}",
                    week_ago.day(),
                    now.day(),
                    month_name(now.month()),
                    now.year()
                )
            } else {
                format!(
                    "{} de {} {} - {} de {} {}",
                    week_ago.day(),
                    month_name(week_ago.month()),
                    week_ago.year(),
                    now.day(),
                    month_name(now.month()),
                    now.year()
                )
            }
        }
        DateFilter::October | DateFilter::Unrecognized => {
            format!("{}, {}", month_name(now.month()), now.year())
        }
    }
}

/// The label of a sales channel option in the type filter.
pub fn transaction_type_option_label(tag: TransactionTypeFilter) -> &'static str {
    match tag {
        TransactionTypeFilter::Terminal => "Cobro con datáfono",
        TransactionTypeFilter::PaymentLink => "Cobro con link de pago",
        TransactionTypeFilter::All => "Ver todos",
        TransactionTypeFilter::Unrecognized => "Otro",
    }
}

/// The caption of the type filter control, e.g. "Filtros: Ver todos".
pub fn transaction_type_filter_caption(selection: &BTreeSet<TransactionTypeFilter>) -> String {
    if selection.is_empty() {
        return "Filtrar".to_owned();
    }

    let labels: Vec<&str> = selection
        .iter()
        .map(|tag| transaction_type_option_label(*tag))
        .collect();

    format!("Filtros: {}", labels.join(", "))
}

/// The display name of a payment method.
pub fn payment_method_name(payment_method: PaymentMethod) -> &'static str {
    match payment_method {
        PaymentMethod::Card => "Tarjeta",
        PaymentMethod::Pse => "PSE",
        PaymentMethod::Daviplata => "Daviplata",
        PaymentMethod::Nequi => "Nequi",
        PaymentMethod::Bancolombia => "Bancolombia",
    }
}

/// The display name of a sales channel.
pub fn sales_type_name(sales_type: SalesType) -> &'static str {
    match sales_type {
        SalesType::Terminal => "Datáfono",
        SalesType::PaymentLink => "Link de pago",
    }
}

/// The display name of a status.
pub fn status_name(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Successful => "Cobro exitoso",
        TransactionStatus::Rejected => "Cobro no realizado",
    }
}

/// The display name of a card network.
pub fn franchise_name(franchise: CardFranchise) -> &'static str {
    match franchise {
        CardFranchise::Visa => "Visa",
        CardFranchise::Mastercard => "Mastercard",
        CardFranchise::AmericanExpress => "American Express",
    }
}

/// The last four digits of a reference, or the whole reference if shorter.
pub fn last_four_digits(transaction_reference: u64) -> String {
    let digits = transaction_reference.to_string();
    let start = digits.len().saturating_sub(4);

    digits[start..].to_owned()
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Enero",
        Month::February => "Febrero",
        Month::March => "Marzo",
        Month::April => "Abril",
        Month::May => "Mayo",
        Month::June => "Junio",
        Month::July => "Julio",
        Month::August => "Agosto",
        Month::September => "Septiembre",
        Month::October => "Octubre",
        Month::November => "Noviembre",
        Month::December => "Diciembre",
    }
}
