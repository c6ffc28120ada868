//! Parameter structs for the wide endpoints.
//!
//! # Design
//! Most endpoints take a handful of scalars and keep plain arguments. The
//! card-authorization and search endpoints take a dozen-plus fields, so those
//! are grouped into structs here. Field names follow the gateway's form field
//! names (minus their `transaction_`/`customer_` prefixes) so the mapping in
//! `endpoints.rs` stays mechanical. Everything is pass-through text: the
//! gateway validates, this layer does not. List-valued search fields are
//! `Vec<String>` and are comma-joined only at encoding time.

/// Cardholder details for [`Lipisha::authorize_card_transaction`](crate::Lipisha::authorize_card_transaction).
#[derive(Debug, Clone, Default)]
pub struct Card {
    pub card_number: String,
    pub address1: String,
    pub address2: String,
    /// Expiry in the gateway's `MMYYYY` format.
    pub expiry: String,
    /// Name as printed on the card.
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub country: String,
    pub state: String,
    pub zip: String,
    pub security_code: String,
    pub currency: String,
}

/// A dashboard user, for [`Lipisha::create_user`](crate::Lipisha::create_user)
/// and [`Lipisha::update_user`](crate::Lipisha::update_user).
#[derive(Debug, Clone, Default)]
pub struct User {
    pub full_name: String,
    pub role: String,
    pub mobile_number: String,
    pub email: String,
    pub user_name: String,
    pub password: String,
}

/// Search parameters for [`Lipisha::get_transactions`](crate::Lipisha::get_transactions).
///
/// Every field is always sent; leave a field at its default to match anything.
/// Amount bounds and paging stay as text because the gateway treats them as
/// opaque query values.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Transaction codes to match.
    pub transactions: Vec<String>,
    pub transaction_type: String,
    pub method: String,
    pub date_start: String,
    pub date_end: String,
    pub account_names: Vec<String>,
    pub account_numbers: Vec<String>,
    pub references: Vec<String>,
    pub amount_minimum: String,
    pub amount_maximum: String,
    pub status: String,
    pub mobile_number: String,
    pub email: String,
    pub limit: String,
    pub offset: String,
}

/// Search parameters for [`Lipisha::get_customers`](crate::Lipisha::get_customers).
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub name: String,
    pub mobile_number: String,
    pub email: String,
    pub first_payment_from: String,
    pub first_payment_to: String,
    pub last_payment_from: String,
    pub last_payment_to: String,
    pub payments_minimum: String,
    pub payments_maximum: String,
    pub total_spent_minimum: String,
    pub total_spent_maximum: String,
    pub average_spent_minimum: String,
    pub average_spent_maximum: String,
    pub limit: String,
    pub offset: String,
}

/// Search parameters for [`Lipisha::get_users`](crate::Lipisha::get_users).
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub full_name: String,
    pub role: String,
    pub mobile_number: String,
    pub email: String,
    pub user_name: String,
}
