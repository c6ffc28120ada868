//! Typed wrappers over the gateway's endpoint catalog.
//!
//! # Design
//! Each method maps its parameters onto the fixed form field names the remote
//! API mandates and delegates to [`Lipisha::dispatch`]. Nothing is validated
//! locally — negative-looking amounts, malformed mobile numbers and empty
//! strings all go through unchecked, and the gateway answers in the JSON body.
//! The card flow is the one multi-step protocol: `authorize_card_transaction`
//! returns a `transaction_index`/`transaction_reference` pair in its body,
//! which the caller feeds back verbatim into complete/reverse/void. This
//! layer does not track that pairing.

use crate::client::Lipisha;
use crate::error::Error;
use crate::form::{comma_join, Form};
use crate::types::{Card, CustomerFilter, TransactionFilter, User, UserFilter};

const GET_BALANCE: &str = "/get_balance";
const GET_FLOAT: &str = "/get_float";
const SEND_MONEY: &str = "/send_money";
const REQUEST_MONEY: &str = "/request_money";
const SEND_AIRTIME: &str = "/send_airtime";
const SEND_SMS: &str = "/send_sms";
const AUTHORIZE_CARD_TRANSACTION: &str = "/authorize_card_transaction";
const COMPLETE_CARD_TRANSACTION: &str = "/complete_card_transaction";
const REVERSE_CARD_TRANSACTION: &str = "/reverse_card_transaction";
const VOID_CARD_TRANSACTION: &str = "/void_card_transaction";
const REQUEST_SETTLEMENT: &str = "/request_settlement";
const AUTHORIZE_SETTLEMENT: &str = "/authorize_settlement";
const CANCEL_SETTLEMENT: &str = "/cancel_settlement";
const ACKNOWLEDGE_TRANSACTION: &str = "/acknowledge_transaction";
const RECONCILE_TRANSACTION: &str = "/reconcile_transaction";
const REVERSE_TRANSACTION: &str = "/reverse_transaction";
const GET_TRANSACTIONS: &str = "/get_transactions";
const GET_CUSTOMERS: &str = "/get_customers";
const CREATE_USER: &str = "/create_user";
const UPDATE_USER: &str = "/update_user";
const DELETE_USER: &str = "/delete_user";
const GET_USERS: &str = "/get_users";

impl Lipisha {
    /// Balance of the main gateway account.
    pub fn get_account_balance(&self) -> Result<String, Error> {
        self.dispatch(GET_BALANCE, Form::new())
    }

    /// Float available in the given account.
    pub fn get_account_float(&self, account_number: u64) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("account_number", account_number);
        self.dispatch(GET_FLOAT, form)
    }

    /// Initiate a direct debit from a customer's mobile money wallet into the
    /// given account. The customer confirms with their PIN on the handset;
    /// completion is reported asynchronously to the merchant's IPN URL.
    pub fn request_money(
        &self,
        account_number: u64,
        mobile_number: u64,
        amount: u64,
        method: &str,
        currency: &str,
        reference: &str,
    ) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("account_number", account_number)
            .set("mobile_number", mobile_number)
            .set("amount", amount)
            .set("method", method)
            .set("currency", currency)
            .set("reference", reference);
        self.dispatch(REQUEST_MONEY, form)
    }

    /// Credit a customer's mobile money wallet from the payout account's
    /// float. Completion is reported asynchronously to the merchant's IPN URL.
    pub fn send_money(
        &self,
        account_number: u64,
        mobile_number: u64,
        amount: u64,
        currency: &str,
        reference: &str,
    ) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("account_number", account_number)
            .set("mobile_number", mobile_number)
            .set("amount", amount)
            .set("currency", currency)
            .set("reference", reference);
        self.dispatch(SEND_MONEY, form)
    }

    /// Top up a customer's airtime from the airtime account's float.
    pub fn send_airtime(
        &self,
        account_number: u64,
        mobile_number: u64,
        amount: u64,
        currency: &str,
        reference: &str,
    ) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("account_number", account_number)
            .set("mobile_number", mobile_number)
            .set("amount", amount)
            .set("currency", currency)
            .set("reference", reference);
        self.dispatch(SEND_AIRTIME, form)
    }

    /// Send a text message to a customer.
    pub fn send_sms(
        &self,
        account_number: u64,
        mobile_number: u64,
        message: &str,
        reference: &str,
    ) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("account_number", account_number)
            .set("mobile_number", mobile_number)
            .set("message", message)
            .set("reference", reference);
        self.dispatch(SEND_SMS, form)
    }

    /// Reserve `amount` on the cardholder's account. The response body carries
    /// a `transaction_index`/`transaction_reference` pair that
    /// [`complete_card_transaction`](Self::complete_card_transaction),
    /// [`reverse_card_transaction`](Self::reverse_card_transaction) and
    /// [`void_card_transaction`](Self::void_card_transaction) require.
    /// Some issuing banks settle debit cards immediately, in which case the
    /// authorization may not be reversible.
    pub fn authorize_card_transaction(
        &self,
        account_number: u64,
        amount: u64,
        card: &Card,
    ) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("account_number", account_number)
            .set("mobile_number", &card.mobile_number)
            .set("card_number", &card.card_number)
            .set("address1", &card.address1)
            .set("address2", &card.address2)
            .set("expiry", &card.expiry)
            .set("name", &card.name)
            .set("email", &card.email)
            .set("country", &card.country)
            .set("state", &card.state)
            .set("zip", &card.zip)
            .set("amount", amount)
            .set("security_code", &card.security_code)
            .set("currency", &card.currency);
        self.dispatch(AUTHORIZE_CARD_TRANSACTION, form)
    }

    /// Settle previously authorized card funds into the merchant account.
    pub fn complete_card_transaction(
        &self,
        transaction_index: &str,
        transaction_reference: &str,
    ) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("transaction_index", transaction_index)
            .set("transaction_reference", transaction_reference);
        self.dispatch(COMPLETE_CARD_TRANSACTION, form)
    }

    /// Release a card authorization without capturing the funds.
    pub fn reverse_card_transaction(
        &self,
        transaction_index: &str,
        transaction_reference: &str,
    ) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("transaction_index", transaction_index)
            .set("transaction_reference", transaction_reference);
        self.dispatch(REVERSE_CARD_TRANSACTION, form)
    }

    /// Cancel a card transaction whose funds were already charged.
    pub fn void_card_transaction(
        &self,
        transaction_index: &str,
        transaction_reference: &str,
    ) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("transaction_index", transaction_index)
            .set("transaction_reference", transaction_reference);
        self.dispatch(VOID_CARD_TRANSACTION, form)
    }

    /// Request settlement of the account balance to a withdrawal account.
    /// Settlement must be separately confirmed with
    /// [`authorize_settlement`](Self::authorize_settlement).
    pub fn request_settlement(&self, account_number: u64, amount: u64) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("account_number", account_number).set("amount", amount);
        self.dispatch(REQUEST_SETTLEMENT, form)
    }

    /// Authorize a previously requested settlement.
    pub fn authorize_settlement(&self, transaction: &str) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("transaction", transaction);
        self.dispatch(AUTHORIZE_SETTLEMENT, form)
    }

    /// Cancel a previously requested settlement.
    pub fn cancel_settlement(&self, transaction: &str) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("transaction", transaction);
        self.dispatch(CANCEL_SETTLEMENT, form)
    }

    /// Flag transactions as processed by the merchant application.
    pub fn acknowledge_transaction<S: AsRef<str>>(
        &self,
        transactions: &[S],
    ) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("transaction", comma_join(transactions));
        self.dispatch(ACKNOWLEDGE_TRANSACTION, form)
    }

    /// Move a transaction stranded in the reconciliation queue (sent with a
    /// missing or invalid account) to the given account. On success the
    /// gateway re-runs the IPN notification flow.
    pub fn reconcile_transaction(
        &self,
        transaction: &str,
        mobile_number: &str,
        account_number: &str,
        transaction_reference: &str,
    ) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("transaction", transaction)
            .set("transaction_mobile_number", mobile_number)
            .set("transaction_account_number", account_number)
            .set("transaction_reference", transaction_reference);
        self.dispatch(RECONCILE_TRANSACTION, form)
    }

    /// Reverse transactions and refund the customers. Requires enough account
    /// balance to cover the reversed amount.
    pub fn reverse_transaction<S: AsRef<str>>(&self, transactions: &[S]) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("transaction", comma_join(transactions));
        self.dispatch(REVERSE_TRANSACTION, form)
    }

    /// Search transactions matching `filter`.
    pub fn get_transactions(&self, filter: &TransactionFilter) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("transaction", comma_join(&filter.transactions))
            .set("transaction_type", &filter.transaction_type)
            .set("transaction_method", &filter.method)
            .set("transaction_date_start", &filter.date_start)
            .set("transaction_date_end", &filter.date_end)
            .set("transaction_account_name", comma_join(&filter.account_names))
            .set("transaction_account_number", comma_join(&filter.account_numbers))
            .set("transaction_reference", comma_join(&filter.references))
            .set("transaction_amount_minimum", &filter.amount_minimum)
            .set("transaction_amount_maximum", &filter.amount_maximum)
            .set("transaction_status", &filter.status)
            .set("transaction_mobile_number", &filter.mobile_number)
            .set("transaction_email", &filter.email)
            .set("limit", &filter.limit)
            .set("offset", &filter.offset);
        self.dispatch(GET_TRANSACTIONS, form)
    }

    /// Search customers matching `filter`.
    pub fn get_customers(&self, filter: &CustomerFilter) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("customer_name", &filter.name)
            .set("customer_mobile_number", &filter.mobile_number)
            .set("customer_email", &filter.email)
            .set("customer_first_payment_from", &filter.first_payment_from)
            .set("customer_first_payment_to", &filter.first_payment_to)
            .set("customer_last_payment_from", &filter.last_payment_from)
            .set("customer_last_payment_to", &filter.last_payment_to)
            .set("customer_payments_minimum", &filter.payments_minimum)
            .set("customer_payments_maximum", &filter.payments_maximum)
            .set("customer_total_spent_minimum", &filter.total_spent_minimum)
            .set("customer_total_spent_maximum", &filter.total_spent_maximum)
            .set("customer_average_spent_minimum", &filter.average_spent_minimum)
            .set("customer_average_spent_maximum", &filter.average_spent_maximum)
            .set("limit", &filter.limit)
            .set("offset", &filter.offset);
        self.dispatch(GET_CUSTOMERS, form)
    }

    /// Create a dashboard user under the merchant account.
    pub fn create_user(&self, user: &User) -> Result<String, Error> {
        self.dispatch(CREATE_USER, user_form(user))
    }

    /// Update a dashboard user, matched by `user_name`.
    pub fn update_user(&self, user: &User) -> Result<String, Error> {
        self.dispatch(UPDATE_USER, user_form(user))
    }

    /// Delete the dashboard user with the given login name.
    pub fn delete_user(&self, user_name: &str) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("user_name", user_name);
        self.dispatch(DELETE_USER, form)
    }

    /// Search dashboard users matching `filter`.
    pub fn get_users(&self, filter: &UserFilter) -> Result<String, Error> {
        let mut form = Form::new();
        form.set("full_name", &filter.full_name)
            .set("role", &filter.role)
            .set("mobile_number", &filter.mobile_number)
            .set("email", &filter.email)
            .set("user_name", &filter.user_name);
        self.dispatch(GET_USERS, form)
    }
}

// create_user and update_user share the same field set.
fn user_form(user: &User) -> Form {
    let mut form = Form::new();
    form.set("full_name", &user.full_name)
        .set("role", &user.role)
        .set("mobile_number", &user.mobile_number)
        .set("email", &user.email)
        .set("user_name", &user.user_name)
        .set("password", &user.password);
    form
}
