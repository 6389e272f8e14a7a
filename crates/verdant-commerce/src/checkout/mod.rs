//! Checkout module.
//!
//! Form data collection and the order summary. There is no payment
//! processing or order persistence; the form only gates the submit button.

mod form;
mod summary;

pub use form::{CheckoutForm, PaymentCard, ShippingInfo};
pub use summary::{Delivery, OrderSummary};
