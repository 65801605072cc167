//! Payment form state machine
//!
//! Models the bill payment form: one active payment method at a time, each
//! with its own required inputs, a simulated provider delay on submit, and a
//! success callback receiving the amount and a human-readable method
//! descriptor. There is no gateway integration.
//!
//! ```text
//!            select_method            submit (can_submit)
//! Editing ◀───────────────▶ Editing ──────────────────────▶ Processing
//!    ▲                                                          │
//!    └──────────── delay elapsed, callback Ok / Err ────────────┘
//! ```

use crate::entities::Bill;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;

/// Default simulated provider latency
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(2000);

/// Payment methods offered by the form. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Upi,
    Card,
    NetBanking,
}

/// Inputs of the payment form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    UpiId,
    CardNumber,
    CardExpiry,
    CardCvv,
    CardHolder,
    Bank,
}

impl PaymentMethod {
    /// Inputs that must be non-empty before this method can be submitted
    pub fn required_fields(&self) -> &'static [PaymentField] {
        match self {
            PaymentMethod::Upi => &[PaymentField::UpiId],
            PaymentMethod::Card => &[
                PaymentField::CardNumber,
                PaymentField::CardExpiry,
                PaymentField::CardCvv,
                PaymentField::CardHolder,
            ],
            PaymentMethod::NetBanking => &[PaymentField::Bank],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }
}

/// Receives the outcome of a simulated payment
#[async_trait]
pub trait PaymentCallback: Send + Sync {
    /// Called once the simulated provider delay has elapsed
    async fn on_success(&self, amount: f64, method: &str) -> anyhow::Result<()>;
}

/// What was handed to the callback
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub amount: f64,
    pub method: String,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("{method} details are incomplete")]
    Incomplete { method: &'static str },

    #[error("payment callback failed: {0}")]
    Callback(#[source] anyhow::Error),
}

#[derive(Debug, Clone, Default)]
struct PaymentInputs {
    upi_id: String,
    card_number: String,
    card_expiry: String,
    card_cvv: String,
    card_holder: String,
    bank: String,
}

/// Read-only view of whether a form has a payment in flight
///
/// Obtained from [`PaymentForm::status`] before calling `submit`, so the
/// rest of the UI can watch the form while `submit` holds it.
#[derive(Debug, Clone)]
pub struct PaymentStatus {
    processing: Arc<AtomicBool>,
}

impl PaymentStatus {
    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }
}

/// Form state for paying one bill
#[derive(Debug)]
pub struct PaymentForm {
    bill: Bill,
    method: PaymentMethod,
    inputs: PaymentInputs,
    processing: Arc<AtomicBool>,
    delay: Duration,
}

impl PaymentForm {
    pub fn new(bill: Bill) -> Self {
        Self {
            bill,
            method: PaymentMethod::default(),
            inputs: PaymentInputs::default(),
            processing: Arc::new(AtomicBool::new(false)),
            delay: DEFAULT_SIMULATED_DELAY,
        }
    }

    /// Override the simulated provider delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn bill(&self) -> &Bill {
        &self.bill
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }

    /// Handle that observes the processing flag of this form
    pub fn status(&self) -> PaymentStatus {
        PaymentStatus {
            processing: self.processing.clone(),
        }
    }

    /// Switch the active method. Inputs of other methods are kept but ignored.
    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    pub fn set_field(&mut self, field: PaymentField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn field(&self, field: PaymentField) -> &str {
        match field {
            PaymentField::UpiId => &self.inputs.upi_id,
            PaymentField::CardNumber => &self.inputs.card_number,
            PaymentField::CardExpiry => &self.inputs.card_expiry,
            PaymentField::CardCvv => &self.inputs.card_cvv,
            PaymentField::CardHolder => &self.inputs.card_holder,
            PaymentField::Bank => &self.inputs.bank,
        }
    }

    fn slot(&mut self, field: PaymentField) -> &mut String {
        match field {
            PaymentField::UpiId => &mut self.inputs.upi_id,
            PaymentField::CardNumber => &mut self.inputs.card_number,
            PaymentField::CardExpiry => &mut self.inputs.card_expiry,
            PaymentField::CardCvv => &mut self.inputs.card_cvv,
            PaymentField::CardHolder => &mut self.inputs.card_holder,
            PaymentField::Bank => &mut self.inputs.bank,
        }
    }

    /// True when idle and every required input of the active method is filled
    pub fn can_submit(&self) -> bool {
        !self.is_processing()
            && self
                .method
                .required_fields()
                .iter()
                .all(|f| !self.field(*f).trim().is_empty())
    }

    /// Human-readable descriptor of the active method, card numbers masked
    pub fn method_descriptor(&self) -> String {
        match self.method {
            PaymentMethod::Upi => format!("UPI ({})", self.inputs.upi_id.trim()),
            PaymentMethod::Card => format!("Card ({})", mask_card_number(&self.inputs.card_number)),
            PaymentMethod::NetBanking => format!("Net Banking ({})", self.inputs.bank.trim()),
        }
    }

    /// Run the simulated payment.
    ///
    /// Waits the simulated delay, then hands the bill amount and the method
    /// descriptor to `callback`. A failing callback is logged and returned as
    /// [`PaymentError::Callback`]. Dropping the returned future before the
    /// delay elapses cancels the payment without invoking the callback.
    pub async fn submit<C>(&mut self, callback: &C) -> Result<PaymentReceipt, PaymentError>
    where
        C: PaymentCallback + ?Sized,
    {
        if !self.can_submit() {
            return Err(PaymentError::Incomplete {
                method: self.method.label(),
            });
        }

        let receipt = PaymentReceipt {
            amount: self.bill.amount,
            method: self.method_descriptor(),
        };
        let invoice = self.bill.invoice_number.clone();
        let delay = self.delay;

        let _processing = ProcessingGuard::enter(&self.processing);
        tracing::debug!(invoice = %invoice, method = %receipt.method, "processing payment");

        tokio::time::sleep(delay).await;

        match callback.on_success(receipt.amount, &receipt.method).await {
            Ok(()) => {
                tracing::info!(invoice = %invoice, amount = receipt.amount, "payment completed");
                Ok(receipt)
            }
            Err(e) => {
                tracing::error!(invoice = %invoice, error = %e, "payment callback failed");
                Err(PaymentError::Callback(e))
            }
        }
    }
}

/// Keeps `processing` set while a submission is in flight, including when
/// the submission future is dropped halfway
struct ProcessingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ProcessingGuard<'a> {
    fn enter(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self { flag }
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// `"4111 1111 1111 1234"` → `"****1234"`
pub fn mask_card_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
    format!("****{}", tail)
}
