//! Client-side forms: payment method selection and member registration

pub mod payment;
pub mod registration;

pub use payment::{
    PaymentCallback, PaymentError, PaymentField, PaymentForm, PaymentMethod, PaymentReceipt,
    PaymentStatus,
};
pub use registration::RegistrationForm;
