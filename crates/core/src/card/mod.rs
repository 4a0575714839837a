//! Credit card invoice-cycle exposure.

pub mod error;
pub mod service;
pub mod types;


pub use error::ExposureError;
pub use service::CardExposureCalculator;
pub use types::CreditCardExposure;
