// Contact form: field validation, submit/reset controller and Maud rendering

pub mod client;
pub mod config;
pub mod controller;
pub mod field;
pub mod render;
pub mod validation;
pub mod values;

pub use client::{HttpSubmissionClient, SubmissionClient, SubmissionError};
pub use config::Config;
pub use controller::{FormController, FormPhase, FormView, SubmissionState, SubmitOutcome};
pub use field::{Field, QueryType};
pub use render::RenderOptions;
pub use validation::{validate, validate_field, FieldErrors, ValidationResult};
pub use values::{FieldInput, FormValues, RawFormValues};
