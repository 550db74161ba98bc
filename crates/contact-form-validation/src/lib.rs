//! Contact form validators
//!
//! Pure predicate functions over raw field text. The contact form's rule table
//! pairs these with the message shown when a field fails.

pub mod email;
pub mod string;

pub use email::*;
pub use string::*;
