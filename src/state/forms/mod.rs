//! Form domain layer
//!
//! Static field descriptors, the validation schema, and the mutable
//! contact form state bound to them.

mod field;
mod form_state;
mod validation;

pub use field::{FieldDescriptor, FieldKind, CONTACT_FIELDS};
pub use form_state::ContactForm;
pub use validation::is_required;

#[cfg(test)]
pub use field::{descriptor, index_of};
