//! UI Components
//!
//! Reusable Leptos components.

mod alert;
mod footer;
mod form_field;
mod header;
mod nav_link;
mod pagination;

pub use alert::{Alert, LoadError, Loading, SubmitAlert};
pub use footer::Footer;
pub use form_field::TextField;
pub use header::Header;
pub use nav_link::NavLink;
pub use pagination::Pagination;
