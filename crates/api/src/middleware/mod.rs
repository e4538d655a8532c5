//! Request middleware.
//!
//! - [`origin::require_allowed_origin`] -- rejects requests whose `Origin`
//!   header is not on the configured allow-list.

pub mod origin;
