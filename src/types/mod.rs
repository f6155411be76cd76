//! Core type definitions using newtype patterns for type safety.
//!
//! A [`StatusPort`] or [`AllowList`] can only be built from values that
//! passed validation.

mod allow_list;
mod port;

pub use allow_list::{
    parse_status_allow_cidrs, validate_all_allow_cidrs, validate_cidr_or_ip, AllowEntry,
    AllowList, TokenError,
};
pub use port::{validate_status_port, StatusPort};
