#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod prelude;

#[cfg(feature = "tracing-subscriber")]
mod subscriber;

#[cfg(feature = "tracing-subscriber")]
pub use subscriber::init_tracing;

#[doc(no_inline)]
pub use vouch_core::{
    Check, ErrorKind, SharedString, Validate, Validation, ValidationContext, ValidationError,
    code, config, convert, error, validate, validation, value,
};
