//! Language tag fallback matching.
//!
//! Given a requested locale and the locales a product has translations for,
//! [`match_with_fallback`] picks the best available tag following BCP 47
//! style fallback: exact match ignoring case, legacy-code normalization
//! (`zh-CHS` → `zh-Hans`), script and region generalization, regional
//! variants of script forms, peer regions, and finally a last resort for
//! requests that are not locales at all. [`normalize`] exposes the
//! canonicalization step on its own.
//!
//! ```
//! use locale_match::match_with_fallback;
//!
//! assert_eq!(
//!     match_with_fallback("zh-Hans", ["zh-Hans-CN", "zh"]).as_deref(),
//!     Some("zh-Hans-CN")
//! );
//! assert_eq!(
//!     match_with_fallback("invalid-culture", ["zh-Hans-CN", "en-US"]).as_deref(),
//!     Some("zh-Hans-CN")
//! );
//! ```

pub mod chain;
pub mod cli;
pub mod index;
pub mod locale_resolution;
pub mod normalizer;
pub mod resolver;
pub mod runner;
pub mod tables;
pub mod tag;

pub use resolver::{Resolver, match_with_fallback, normalize};
