//! Boundaries between sentinel-based standard library APIs and `Optional`.
//!
//! - [`parse`] / [`parse_or_failure`] / [`ParseOptional`]: text parsing via
//!   [`FromStr`](std::str::FromStr).
//! - [`IteratorOptionalExt`] / [`LookupOptional`]: element and key lookup
//!   over iterators, maps and slices.
//! - [`attempt`] / [`catch_panic`]: try-boundaries that turn errors and panics
//!   into the failure channel.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use optionals::adapters::{LookupOptional, parse};
//! use optionals::optional::Optional;
//!
//! let mut ports = HashMap::new();
//! ports.insert("http", "80");
//!
//! let http = ports.get_optional(&"http").flat_map(|text| parse::<u16>(text));
//! assert_eq!(http, Optional::some(80));
//!
//! let https = ports.get_optional(&"https").flat_map(|text| parse::<u16>(text));
//! assert_eq!(https, Optional::none());
//! ```

mod attempt;
mod lookup;
mod parse;

pub use attempt::{PanicFailure, attempt, catch_panic};
pub use lookup::{IteratorOptionalExt, LookupOptional};
pub use parse::{ParseOptional, parse, parse_or_failure};
