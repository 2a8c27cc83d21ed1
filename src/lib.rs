//! A value which is either present or absent, with a chainable API for
//! inspecting, transforming, combining and mutating that fact.
//!
//! Options are constructed with [`some`] and [`none`], or converted from a
//! plain [`core::option::Option`] or a JSON value.
//!
//! ```
//! use optional::{none, some, Option};
//!
//! let title = some("Severance").map(str::len);
//! assert_eq!(title.unwrap(), 9);
//!
//! let missing = none::<&str>().map_or(str::len, 0);
//! assert_eq!(missing, some(0));
//!
//! assert_eq!(Option::from(Some(1)).xor(none()), some(1));
//! ```
//!
//! <br>
//!
//! ## In-place mutation
//!
//! A handful of operations take `&mut self` and modify the option they're
//! called on rather than producing a new one. These are [`Option::take`],
//! [`Option::replace`], [`Option::clear`], [`Option::set`],
//! [`Option::get_or_insert`] and [`Option::get_or_insert_with`].
//!
//! ```
//! use optional::{none, some};
//!
//! let mut slot = none();
//! slot.get_or_insert(1).get_or_insert(2);
//! assert_eq!(slot, some(1));
//!
//! let taken = slot.take();
//! assert_eq!(taken, some(1));
//! assert!(slot.is_none());
//! ```
//!
//! <br>
//!
//! ## Construction
//!
//! The two states are the only states an option can be in. Options can only
//! be created with the some or none functions, so naming the internal state
//! directly does not compile:
//!
//! ```compile_fail
//! let value = optional::Option::<u32> { slot: Default::default() };
//! ```
//!
//! <br>
//!
//! ## JSON
//!
//! An absent option serializes as `null`, and `null` deserializes as an
//! absent option. See [`Option::to_json`] and [`Option::from_json`].
//!
//! ```
//! use optional::{none, some, Option};
//! use serde_json::json;
//!
//! assert_eq!(some(42).to_json()?, json!(42));
//! assert_eq!(none::<u32>().to_json()?, json!(null));
//! assert_eq!(Option::<u32>::from_json(json!(null))?, none());
//! # Ok::<_, serde_json::Error>(())
//! ```

mod error;
mod iter;
mod json;
mod option;

pub use self::error::UnwrapError;
pub use self::iter::OptionIter;
pub use self::option::{none, some, Option};
