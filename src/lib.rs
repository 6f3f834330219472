//! # delta-set
//!
//! An insertion-ordered set that records, as a side channel, the additions
//! and removals needed to bring a previously observed copy up to date.
//!
//! Consumers that keep a derived or remote copy of a set (a UI list, a
//! reactive view, a replica) can replay just the changes instead of
//! re-sending the whole membership.
//!
//! ## `no_std` Support
//!
//! This crate supports `no_std` environments with the `alloc` crate.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! delta-set = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` there is no default hash builder; construct sets with
//! [`DeltaSet::with_hasher`] or [`Default`].
//!
//! ## Quick Start
//!
//! ```
//! use delta_set::prelude::*;
//! use std::collections::HashSet;
//!
//! let mut set = DeltaSet::with_values([1, 2, 3]);
//! let mut mirror: HashSet<i32> = HashSet::new();
//!
//! // Bring the mirror up to date, then start a new delta window.
//! set.redelta_into(&mut mirror);
//! set.undelta();
//!
//! set.delete(&1);
//! set.add(4);
//! set.redelta_with(|added, removed| {
//!     assert_eq!(added, vec![4]);
//!     assert_eq!(removed, vec![1]);
//! });
//! ```
//!
//! ## Delta Rules
//!
//! - Adding a value clears its pending removal; deleting a value clears its
//!   pending addition.
//! - [`DeltaSet::clear`] records every member as removed and forgets all
//!   pending additions.
//! - Replay deletes the removed values first, then adds the added ones.
//! - [`DeltaSet::redelta`] never resets the delta; only
//!   [`DeltaSet::undelta`] and [`DeltaSet::take_delta`] do.
//!
//! ## Features
//!
//! - `std` (default): `HashSet` receivers and a default hash builder.
//! - `serde`: `Serialize`/`Deserialize` for [`Delta`].
//! - `tracing`: `trace!` events on every mutation and replay.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

mod delta;
mod delta_set;
mod readonly;
mod receiver;

pub mod prelude;

pub use delta::Delta;
pub use delta_set::DeltaSet;
pub use readonly::ReadonlyDeltaSet;
pub use receiver::{DeltaReceiver, DeltaTarget};
