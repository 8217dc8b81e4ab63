// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Together Todo - A shared to-do list that merges edits using CRDTs.
//!
//! Edits carry a caller-supplied logical timestamp and a writer identity.
//! They may arrive in any order, from any number of writers, and writers
//! may be dismissed (and allowed back) at any time; the list always
//! resolves to one deterministic view.
//!
//! # Quick Start
//!
//! ```
//! use together_todo::crdt::id::{EntryId, Timestamp, UserId};
//! use together_todo::list::ToDoList;
//!
//! let mut list = ToDoList::new();
//!
//! // A late edit with an older timestamp loses.
//! list.add_entry(EntryId(1), UserId(7), "A", Timestamp(10));
//! list.add_entry(EntryId(1), UserId(7), "B", Timestamp(5));
//! assert_eq!(list.get(EntryId(1)).unwrap().name, "A");
//!
//! // Dismissing a writer hides everything they wrote.
//! list.dismiss_user(UserId(7));
//! assert_eq!(list.count(), 0);
//!
//! list.allow_user(UserId(7));
//! assert_eq!(list.count(), 1);
//! ```

pub mod crdt;
pub mod digest;
pub mod list;
pub mod script;
pub mod shared;

pub use crdt::Crdt;
pub use crdt::id::EntryId;
pub use crdt::id::Timestamp;
pub use crdt::id::UserId;
pub use list::Entry;
pub use list::EntryState;
pub use list::ToDoList;
pub use shared::SharedToDoList;
