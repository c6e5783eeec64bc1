//! Stateful controllers behind the rendered components
//!
//! Each controller owns its own navigation state machine instance; the two
//! share the transition table in `nav` and differ only in outside-pointer
//! scope and in what else they manage.

pub mod header;
pub mod page;
