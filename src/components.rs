//! Reusable HTML components for page generation
//!
//! Maud component functions for the site header, head metadata, content
//! cards and the contact form. Pages compose these; components never read
//! controller state beyond what is passed in.

pub mod cards;
pub mod contact;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod metadata;
pub mod nav;
