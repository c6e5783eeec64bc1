//! Page generation modules
//!
//! Each page module composes components from `components` into a complete
//! document for one view of the site.

pub mod home;
