//! Static marketing site generator and navigation controller for Aalekhan
//! Software.

mod assets;
pub mod components;
mod config;
pub mod content;
pub mod controllers;
pub mod document;
pub mod event;
pub mod form;
mod generators;
pub mod geometry;
pub mod nav;
pub mod pages;
pub mod replay;
pub mod seo;

pub use assets::write_assets;
pub use config::{BuildArgs, Command, Config, ReplayArgs, ScopeArg};
pub use controllers::header::HeaderController;
pub use controllers::page::PageController;
pub use document::Document;
pub use event::UiEvent;
pub use form::{ContactForm, FormField};
pub use generators::{GeneratedSite, generate_site};
pub use geometry::{HitMap, Hits, Point, Rect, Region};
pub use nav::{MOBILE_BREAKPOINT, MenuState, NavController, NavEvent, OutsideScope, PointerKind};
pub use replay::{ReplayScript, ReplayStep, ScriptEvent, load_script, replay};
pub use seo::SeoMetadata;
