//! Infinite-loop image carousel with a lightbox, auto-advance and responsive
//! breakpoints, driven through an injected rendering surface.

pub mod breakpoints;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod headless;
pub mod item;
pub mod modal;
pub mod nav;
pub mod pause;
pub mod position;
pub mod runtime;
pub mod scan;
pub mod surface;
pub mod timer;
pub mod track;

pub use controller::{Carousel, CarouselOptions, Snapshot};
pub use error::Error;
pub use events::{Input, Key, Motion, Target};
pub use item::{Item, ItemSequence};
