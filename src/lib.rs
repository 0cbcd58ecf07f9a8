//! Kanji practice worksheet generator (kanji-drill)
//!
//! Fits practice rows for a chosen grade and mode onto A4 pages and fills
//! them with questions drawn from a kanji table.
//!
//! The pure core is [`layout`], [`pagination`] and [`generator`]; the impure
//! shell is [`config`], [`settings::store`], [`dataset`] loading and
//! [`logging`].

pub mod config;
pub mod dataset;
pub mod generator;
pub mod layout;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod settings;
pub mod worksheet;
