//! Helpers behind the Miller columns, compare view and requirement pages.

pub mod compare;
pub mod courses;
pub mod miller;
pub mod tooltips;
