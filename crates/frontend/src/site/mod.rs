//! Public site behaviors: scroll styling, menu, reveal, gestures and effects.

pub mod featured;
pub mod loading_screen;
pub mod menu;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod swipe;
