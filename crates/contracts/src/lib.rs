//! Wire types shared with the order-management backend, plus the
//! view-independent order logic used by the frontend pages.

pub mod domain;
pub mod shared;
