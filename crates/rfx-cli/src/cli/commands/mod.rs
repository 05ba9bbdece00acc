//! Command handlers.

pub mod login;
pub mod proposals;
pub mod recommend;
pub mod rfps;
pub mod send;
pub mod vendors;
