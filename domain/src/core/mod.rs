//! Core domain primitives

pub mod question;
