//! Typed row access per table. Every function takes a borrowed connection,
//! so callers decide whether it runs standalone or inside a transaction.

pub mod exercise;
pub mod muscle_group;
pub mod session;
pub mod session_exercise;
