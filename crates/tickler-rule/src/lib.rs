//! Recurrence engine for repeating tasks.
//!
//! Turns a compact rule string (`d 7`, `y`, `w 1,3`, `m -1 2,3`) plus an
//! anchor and reference date into the next date on which a task reappears.

pub mod error;
pub mod rule;
