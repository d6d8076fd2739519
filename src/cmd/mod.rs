//! Command module structure for prlint CLI

pub mod check;
pub mod convert;
pub mod util;
