//! Container primitives.
//!
//! [`List`] is an owned, mutable sequence with a fluent API. `Option` and
//! `Result` are the standard library types; [`OptionExt`] and [`ResultExt`]
//! add exhaustive two-handler dispatch on top of them.

mod list;
mod option;
mod result;

pub use list::List;
pub use option::{OptionExt, OptionPattern};
pub use result::{ResultExt, ResultPattern};
