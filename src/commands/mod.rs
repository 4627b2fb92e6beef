pub mod legend;
pub mod list;

pub use legend::*;
pub use list::*;
