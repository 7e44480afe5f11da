/*! Filtering utilities

Filters operate on bodies ([text]), authors ([author]), token counts ([length]) or whole candidates ([record]).

Body and author filters implement [filter::Filter] and return `true` when the item is kept.
They rely on patterns compiled once for the whole process ([patterns]).

[QualityFilter] chains all of them in a fixed order.
! */
pub mod author;
mod filter;
pub mod length;
pub mod patterns;
pub mod record;
pub mod text;

pub use filter::Filter;
pub use record::QualityFilter;
