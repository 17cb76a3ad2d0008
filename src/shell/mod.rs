//! Dashboard shell
//!
//! Framework-free state behind the admin UI: the page router, cancellable
//! page loads, notices, confirmation gating and the row view models. The
//! Leptos front end renders these; nothing here touches the DOM.

mod confirm;
mod loads;
mod notice;
mod router;
mod view;

pub use confirm::{confirm_then, Confirm, Destructive};
pub use loads::PageLoads;
pub use notice::{Notice, NoticeKind, Notices};
pub use router::{MenuEntry, Navigation, Page, Router};
pub use view::{
    IngredientRow, InventoryRow, InventoryRun, ListView, MenuRow, RecipeRow, SaleRow,
    StatsSummary, TableRow, UserBadge,
};
