//! Output views of the two report passes
//!
//! A view is a named table with a fixed column list, fed by one of the grouping
//! structures in [`crate::aggregate`]. Once a pass has consumed its input, each view
//! walks its grouping structure in first-seen key order, drops the groups that fail its
//! [`ViewFilter`] (if it has one), and projects the rest into rows.
//!
//! - [`MatchTypePass`] feeds the keyword views: the wide per-keyword comparison (filtered),
//!   the per-match-type breakdown (unfiltered), the breakdown restricted to qualifying
//!   keywords, and campaign bidding strategies.
//! - [`SearchTermPass`] feeds the search term views: per keyword and search term, and per
//!   search term alone. Neither is filtered.

mod filter;
mod pass;
mod projector;
mod view;

pub use filter::ViewFilter;
pub use pass::{MatchTypePass, PassOptions, ReportPass, SearchTermPass};
pub use projector::{project_campaign, project_entry, project_group};
pub use view::View;
