//! Shared UI crate for Swipeboard. Cross-platform logic and views live here.

pub mod charts;
pub mod core;
pub mod views;

pub mod components {
    // Filter control surface (components/filter_bar.rs)
    pub mod filter_bar;
    pub use filter_bar::FilterBar;

    // Summary stat cards (components/summary_cards.rs)
    pub mod summary_cards;
    pub use summary_cards::SummaryCards;

    // Detail table over the filtered records (components/swipe_table.rs)
    pub mod swipe_table;
    pub use swipe_table::SwipeTable;
}
