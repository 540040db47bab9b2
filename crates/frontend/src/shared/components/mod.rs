pub mod feedback;
pub mod filter_panel;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;
