// This file makes the component modules available to the rest of the application.

pub mod asset_card;
pub mod pico;
pub mod sparkline_chart;
