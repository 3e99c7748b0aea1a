pub mod input_panel;
pub mod language_selector;
pub mod output_panel;
pub mod start;
pub mod translator;
