pub mod answer_input;
pub mod level_menu;
pub mod progress_bar;
pub mod scoreboard;
pub mod summary;
pub mod word_display;
