pub mod loading;
pub mod result_card;
pub mod search_widget;
