pub mod option_list;
pub mod select;

pub use option_list::OptionListWidget;
pub use select::SelectWidget;
