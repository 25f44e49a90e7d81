pub mod entry_table;
pub mod nav;
pub mod toast;
pub mod token_row;
