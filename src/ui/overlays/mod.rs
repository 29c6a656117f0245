pub mod help;
pub mod toast;
