pub mod date;
pub mod enums;
pub mod search;
pub mod transaction;
