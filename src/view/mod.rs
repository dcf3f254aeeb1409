pub mod page;
pub mod users;
