pub mod signature;
pub mod table;
