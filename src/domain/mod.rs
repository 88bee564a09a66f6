pub mod rows;
pub mod sparkline;
pub mod weather;
pub mod windows;
