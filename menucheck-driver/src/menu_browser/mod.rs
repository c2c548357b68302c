pub mod capabilities;
pub mod capture;
pub mod driver;
pub mod page;
