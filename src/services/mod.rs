pub mod excel;
pub mod portfolio;
pub mod session;
