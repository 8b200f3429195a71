//! Application services orchestrating the company use cases

mod company_service;

pub use company_service::CompanyService;
