pub mod investment_service;
pub mod performance;
