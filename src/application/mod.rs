/// Application layer - Use cases and DTOs
///
/// This layer contains the page logic: each use case loads one dashboard
/// page through the DashboardApi port and settles it into a ViewState.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
