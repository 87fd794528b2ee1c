/// Application layer - Use cases, DTOs and the formatter registry
///
/// This layer selects formatter implementations and drives their
/// lifecycle, coordinating with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod registry;
pub mod use_cases;
