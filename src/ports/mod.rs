/// Ports layer - Interfaces between the application core and infrastructure
///
/// Ports are traits that the core depends on. Adapters provide the concrete
/// implementations, so the core never touches HTTP, the terminal, or files.
pub mod outbound;
