/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod report_rendering_port;

pub use report_rendering_port::ReportRenderingPort;
