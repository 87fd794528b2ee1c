/// RenderResponse - Output DTO of the report rendering use case
///
/// Describes which implementation rendered the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResponse {
    /// Format name the implementation is registered under
    pub format: &'static str,
    /// Implementation type that rendered the report
    pub formatter: &'static str,
    /// Media type of the rendered output
    pub media_type: &'static str,
    /// Number of body samples fed to the formatter
    pub samples_fed: usize,
}
