/// Data Transfer Objects for application layer
///
/// DTOs carry what the front-end collected into the rendering use case
/// and report back what was rendered.
mod render_request;
mod render_response;

pub use render_request::RenderRequest;
pub use render_response::RenderResponse;
