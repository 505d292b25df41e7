// Text cleanup shared by the resume and profile pipelines.
// Everything except the handler is pure and synchronous.

pub mod handlers;
pub mod html;
pub mod normalize;
