// Newsletter subscriptions. Independent of the resume and profile pipelines.

pub mod handlers;
pub mod store;
