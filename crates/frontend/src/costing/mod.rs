pub mod api;
pub mod machine;
pub mod render;
pub mod snapshot;
pub mod store;
pub mod view;
