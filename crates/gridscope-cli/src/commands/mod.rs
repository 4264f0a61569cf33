pub mod completions;
pub mod schema;
pub mod supported;
pub mod topology;
pub mod util;
pub mod view;
