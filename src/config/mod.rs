pub mod settings;

pub use settings::AppPaths;
