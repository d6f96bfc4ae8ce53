pub mod factory;
mod invoke;
pub mod level_by_level;
#[cfg(test)]
pub mod recording;
pub mod sequential;

pub use factory::ExecutorFactory;
pub use level_by_level::LevelByLevelExecutor;
pub use sequential::SequentialExecutor;
