pub mod executor;
pub mod resolver;
pub mod task_function;

pub use executor::GraphExecutor;
pub use resolver::Resolver;
pub use task_function::TaskFunction;
