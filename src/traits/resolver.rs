use crate::config::PipelineConfig;
use crate::errors::ResolveError;
use crate::store::Pipe;

/// Turns a configuration plus the pipe's current contents into an ordered
/// list of task ids.
///
/// The returned order must satisfy every task's declared requirements. When
/// `overwrite` is false, tasks whose outputs already exist may be left out.
pub trait Resolver: Send + Sync {
    fn resolve(
        &self,
        config: &PipelineConfig,
        pipe: &Pipe,
        overwrite: bool,
    ) -> Result<Vec<String>, ResolveError>;
}
