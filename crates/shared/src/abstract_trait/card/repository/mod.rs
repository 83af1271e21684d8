mod command;
mod query;

pub use self::command::{CardCommandRepositoryTrait, DynCardCommandRepository};
pub use self::query::{CardQueryRepositoryTrait, DynCardQueryRepository};
