mod command;
mod query;

pub use self::command::CardCommandService;
pub use self::query::CardQueryService;
