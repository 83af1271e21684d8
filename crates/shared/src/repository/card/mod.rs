mod command;
mod memory;
mod query;
mod row;

pub use self::command::CardCommandRepository;
pub use self::memory::InMemoryCardRepository;
pub use self::query::CardQueryRepository;
