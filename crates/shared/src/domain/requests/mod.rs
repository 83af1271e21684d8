mod card;

pub use self::card::{CreateCardRequest, UpdateCardStatusRequest};
