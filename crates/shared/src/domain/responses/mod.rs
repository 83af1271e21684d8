mod card;

pub use self::card::CardResponse;
