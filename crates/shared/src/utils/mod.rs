mod logs;
mod mask;
mod timestamp;

pub use self::logs::Logger;
pub use self::mask::mask_card_number;
pub use self::timestamp::current_timestamp;
