/// Maximum units a player may field
pub const TEAM_SIZE: usize = 5;
/// Credits granted at the start of every turn
pub const STARTING_CREDITS: i32 = 10;
/// Starting lives
pub const STARTING_LIVES: i32 = 10;
/// Price of recruiting a unit
pub const RECRUIT_COST: i32 = 3;
/// Credits returned when selling a unit
pub const SELL_REFUND: i32 = 1;
/// Lives lost when a battle is lost
pub const LIVES_LOST_ON_DEFEAT: i32 = 2;
/// Ribbons needed for victory
pub const RIBBONS_TO_VICTORY: i32 = 10;
