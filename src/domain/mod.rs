pub mod failure;
pub mod locale;
pub mod place;
pub mod query;
pub mod recipient;
pub mod reply;
