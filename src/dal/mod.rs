pub mod place_db;
