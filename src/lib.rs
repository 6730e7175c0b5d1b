pub mod commands;
pub mod fs_utils;
pub mod manifest;
pub mod paths;
pub mod profiles;
pub mod state;
pub mod switch;
pub mod sync;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
