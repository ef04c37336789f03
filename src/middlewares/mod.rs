pub mod append_slash;
