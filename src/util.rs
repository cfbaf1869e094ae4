pub mod web_ext;
