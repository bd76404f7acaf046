//! # Vocabulary IO

pub mod json_io;

pub use json_io::{
    load_vocabulary_from_path, load_vocabulary_from_str, save_vocabulary_to_path,
    save_vocabulary_to_writer,
};
