pub mod parse;
pub mod template;
