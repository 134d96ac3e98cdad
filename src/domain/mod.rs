pub mod keyword;

pub use keyword::KeywordRow;
