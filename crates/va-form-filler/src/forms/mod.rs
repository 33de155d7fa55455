pub mod va21_0966;
pub mod writer;
