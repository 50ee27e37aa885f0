pub mod numbers;
pub mod stack;
pub mod tokenizer;
pub mod value;
