pub type TokenList = Vec<String>;
