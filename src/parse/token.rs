use logos::Logos;

#[derive(Debug, PartialEq, Logos, Clone, Copy)]
pub enum Token {
    #[token(" ")]
    Space,

    #[regex(r"\r\n|\r|\n")]
    NewLine,

    #[regex(r"[^ \r\n]+")]
    Text,

    #[error]
    Error,
}
