use thiserror::Error;

/// Ошибки обоих шифров. Все они возникают синхронно и никогда не
/// повторяются внутри библиотеки: отказ относится ко всему вызову целиком,
/// частично расшифрованных блоков наружу не отдаётся.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Длина шифртекста не кратна блочной гранулярности шифра.
    #[error("ciphertext length {length} is not a multiple of the {block_size}-byte block size")]
    InvalidLength { length: usize, block_size: usize },

    /// Последний байт дополнения вне диапазона `1..=block_size` либо
    /// больше длины буфера (включая пустой буфер).
    #[error("malformed padding: trailing byte out of range or exceeding the data length")]
    MalformedPadding,

    /// Параметры ключа отвергнуты при конструировании шифра.
    #[error("invalid key parameters: {0}")]
    InvalidKeyParameters(&'static str),
}
