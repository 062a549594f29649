use std::io;
use std::path::Path;

use crate::crypto::cipher_io;
use crate::crypto::error::CipherError;

/// Общий контракт обоих шифров: байты в байты.
///
/// Шифрование тотально — все проверки параметров ключа выполняются один раз
/// при конструировании экземпляра. Расшифрование проверяет кратность длины
/// входа размеру блока и корректность дополнения.
pub trait CipherAlgorithm {
    fn encrypt(&self, data: &[u8]) -> Vec<u8>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// Текстовые и файловые обёртки поверх [`CipherAlgorithm`].
///
/// Реализуются покрывающей реализацией для любого шифра: общая
/// функциональность собирается композицией, а не наследованием. Файлы
/// читаются и пишутся целиком, без потоковой обработки.
pub trait CipherExt: CipherAlgorithm {
    fn encrypt_text(&self, text: &str) -> Vec<u8> {
        self.encrypt(text.as_bytes())
    }

    /// Байты трактуются как UTF-8; некорректные последовательности
    /// заменяются символом замены, а не приводят к ошибке.
    fn decrypt_text(&self, data: &[u8]) -> Result<String, CipherError> {
        let decrypted = self.decrypt(data)?;
        Ok(String::from_utf8_lossy(&decrypted).into_owned())
    }

    fn encrypt_file<P, Q>(&self, input: P, output: Q) -> io::Result<()>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let data = cipher_io::read_all(input)?;
        cipher_io::write_all(output, &self.encrypt(&data))
    }

    fn decrypt_file<P, Q>(&self, input: P, output: Q) -> io::Result<()>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let data = cipher_io::read_all(input)?;
        let decrypted = self
            .decrypt(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        cipher_io::write_all(output, &decrypted)
    }
}

impl<C: CipherAlgorithm + ?Sized> CipherExt for C {}
