use crate::crypto::error::CipherError;

/// Дополнение PKCS#5/7: каждый байт дополнения хранит его суммарную длину.
/// Длина всегда в диапазоне `1..=block_size`, поэтому выровненный вход
/// получает целый дополнительный блок — это намеренно, иначе снятие
/// дополнения стало бы неоднозначным.
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!(block_size > 0 && block_size <= u8::MAX as usize);

    let padding_length = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + padding_length);
    padded.extend_from_slice(data);
    padded.extend(vec![padding_length as u8; padding_length]);
    padded
}

/// Снимает дополнение: последний байт задаёт число отбрасываемых байтов.
/// Промежуточные байты дополнения не сверяются с его длиной.
pub fn unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>, CipherError> {
    let last = *data.last().ok_or(CipherError::MalformedPadding)?;

    let padding_length = last as usize;
    if padding_length == 0 || padding_length > block_size || padding_length > data.len() {
        return Err(CipherError::MalformedPadding);
    }

    Ok(data[..data.len() - padding_length].to_vec())
}
