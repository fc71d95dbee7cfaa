// AES-256-CTR reference oracle. Blockwise formulation: the IV is the initial
// 128-bit big-endian counter, block i is keystream(iv + i mod 2^128) XOR
// plaintext block i. Must agree bit-for-bit with encrypting the concatenated
// stream under standard CTR (checked in tests against the `ctr` crate).

use aes::Aes256;
use cipher::generic_array::GenericArray;
use cipher::{BlockEncrypt, KeyInit};

use crate::error::VectorError;

pub const KEY_BYTES: usize = 32;
pub const BLOCK_BYTES: usize = 16;

/// Encrypts `plaintext_blocks` under AES-256-CTR. Pure function; the output
/// has the same block count and order as the input. Never truncates or pads:
/// any length violation is rejected up front.
pub fn encrypt_ctr(
    key: &[u8],
    iv: &[u8],
    plaintext_blocks: &[Vec<u8>],
) -> Result<Vec<[u8; BLOCK_BYTES]>, VectorError> {
    if key.len() != KEY_BYTES {
        return Err(VectorError::InvalidKeyLength { len: key.len() });
    }
    if iv.len() != BLOCK_BYTES {
        return Err(VectorError::InvalidIvLength { len: iv.len() });
    }
    for (index, block) in plaintext_blocks.iter().enumerate() {
        if block.len() != BLOCK_BYTES {
            return Err(VectorError::InvalidBlockLength { index, len: block.len() });
        }
    }

    let cipher = Aes256::new(GenericArray::from_slice(key));
    let mut iv_bytes = [0u8; BLOCK_BYTES];
    iv_bytes.copy_from_slice(iv);
    let base = u128::from_be_bytes(iv_bytes);

    let mut out = Vec::with_capacity(plaintext_blocks.len());
    for (i, block) in plaintext_blocks.iter().enumerate() {
        // wraparound past 2^128 - 1 is part of CTR semantics
        let counter = base.wrapping_add(i as u128);
        let mut keystream = GenericArray::from(counter.to_be_bytes());
        cipher.encrypt_block(&mut keystream);

        let mut ct = [0u8; BLOCK_BYTES];
        for (j, b) in ct.iter_mut().enumerate() {
            *b = keystream[j] ^ block[j];
        }
        out.push(ct);
    }
    Ok(out)
}

/// CTR is its own inverse: decryption XORs the same keystream.
pub fn decrypt_ctr(
    key: &[u8],
    iv: &[u8],
    ciphertext_blocks: &[Vec<u8>],
) -> Result<Vec<[u8; BLOCK_BYTES]>, VectorError> {
    encrypt_ctr(key, iv, ciphertext_blocks)
}

fn decode_hex_field(field: &'static str, s: &str) -> Result<Vec<u8>, VectorError> {
    hex::decode(s).map_err(|e| VectorError::InvalidArgument {
        field,
        reason: e.to_string(),
    })
}

/// Hex-level wrapper for the persisted vector format: lowercase hex in,
/// fixed-width lowercase hex out, one 32-char string per block.
pub fn encrypt_ctr_hex(
    key_hex: &str,
    iv_hex: &str,
    plaintext_hex: &[String],
) -> Result<Vec<String>, VectorError> {
    let key = decode_hex_field("key", key_hex)?;
    let iv = decode_hex_field("iv", iv_hex)?;
    let blocks = plaintext_hex
        .iter()
        .map(|b| decode_hex_field("plaintext block", b))
        .collect::<Result<Vec<_>, _>>()?;
    let ciphertext = encrypt_ctr(&key, &iv, &blocks)?;
    Ok(ciphertext.iter().map(hex::encode).collect())
}
