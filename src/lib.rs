pub mod error;
pub mod mt19937;
pub mod material;
pub mod aes_ctr;
pub mod vectors;

pub mod kat_test;
