mod elgamal;

pub(crate) const KEY_SIZE: u32 = 128;
