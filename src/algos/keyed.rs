use rand::{self, Rng};

use crate::algos::ceasar::{decrypt, encrypt};
use crate::constants::CANDIDATE_SHIFTS;
use crate::structs::Caesar;
use crate::traits::{Decryptor, Encryptor};

impl Caesar {
    pub fn new(shift: i64) -> Self {
        Caesar { shift }
    }

    /// A cipher keyed with a random non-identity shift.
    pub fn random() -> Self {
        let shift = rand::thread_rng().gen_range(CANDIDATE_SHIFTS);

        Caesar { shift }
    }
}

impl Encryptor for Caesar {
    fn encrypt(&self, message: &str) -> String {
        encrypt(message, self.shift)
    }
}

impl Decryptor for Caesar {
    fn decrypt(&self, message: &str) -> String {
        decrypt(message, self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_shift_is_never_identity() {
        for _ in 0..200 {
            let cipher = Caesar::random();
            assert!(CANDIDATE_SHIFTS.contains(&cipher.shift));
        }
    }

    #[test]
    fn works_through_trait_objects() {
        let cipher = Caesar::new(3);
        let encryptor: Box<dyn Encryptor> = Box::new(cipher);
        let decryptor: Box<dyn Decryptor> = Box::new(cipher);

        let sealed = encryptor.encrypt("Meet at 9");
        assert_eq!(sealed, "Phhwdw2");
        assert_eq!(decryptor.decrypt(&sealed), "Meetat9");
    }
}
