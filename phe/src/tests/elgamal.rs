use rug::Integer;
use rug::integer::IsPrime;
use sampling::source::Source;

use crate::{
    ElGamal, ElGamalCiphertext, ElGamalPrivateKey, ElGamalPublicKey, HomomorphicScheme, KeyGenParams, Operation, PheError,
    SchemeKind,
    arith::pow_mod, tests::KEY_SIZE,
};

fn setup(seed: [u8; 32]) -> (ElGamal, ElGamalPublicKey, ElGamalPrivateKey, Source) {
    let scheme: ElGamal = ElGamal::default();
    let mut source: Source = Source::new(seed);
    let (pk, sk) = scheme.generate_keys(KEY_SIZE, &mut source).unwrap();
    (scheme, pk, sk, source)
}

#[test]
fn key_generation_invariants() {
    let (_, pk, sk, _) = setup([0u8; 32]);
    let p: &Integer = pk.p();
    let p_minus_one: Integer = Integer::from(p - 1u32);

    assert_eq!(pk.key_size(), KEY_SIZE);
    assert_ne!(p.is_probably_prime(40), IsPrime::No);
    assert_eq!(sk.p(), p);
    assert!(*pk.g() > 1 && *pk.g() < p_minus_one);
    assert!(sk.x > 1 && sk.x < p_minus_one);
    assert_eq!(*pk.h(), pow_mod(pk.g(), &sk.x, p));
}

#[test]
fn encrypt_decrypt() {
    let (scheme, pk, sk, mut source) = setup([0u8; 32]);
    let p_minus_one: Integer = Integer::from(pk.p() - 1u32);

    [Integer::new(), Integer::from(1), Integer::from(42), p_minus_one].iter().for_each(|m| {
        let ct: ElGamalCiphertext = scheme.encrypt(m, &pk, &mut source).unwrap();
        assert_eq!(scheme.decrypt(&ct, &sk).unwrap(), *m);
    });
}

#[test]
fn encrypt_decrypt_large_plaintext() {
    let (scheme, pk, sk, mut source) = setup([1u8; 32]);
    let plaintext: f64 = 12345678901234567890.0;
    let ct: ElGamalCiphertext = scheme.encrypt_f64(plaintext, &pk, &mut source).unwrap();
    let have: Integer = scheme.decrypt(&ct, &sk).unwrap();
    assert_eq!(have.to_f64(), plaintext);
}

#[test]
fn encrypt_f64_truncates() {
    let (scheme, pk, sk, mut source) = setup([0u8; 32]);
    let ct: ElGamalCiphertext = scheme.encrypt_f64(10.7, &pk, &mut source).unwrap();
    assert_eq!(scheme.decrypt(&ct, &sk).unwrap(), 10);
}

#[test]
fn homomorphic_multiplication() {
    let (scheme, pk, sk, mut source) = setup([0u8; 32]);
    let ct1: ElGamalCiphertext = scheme.encrypt_f64(10.0, &pk, &mut source).unwrap();
    let ct2: ElGamalCiphertext = scheme.encrypt_f64(20.0, &pk, &mut source).unwrap();
    let ct1_before: ElGamalCiphertext = ct1.clone();
    let ct2_before: ElGamalCiphertext = ct2.clone();

    let ct_mul: ElGamalCiphertext = scheme.multiply(&ct1, &ct2).unwrap();
    assert_eq!(scheme.decrypt(&ct_mul, &sk).unwrap(), 200);

    assert_eq!(ct1, ct1_before);
    assert_eq!(ct2, ct2_before);
}

#[test]
fn homomorphic_multiplication_wraps_modulo_p() {
    let (scheme, pk, sk, mut source) = setup([2u8; 32]);
    let p_minus_one: Integer = Integer::from(pk.p() - 1u32);
    let ct: ElGamalCiphertext = scheme.encrypt(&p_minus_one, &pk, &mut source).unwrap();
    let ct_sq: ElGamalCiphertext = scheme.multiply(&ct, &ct).unwrap();
    assert_eq!(scheme.decrypt(&ct_sq, &sk).unwrap(), 1);
}

#[test]
fn addition_is_unsupported() {
    let (scheme, pk, _, mut source) = setup([0u8; 32]);
    let ct1: ElGamalCiphertext = scheme.encrypt(&Integer::from(10), &pk, &mut source).unwrap();
    let ct2: ElGamalCiphertext = scheme.encrypt(&Integer::from(20), &pk, &mut source).unwrap();
    assert_eq!(
        scheme.add(&ct1, &ct2),
        Err(PheError::UnsupportedOperation {
            scheme: SchemeKind::ElGamal,
            operation: Operation::Add,
        })
    );
}

#[test]
fn scalar_multiplication_is_unsupported() {
    let (scheme, pk, _, mut source) = setup([0u8; 32]);
    let ct: ElGamalCiphertext = scheme.encrypt(&Integer::from(10), &pk, &mut source).unwrap();
    [0, 1, 5, -3].iter().for_each(|&k| {
        assert_eq!(
            scheme.multiply_scalar(&ct, &Integer::from(k)),
            Err(PheError::UnsupportedOperation {
                scheme: SchemeKind::ElGamal,
                operation: Operation::MultiplyScalar,
            })
        );
    });
}

#[test]
fn encryption_is_randomized() {
    let (scheme, pk, sk, mut source) = setup([0u8; 32]);
    let m: Integer = Integer::from(7);
    let ct1: ElGamalCiphertext = scheme.encrypt(&m, &pk, &mut source).unwrap();
    let ct2: ElGamalCiphertext = scheme.encrypt(&m, &pk, &mut source).unwrap();
    assert_ne!(ct1, ct2);
    assert_eq!(scheme.decrypt(&ct1, &sk).unwrap(), scheme.decrypt(&ct2, &sk).unwrap());
}

#[test]
fn rejects_plaintext_outside_group() {
    let (scheme, pk, _, mut source) = setup([0u8; 32]);
    let p: Integer = pk.p().clone();
    [Integer::from(-1), p.clone(), p + 1u32].iter().for_each(|m| {
        assert!(matches!(scheme.encrypt(m, &pk, &mut source), Err(PheError::Encoding(_))));
    });
    assert!(matches!(scheme.encrypt_f64(-3.5, &pk, &mut source), Err(PheError::Encoding(_))));
    assert!(matches!(scheme.encrypt_f64(f64::NAN, &pk, &mut source), Err(PheError::Encoding(_))));
}

#[test]
fn rejects_mixed_keys() {
    let (scheme, pk_a, sk_a, mut source) = setup([0u8; 32]);
    let (_, pk_b, sk_b, _) = setup([9u8; 32]);
    assert_ne!(pk_a.p(), pk_b.p());

    let ct_a: ElGamalCiphertext = scheme.encrypt(&Integer::from(3), &pk_a, &mut source).unwrap();
    let ct_b: ElGamalCiphertext = scheme.encrypt(&Integer::from(4), &pk_b, &mut source).unwrap();

    assert_eq!(scheme.multiply(&ct_a, &ct_b), Err(PheError::KeyMismatch));
    assert_eq!(scheme.decrypt(&ct_a, &sk_b), Err(PheError::KeyMismatch));
    assert_eq!(scheme.decrypt(&ct_b, &sk_a), Err(PheError::KeyMismatch));
    assert_eq!(scheme.rerandomize(&ct_a, &pk_b, &mut source), Err(PheError::KeyMismatch));
}

#[test]
fn rerandomize_preserves_plaintext() {
    let (scheme, pk, sk, mut source) = setup([3u8; 32]);
    let ct: ElGamalCiphertext = scheme.encrypt(&Integer::from(99), &pk, &mut source).unwrap();
    let ct_fresh: ElGamalCiphertext = scheme.rerandomize(&ct, &pk, &mut source).unwrap();
    assert_ne!(ct, ct_fresh);
    assert_eq!(scheme.decrypt(&ct_fresh, &sk).unwrap(), 99);
}

#[test]
fn exponentiate_raises_plaintext() {
    let (scheme, pk, sk, mut source) = setup([0u8; 32]);
    let ct: ElGamalCiphertext = scheme.encrypt(&Integer::from(3), &pk, &mut source).unwrap();

    let ct_pow: ElGamalCiphertext = scheme.exponentiate(&ct, &Integer::from(5)).unwrap();
    assert_eq!(scheme.decrypt(&ct_pow, &sk).unwrap(), 243);

    let ct_one: ElGamalCiphertext = scheme.exponentiate(&ct, &Integer::new()).unwrap();
    assert_eq!(scheme.decrypt(&ct_one, &sk).unwrap(), 1);

    assert!(matches!(scheme.exponentiate(&ct, &Integer::from(-2)), Err(PheError::Encoding(_))));
}

#[test]
fn corrupted_ciphertext_fails_decryption() {
    let (scheme, pk, sk, _) = setup([0u8; 32]);
    let ct: ElGamalCiphertext = ElGamalCiphertext {
        c1: Integer::new(),
        c2: Integer::from(5),
        p: pk.p().clone(),
    };
    assert!(matches!(scheme.decrypt(&ct, &sk), Err(PheError::Decryption(_))));
}

#[test]
fn same_seed_same_keys() {
    let (_, pk_a, sk_a, _) = setup([5u8; 32]);
    let (_, pk_b, sk_b, _) = setup([5u8; 32]);
    assert_eq!(pk_a, pk_b);
    assert_eq!(sk_a, sk_b);
}

#[test]
fn sampling_gives_up_after_max_retries() {
    let scheme: ElGamal = ElGamal::new(KeyGenParams {
        max_retries: 3,
        ..KeyGenParams::default()
    });
    let mut source: Source = Source::new([0u8; 32]);

    let mut calls: usize = 0;
    let res = scheme.sample_above_one("generator", &mut source, |_| {
        calls += 1;
        Integer::from(1)
    });
    assert!(matches!(res, Err(PheError::KeyGeneration(_))));
    assert_eq!(calls, 3);

    let res = scheme.sample_above_one("generator", &mut source, |_| Integer::from(2));
    assert_eq!(res, Ok(Integer::from(2)));
}

#[test]
fn rejects_tiny_key_size() {
    let scheme: ElGamal = ElGamal::default();
    let mut source: Source = Source::new([0u8; 32]);
    assert!(matches!(scheme.generate_keys(8, &mut source), Err(PheError::KeyGeneration(_))));
}

#[test]
fn private_key_debug_is_redacted() {
    let (_, _, sk, _) = setup([0u8; 32]);
    let printed: String = format!("{:?}", sk);
    assert!(printed.contains("<redacted>"));
    assert!(!printed.contains(&sk.x.to_string()));
}
