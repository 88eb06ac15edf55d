//! Tallies encrypted votes with Paillier and computes an encrypted product
//! with ElGamal, decrypting only the aggregates.

use std::error::Error;

use phe::{DEFAULT_KEY_SIZE, ElGamal, HomomorphicScheme, Integer, Paillier, os_source};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let key_size: u32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(DEFAULT_KEY_SIZE);

    let mut source = os_source()?;

    info!("Paillier tally, key size {}", key_size);
    let paillier: Paillier = Paillier::default();
    let (pk, sk) = paillier.generate_keys(key_size, &mut source)?;

    let votes: [u32; 6] = [1, 0, 1, 1, 0, 1];
    let mut tally = paillier.encrypt(&Integer::new(), &pk, &mut source)?;
    for vote in votes {
        let ballot = paillier.encrypt(&Integer::from(vote), &pk, &mut source)?;
        tally = paillier.add(&tally, &ballot)?;
    }
    let weighted = paillier.multiply_scalar(&tally, &Integer::from(10))?;
    info!("Yes votes: {}", paillier.decrypt(&tally, &sk)?);
    info!("Weighted tally (x10): {}", paillier.decrypt(&weighted, &sk)?);

    info!("ElGamal product, key size {}", key_size);
    let elgamal: ElGamal = ElGamal::default();
    let (pk, sk) = elgamal.generate_keys(key_size, &mut source)?;
    let factors: [u32; 4] = [3, 5, 7, 11];
    let mut product = elgamal.encrypt(&Integer::from(1), &pk, &mut source)?;
    for factor in factors {
        let ct = elgamal.encrypt(&Integer::from(factor), &pk, &mut source)?;
        product = elgamal.multiply(&product, &ct)?;
    }
    info!("Product: {}", elgamal.decrypt(&product, &sk)?);

    if let Err(err) = elgamal.add(&product, &product) {
        info!("As expected: {}", err);
    }

    Ok(())
}
