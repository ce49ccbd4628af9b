use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated identifiers
const ID_LEN: usize = 9;

/// Generate a compact random identifier: nine alphanumeric characters.
/// Collisions are not prevented, only made astronomically unlikely.
pub fn fresh_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN).map(|_| rng.sample(Alphanumeric) as char).collect()
}
