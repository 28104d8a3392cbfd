use rand::{rngs::StdRng, SeedableRng};

pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Seed string for one generated instance. Every (type, version) pair of a
/// batch gets its own stream so that dropping or reordering pairs never
/// changes the periods drawn for the others.
pub fn instance_seed_str(root_seed: u64, instance_type: &str, version: &str) -> String {
    format!("{}:{}:{}", root_seed, instance_type, version)
}

pub fn rng_from_str(input: &str) -> StdRng {
    StdRng::from_seed(u8s_from_str(input))
}
