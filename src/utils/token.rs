use rand::{distributions::Alphanumeric, Rng};

pub const REMEMBER_TOKEN_LENGTH: usize = 10;

/// Random alphanumeric string, used for remember tokens
pub fn random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

pub fn remember_token() -> String {
    random_string(REMEMBER_TOKEN_LENGTH)
}
