use crate::{info, success, tidal::Client};

/// Prints the bearer token held by `client`.
pub fn token(client: &Client) {
    success!("Authentication successful!");
    info!("Country code: {}", client.country_code());
    println!("{}", client.token());
}
