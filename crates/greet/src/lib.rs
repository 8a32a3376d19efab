use capability_common::CapabilityError;
use serde::{Deserialize, Serialize};

/// Author named in every greeting.
pub const AUTHOR: &str = "Zeina Bekdache";

#[derive(Debug, Deserialize)]
pub struct GreetInput {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GreetResponse {
    pub greeting: String,
}

/// Build the greeting for `name`. Any string is accepted, including empty.
pub fn greet(name: &str) -> String {
    format!("Hello, {} from {}!", name, AUTHOR)
}

/// Capability handler: wrap [`greet`] in the wire records.
pub fn handle(input: GreetInput) -> Result<GreetResponse, CapabilityError> {
    Ok(GreetResponse {
        greeting: greet(&input.name),
    })
}
