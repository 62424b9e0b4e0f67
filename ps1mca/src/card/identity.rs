// ps1mca/src/card/identity.rs

use crate::constants::ID_SIGNATURE;
use crate::protocol::responses::IdResponse;
use crate::types::CardIdentity;

/// Classify a card from its get-id reply.
///
/// Original cards and PocketStations answer with a fixed signature window;
/// anything else is reported as unofficial without failing the operation.
pub fn classify(response: &IdResponse) -> CardIdentity {
    if response.signature() == ID_SIGNATURE {
        CardIdentity::MemoryCard
    } else {
        CardIdentity::Unofficial
    }
}
