use membership::RegistryError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller is not a registered member
    Unauthorized = 1,
    /// Proposal or notification index was never assigned
    NotFound = 2,
    NotInitialized = 3,
    AlreadyInitialized = 4,
    /// Counter or tally arithmetic out of range
    Overflow = 5,
}

impl From<RegistryError> for VotingError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::AlreadyInitialized => VotingError::AlreadyInitialized,
            RegistryError::NotMember => VotingError::Unauthorized,
        }
    }
}
