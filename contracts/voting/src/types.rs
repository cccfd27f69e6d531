use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteChoice {
    Yes,
    No,
}

/// A votable question with its running tally.
///
/// `yes_count + no_count` always equals the number of vote records stored
/// for this proposal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub creator: Address,
    pub question: String,
    pub yes_count: u32,
    pub no_count: u32,
    pub is_open: bool,
}

/// Read-only snapshot handed to presentation layers, with `has_voted`
/// already resolved for the viewing participant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalView {
    pub id: u64,
    pub question: String,
    pub yes_count: u32,
    pub no_count: u32,
    pub has_voted: bool,
    pub is_open: bool,
}

/// Entry of the append-only notification log
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Notification {
    /// (proposal_id, question)
    ProposalCreated(u64, String),
    /// (proposal_id, voter, choice)
    VoteCast(u64, Address, VoteChoice),
}
