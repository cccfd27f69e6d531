#![no_std]
//! # Voting Ledger Contract
//!
//! A membership-gated governance ledger. A fixed set of members, recorded
//! when the contract is initialized, can create yes/no proposals and cast,
//! change or withdraw votes on them. Tallies are kept incrementally and
//! always match the stored vote records.
//!
//! Creating a proposal counts as its author's first `Yes` vote. Every
//! successful vote and every new proposal is published as a contract event
//! and appended to an on-chain notification log.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod contract;
mod errors;
mod events;
mod storage;
mod types;

use contract::VotingLedger;

pub use contract::MAX_PAGE_SIZE;
pub use errors::VotingError;
pub use types::{Notification, Proposal, ProposalView, VoteChoice};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    /// Record `admin` and `members` as the fixed membership. Can only be
    /// called once; `admin` is always a member.
    pub fn initialize(env: Env, admin: Address, members: Vec<Address>) -> Result<(), VotingError> {
        VotingLedger::initialize(env, admin, members)
    }

    /// Create a proposal and record the caller's `Yes` vote on it.
    /// Returns the new proposal id.
    pub fn create_proposal(env: Env, caller: Address, question: String) -> Result<u64, VotingError> {
        VotingLedger::create_proposal(env, caller, question)
    }

    /// Cast or change the caller's vote. Repeating the current choice
    /// leaves the tally unchanged.
    pub fn cast_vote(
        env: Env,
        caller: Address,
        proposal_id: u64,
        choice: VoteChoice,
    ) -> Result<(), VotingError> {
        VotingLedger::cast_vote(env, caller, proposal_id, choice)
    }

    pub fn remove_vote(env: Env, caller: Address, proposal_id: u64) -> Result<(), VotingError> {
        VotingLedger::remove_vote(env, caller, proposal_id)
    }

    pub fn has_voted(env: Env, voter: Address, proposal_id: u64) -> bool {
        VotingLedger::has_voted(env, voter, proposal_id)
    }

    pub fn get_vote(env: Env, voter: Address, proposal_id: u64) -> Option<VoteChoice> {
        VotingLedger::get_vote(env, voter, proposal_id)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, VotingError> {
        VotingLedger::get_proposal(env, proposal_id)
    }

    /// Snapshot of a proposal as seen by `viewer`.
    pub fn get_proposal_view(
        env: Env,
        viewer: Address,
        proposal_id: u64,
    ) -> Result<ProposalView, VotingError> {
        VotingLedger::get_proposal_view(env, viewer, proposal_id)
    }

    pub fn proposal_count(env: Env) -> u64 {
        VotingLedger::proposal_count(env)
    }

    pub fn is_member(env: Env, identity: Address) -> bool {
        VotingLedger::is_member(env, identity)
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        VotingLedger::get_admin(env)
    }

    pub fn member_count(env: Env) -> u32 {
        VotingLedger::member_count(env)
    }

    pub fn notification_count(env: Env) -> u64 {
        VotingLedger::notification_count(env)
    }

    pub fn get_notification(env: Env, index: u64) -> Result<Notification, VotingError> {
        VotingLedger::get_notification(env, index)
    }

    pub fn get_notifications(env: Env, start: u64, limit: u32) -> Vec<Notification> {
        VotingLedger::get_notifications(env, start, limit)
    }
}
