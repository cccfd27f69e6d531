use soroban_sdk::{contracttype, Address, Env};

use crate::errors::VotingError;
use crate::types::{Notification, Proposal, VoteChoice};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger one day is 17,280 ledgers. Entries are extended to 30
// days whenever they are written and fall within a day of expiry.
const DAY_IN_LEDGERS: u32 = 17_280;
const ENTRY_TTL_LEDGERS: u32 = 30 * DAY_IN_LEDGERS;
const ENTRY_TTL_THRESHOLD: u32 = ENTRY_TTL_LEDGERS - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    ProposalCount,
    Proposal(u64),
    Vote(u64, Address), // (proposal_id, voter)
    NotificationCount,
    Notification(u64),
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, ENTRY_TTL_THRESHOLD, ENTRY_TTL_LEDGERS);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::ProposalCount, &count);
    bump(env, &DataKey::ProposalCount);
}

pub fn load_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    bump(env, &key);
}

// ── Vote records ─────────────────────────────────────────────────────────────

pub fn get_vote(env: &Env, proposal_id: u64, voter: &Address) -> Option<VoteChoice> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn has_vote(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn set_vote(env: &Env, proposal_id: u64, voter: &Address, choice: VoteChoice) {
    let key = DataKey::Vote(proposal_id, voter.clone());
    env.storage().persistent().set(&key, &choice);
    bump(env, &key);
}

pub fn delete_vote(env: &Env, proposal_id: u64, voter: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Vote(proposal_id, voter.clone()));
}

// ── Notification log ─────────────────────────────────────────────────────────

pub fn get_notification_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::NotificationCount)
        .unwrap_or(0)
}

/// Appends to the log and returns the index the entry was stored at.
pub fn append_notification(env: &Env, notification: &Notification) -> Result<u64, VotingError> {
    let index = get_notification_count(env);
    let next = index.checked_add(1).ok_or(VotingError::Overflow)?;

    let key = DataKey::Notification(index);
    env.storage().persistent().set(&key, notification);
    bump(env, &key);

    env.storage()
        .persistent()
        .set(&DataKey::NotificationCount, &next);
    bump(env, &DataKey::NotificationCount);

    Ok(index)
}

pub fn get_notification(env: &Env, index: u64) -> Option<Notification> {
    env.storage()
        .persistent()
        .get(&DataKey::Notification(index))
}
