//! Membership Registry for the voting ledger
//!
//! Records the fixed set of addresses that may create proposals and vote.
//! The registry is written exactly once, while the host contract is being
//! initialized, and is read-only afterwards. The address that performed the
//! initialization is stored as the admin and is always a member.
//!
//! All functions operate on the storage of the contract that calls them, so
//! they must run inside a contract invocation.

#![no_std]

use soroban_sdk::{contracttype, Address, Env, Vec};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger one day is 17,280 ledgers.
const DAY_IN_LEDGERS: u32 = 17_280;
const MEMBER_TTL_LEDGERS: u32 = 30 * DAY_IN_LEDGERS;
const MEMBER_TTL_THRESHOLD: u32 = MEMBER_TTL_LEDGERS - DAY_IN_LEDGERS;

/// Storage keys owned by the registry
#[contracttype]
#[derive(Clone)]
pub enum MemberKey {
    /// Address that initialized the registry
    Admin,
    /// Maps Address -> true for every member
    Member(Address),
    /// Number of distinct members, admin included
    MemberCount,
}

/// Registry errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RegistryError {
    AlreadyInitialized,
    NotMember,
}

fn bump(env: &Env, key: &MemberKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, MEMBER_TTL_THRESHOLD, MEMBER_TTL_LEDGERS);
}

/// Stores `member` unless already present. Returns whether it was new.
fn insert_member(env: &Env, member: &Address) -> bool {
    let key = MemberKey::Member(member.clone());
    if env.storage().persistent().has(&key) {
        return false;
    }
    env.storage().persistent().set(&key, &true);
    bump(env, &key);
    true
}

/// Record the admin and the initial member list (call once during contract
/// initialization). Duplicates, including the admin appearing in `members`,
/// are stored once.
pub fn initialize_registry(
    env: &Env,
    admin: &Address,
    members: &Vec<Address>,
) -> Result<(), RegistryError> {
    if is_initialized(env) {
        return Err(RegistryError::AlreadyInitialized);
    }

    env.storage().persistent().set(&MemberKey::Admin, admin);
    bump(env, &MemberKey::Admin);

    let mut count: u32 = 0;
    if insert_member(env, admin) {
        count += 1;
    }
    for member in members.iter() {
        if insert_member(env, &member) {
            count += 1;
        }
    }

    env.storage().persistent().set(&MemberKey::MemberCount, &count);
    bump(env, &MemberKey::MemberCount);

    Ok(())
}

/// Whether the registry has been written
pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&MemberKey::Admin)
}

/// Get the admin address
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&MemberKey::Admin)
}

/// Check if an address is a member. Unknown addresses, and every address
/// before initialization, are not members.
pub fn is_member(env: &Env, identity: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<MemberKey, bool>(&MemberKey::Member(identity.clone()))
        .unwrap_or(false)
}

/// Require that the address is a member
pub fn require_member(env: &Env, identity: &Address) -> Result<(), RegistryError> {
    if is_member(env, identity) {
        Ok(())
    } else {
        Err(RegistryError::NotMember)
    }
}

/// Number of distinct members, admin included
pub fn member_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&MemberKey::MemberCount)
        .unwrap_or(0)
}
