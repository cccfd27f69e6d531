use soroban_sdk::{log, Address, Env, String, Vec};

use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::types::{Notification, Proposal, ProposalView, VoteChoice};

/// Upper bound on notifications returned by one paged read. Each
/// notification is its own ledger entry, and an invocation may touch at most
/// 100 entries including the contract instance, code and log counter.
pub const MAX_PAGE_SIZE: u32 = 50;

pub struct VotingLedger;

fn tally_mut(proposal: &mut Proposal, choice: VoteChoice) -> &mut u32 {
    match choice {
        VoteChoice::Yes => &mut proposal.yes_count,
        VoteChoice::No => &mut proposal.no_count,
    }
}

fn increment(proposal: &mut Proposal, choice: VoteChoice) -> Result<(), VotingError> {
    let count = tally_mut(proposal, choice);
    *count = count.checked_add(1).ok_or(VotingError::Overflow)?;
    Ok(())
}

fn decrement(proposal: &mut Proposal, choice: VoteChoice) -> Result<(), VotingError> {
    let count = tally_mut(proposal, choice);
    *count = count.checked_sub(1).ok_or(VotingError::Overflow)?;
    Ok(())
}

/// Records `choice` for `voter` on the in-memory `proposal` and persists the
/// vote record. The caller saves the proposal. Returns whether the tally
/// changed.
///
/// A count is only decremented for a choice read back from an existing
/// record, so tallies cannot drop below the number of records.
fn record_vote(
    env: &Env,
    proposal: &mut Proposal,
    voter: &Address,
    choice: VoteChoice,
) -> Result<bool, VotingError> {
    let changed = match storage::get_vote(env, proposal.id, voter) {
        Some(current) if current == choice => {
            log!(env, "vote repeated", proposal.id, voter.clone(), choice);
            false
        }
        Some(current) => {
            decrement(proposal, current)?;
            increment(proposal, choice)?;
            storage::set_vote(env, proposal.id, voter, choice);
            log!(env, "vote changed", proposal.id, voter.clone(), choice);
            true
        }
        None => {
            increment(proposal, choice)?;
            storage::set_vote(env, proposal.id, voter, choice);
            log!(env, "vote recorded", proposal.id, voter.clone(), choice);
            true
        }
    };

    events::vote_cast(env, proposal.id, voter, choice)?;
    Ok(changed)
}

fn require_member(env: &Env, caller: &Address) -> Result<(), VotingError> {
    membership::require_member(env, caller)?;
    Ok(())
}

fn existing_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, VotingError> {
    storage::load_proposal(env, proposal_id).ok_or(VotingError::NotFound)
}

impl VotingLedger {
    // -------------------------------
    // Initialization
    // -------------------------------
    pub fn initialize(env: Env, admin: Address, members: Vec<Address>) -> Result<(), VotingError> {
        if membership::is_initialized(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();

        membership::initialize_registry(&env, &admin, &members)?;
        storage::set_proposal_count(&env, 0);

        log!(&env, "ledger initialized", admin, membership::member_count(&env));
        Ok(())
    }

    // -------------------------------
    // Proposal Creation
    // -------------------------------
    pub fn create_proposal(env: Env, caller: Address, question: String) -> Result<u64, VotingError> {
        caller.require_auth();
        require_member(&env, &caller)?;

        let id = storage::get_proposal_count(&env);
        let next_id = id.checked_add(1).ok_or(VotingError::Overflow)?;

        let mut proposal = Proposal {
            id,
            creator: caller.clone(),
            question: question.clone(),
            yes_count: 0,
            no_count: 0,
            is_open: true,
        };

        storage::set_proposal_count(&env, next_id);
        events::proposal_created(&env, id, &question)?;
        log!(&env, "proposal created", id, caller.clone());

        // The author's implicit first vote
        record_vote(&env, &mut proposal, &caller, VoteChoice::Yes)?;
        storage::save_proposal(&env, &proposal);

        Ok(id)
    }

    // -------------------------------
    // Voting
    // -------------------------------
    pub fn cast_vote(
        env: Env,
        caller: Address,
        proposal_id: u64,
        choice: VoteChoice,
    ) -> Result<(), VotingError> {
        caller.require_auth();
        require_member(&env, &caller)?;
        let mut proposal = existing_proposal(&env, proposal_id)?;

        if record_vote(&env, &mut proposal, &caller, choice)? {
            storage::save_proposal(&env, &proposal);
        }
        Ok(())
    }

    /// Withdraws the caller's vote. Removing a vote that was never cast
    /// succeeds without changing anything.
    pub fn remove_vote(env: Env, caller: Address, proposal_id: u64) -> Result<(), VotingError> {
        caller.require_auth();
        require_member(&env, &caller)?;
        let mut proposal = existing_proposal(&env, proposal_id)?;

        let Some(choice) = storage::get_vote(&env, proposal_id, &caller) else {
            log!(&env, "no vote to remove", proposal_id, caller);
            return Ok(());
        };

        decrement(&mut proposal, choice)?;
        storage::delete_vote(&env, proposal_id, &caller);
        storage::save_proposal(&env, &proposal);

        log!(&env, "vote removed", proposal_id, caller, choice);
        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------
    pub fn has_voted(env: Env, voter: Address, proposal_id: u64) -> bool {
        storage::has_vote(&env, proposal_id, &voter)
    }

    pub fn get_vote(env: Env, voter: Address, proposal_id: u64) -> Option<VoteChoice> {
        storage::get_vote(&env, proposal_id, &voter)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, VotingError> {
        existing_proposal(&env, proposal_id)
    }

    pub fn get_proposal_view(
        env: Env,
        viewer: Address,
        proposal_id: u64,
    ) -> Result<ProposalView, VotingError> {
        let proposal = existing_proposal(&env, proposal_id)?;
        Ok(ProposalView {
            id: proposal.id,
            has_voted: storage::has_vote(&env, proposal_id, &viewer),
            question: proposal.question,
            yes_count: proposal.yes_count,
            no_count: proposal.no_count,
            is_open: proposal.is_open,
        })
    }

    pub fn proposal_count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }

    // -------------------------------
    // Membership Queries
    // -------------------------------
    pub fn is_member(env: Env, identity: Address) -> bool {
        membership::is_member(&env, &identity)
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        membership::get_admin(&env).ok_or(VotingError::NotInitialized)
    }

    pub fn member_count(env: Env) -> u32 {
        membership::member_count(&env)
    }

    // -------------------------------
    // Notification Log
    // -------------------------------
    pub fn notification_count(env: Env) -> u64 {
        storage::get_notification_count(&env)
    }

    pub fn get_notification(env: Env, index: u64) -> Result<Notification, VotingError> {
        storage::get_notification(&env, index).ok_or(VotingError::NotFound)
    }

    /// Returns up to `limit` notifications starting at `start`, in emission
    /// order. `limit` is capped at `MAX_PAGE_SIZE`.
    pub fn get_notifications(env: Env, start: u64, limit: u32) -> Vec<Notification> {
        let count = storage::get_notification_count(&env);
        let limit = limit.min(MAX_PAGE_SIZE);

        let mut page = Vec::new(&env);
        let mut index = start;
        while index < count && page.len() < limit {
            if let Some(notification) = storage::get_notification(&env, index) {
                page.push_back(notification);
            }
            index += 1;
        }
        page
    }
}
