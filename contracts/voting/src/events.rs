//! Notification emission.
//!
//! Every notification is published as a contract event for external
//! listeners and appended to the on-chain notification log, so the log
//! and the event stream carry the same entries in the same order.

use soroban_sdk::{contractevent, Address, Env, String};

use crate::errors::VotingError;
use crate::storage;
use crate::types::{Notification, VoteChoice};

/// Topics `("created", proposal_id)`, data `question`
#[contractevent(topics = ["created"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    #[topic]
    pub proposal_id: u64,
    pub question: String,
}

/// Topics `("vote_cast", proposal_id)`, data `[voter, choice]`
#[contractevent(topics = ["vote_cast"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    #[topic]
    pub proposal_id: u64,
    pub voter: Address,
    pub choice: VoteChoice,
}

pub fn proposal_created(env: &Env, proposal_id: u64, question: &String) -> Result<(), VotingError> {
    ProposalCreated {
        proposal_id,
        question: question.clone(),
    }
    .publish(env);

    storage::append_notification(
        env,
        &Notification::ProposalCreated(proposal_id, question.clone()),
    )?;
    Ok(())
}

pub fn vote_cast(
    env: &Env,
    proposal_id: u64,
    voter: &Address,
    choice: VoteChoice,
) -> Result<(), VotingError> {
    VoteCast {
        proposal_id,
        voter: voter.clone(),
        choice,
    }
    .publish(env);

    storage::append_notification(
        env,
        &Notification::VoteCast(proposal_id, voter.clone(), choice),
    )?;
    Ok(())
}
