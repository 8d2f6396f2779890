use crate::types::VoteCheckpoint;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use binding::taiko_token::TaikoToken;
use eyre::WrapErr;
use tracing::debug;

/// Reads ERC20Votes checkpoints from TaikoToken.
pub struct VotesProvider<P> {
    provider: P,
    token: Address,
}

impl<P> VotesProvider<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, token: Address) -> Self {
        Self { provider, token }
    }

    /// Every checkpoint of `account`, oldest first.
    pub async fn get_checkpoints(&self, account: Address) -> eyre::Result<Vec<VoteCheckpoint>> {
        let token = TaikoToken::new(self.token, &self.provider);
        let count = token
            .numCheckpoints(account)
            .call()
            .await
            .wrap_err_with(|| format!("Failed to get checkpoint count of {account}"))?;

        debug!(%account, count, "Fetching vote checkpoints");

        let mut checkpoints = Vec::with_capacity(count as usize);
        for pos in 0..count {
            let checkpoint = token
                .checkpoints(account, pos)
                .call()
                .await
                .wrap_err_with(|| format!("Failed to get checkpoint {pos} of {account}"))?;
            checkpoints.push(checkpoint.into());
        }

        Ok(checkpoints)
    }

    /// Current vote weight of `account`.
    pub async fn get_votes(&self, account: Address) -> eyre::Result<U256> {
        let token = TaikoToken::new(self.token, &self.provider);
        let votes = token
            .getVotes(account)
            .call()
            .await
            .wrap_err_with(|| format!("Failed to get votes of {account}"))?;
        Ok(votes)
    }

    pub async fn get_delegate(&self, account: Address) -> eyre::Result<Address> {
        let token = TaikoToken::new(self.token, &self.provider);
        let delegate = token
            .delegates(account)
            .call()
            .await
            .wrap_err_with(|| format!("Failed to get delegate of {account}"))?;
        Ok(delegate)
    }
}
