use crate::{share_token::ShareToken, *};

// All memes run on the registry's code. Activating one only reserves an id,
// derives its two account handles and lays out empty state; the record stays
// inert until Meme::construct succeeds on it.
impl RegistryContract {
    pub(crate) fn internal_activate_meme(&mut self) -> Meme {
        let meme_id = self.next_meme_id;
        self.next_meme_id += 1;
        let token = ShareToken::activate(
            share_token_account_id(meme_id),
            RegistryStorageKey::ShareAccounts { meme_id },
        );
        Meme::activate(meme_id, meme_account_id(meme_id), token)
    }
}

// holds the shares that were not sold yet
pub(crate) fn meme_account_id(meme_id: MemeId) -> AccountId {
    AccountId::new_unchecked(format!("{}.meme.{}", meme_id, env::current_account_id()))
}

pub(crate) fn share_token_account_id(meme_id: MemeId) -> AccountId {
    AccountId::new_unchecked(format!("{}.share.{}", meme_id, env::current_account_id()))
}
