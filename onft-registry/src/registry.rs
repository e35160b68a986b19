use crate::context::TxContext;
use chrono::{DateTime, Utc};
use log::info;
use onft_core::error::RegistryError;
use onft_core::{
    Address, Denom, Event, MsgBurnOnft, MsgCreateDenom, MsgEditOnft, MsgMintOnft,
    MsgTransferDenom, MsgTransferOnft, MsgUpdateDenom, Onft, RegistryMsg,
};
use onft_store::{DenomStore, KvStore, OnftStore};

/// The state-transition engine over the denom/oNFT stores.
///
/// The registry is stateless; every operation runs against the
/// transaction context it is handed and either stages a complete,
/// consistent set of writes or fails without staging anything the
/// caller will commit.
#[derive(Debug, Default, Clone, Copy)]
pub struct Registry;

fn authorize_denom_creator(denom: &Denom, caller: &Address) -> Result<(), RegistryError> {
    if &denom.creator != caller {
        return Err(RegistryError::Unauthorized(caller.to_string()));
    }
    Ok(())
}

fn authorize_onft_owner(onft: &Onft, caller: &Address) -> Result<(), RegistryError> {
    if &onft.owner != caller {
        return Err(RegistryError::Unauthorized(caller.to_string()));
    }
    Ok(())
}

fn must_get_denom(ctx: &TxContext<'_>, denom_id: &str) -> Result<Denom, RegistryError> {
    ctx.batch
        .get_denom(denom_id)?
        .ok_or_else(|| RegistryError::DenomNotFound(denom_id.to_string()))
}

fn must_get_onft(
    ctx: &TxContext<'_>,
    denom_id: &str,
    onft_id: &str,
) -> Result<Onft, RegistryError> {
    ctx.batch
        .get_onft(denom_id, onft_id)?
        .ok_or_else(|| RegistryError::OnftNotFound {
            denom_id: denom_id.to_string(),
            onft_id: onft_id.to_string(),
        })
}

impl Registry {
    pub fn new() -> Self {
        Registry
    }

    /// Dispatch one operation request.
    ///
    /// The message's own self-consistency check runs first; store state
    /// is only consulted afterwards. On error the context's staged
    /// writes are garbage the caller must discard (drop the context
    /// instead of committing it).
    pub fn execute(&self, ctx: &mut TxContext<'_>, msg: RegistryMsg) -> Result<(), RegistryError> {
        msg.validate_basic()?;
        match msg {
            RegistryMsg::CreateDenom(msg) => self.create_denom(ctx, msg),
            RegistryMsg::UpdateDenom(msg) => self.update_denom(ctx, msg),
            RegistryMsg::TransferDenom(msg) => self.transfer_denom(ctx, msg),
            RegistryMsg::MintOnft(msg) => self.mint_onft(ctx, msg),
            RegistryMsg::EditOnft(msg) => self.edit_onft(ctx, msg),
            RegistryMsg::TransferOnft(msg) => self.transfer_onft(ctx, msg),
            RegistryMsg::BurnOnft(msg) => self.burn_onft(ctx, msg),
        }
    }

    /// Run one operation atomically against a store: build a context,
    /// execute, and commit. A failed operation leaves the store
    /// byte-identical and returns the error; a successful one returns
    /// the emitted events.
    pub fn apply(
        &self,
        store: &mut dyn KvStore,
        block_time: DateTime<Utc>,
        msg: RegistryMsg,
    ) -> Result<Vec<Event>, RegistryError> {
        let mut ctx = TxContext::new(store, block_time);
        self.execute(&mut ctx, msg)?;
        Ok(ctx.commit()?)
    }

    fn create_denom(
        &self,
        ctx: &mut TxContext<'_>,
        msg: MsgCreateDenom,
    ) -> Result<(), RegistryError> {
        let denom = Denom::new(msg.id, msg.symbol, msg.name, msg.schema, msg.sender)
            .with_description(msg.description)
            .with_preview_uri(msg.preview_uri)
            .with_uri(msg.uri)
            .with_data(msg.data);
        ctx.batch.save_denom(&denom)?;
        ctx.emit(Event::create_denom(
            &denom.id,
            &denom.symbol,
            &denom.name,
            &denom.creator,
        ));
        info!("created denom {} for {}", denom.id, denom.creator);
        Ok(())
    }

    fn update_denom(
        &self,
        ctx: &mut TxContext<'_>,
        msg: MsgUpdateDenom,
    ) -> Result<(), RegistryError> {
        let mut denom = must_get_denom(ctx, &msg.id)?;
        authorize_denom_creator(&denom, &msg.sender)?;
        if let Some(name) = msg.name {
            denom.name = name;
        }
        if let Some(description) = msg.description {
            denom.description = description;
        }
        if let Some(preview_uri) = msg.preview_uri {
            denom.preview_uri = preview_uri;
        }
        if let Some(uri) = msg.uri {
            denom.uri = uri;
        }
        ctx.batch.update_denom(&denom)?;
        ctx.emit(Event::update_denom(
            &denom.id,
            &denom.symbol,
            &denom.name,
            &denom.creator,
        ));
        info!("updated denom {}", denom.id);
        Ok(())
    }

    fn transfer_denom(
        &self,
        ctx: &mut TxContext<'_>,
        msg: MsgTransferDenom,
    ) -> Result<(), RegistryError> {
        let mut denom = must_get_denom(ctx, &msg.id)?;
        authorize_denom_creator(&denom, &msg.sender)?;
        denom.creator = msg.recipient.clone();
        ctx.batch.update_denom(&denom)?;
        ctx.emit(Event::transfer_denom(
            &denom.id,
            &denom.symbol,
            &msg.sender,
            &msg.recipient,
        ));
        info!(
            "transferred denom {} from {} to {}",
            denom.id, msg.sender, msg.recipient
        );
        Ok(())
    }

    fn mint_onft(&self, ctx: &mut TxContext<'_>, msg: MsgMintOnft) -> Result<(), RegistryError> {
        let denom = must_get_denom(ctx, &msg.denom_id)?;
        // creator-restricted policy: only the denom creator may mint
        authorize_denom_creator(&denom, &msg.sender)?;
        let onft = Onft::new(
            msg.id,
            msg.metadata,
            msg.data,
            msg.recipient.clone(),
            msg.transferable,
            msg.extensible,
            msg.nsfw,
            msg.royalty_share,
            ctx.block_time(),
        );
        ctx.batch.save_onft(&msg.denom_id, &onft)?;
        ctx.batch.index_owner(&msg.recipient, &msg.denom_id, &onft.id);
        ctx.batch.increase_supply(&msg.denom_id)?;
        ctx.emit(Event::mint_onft(
            &msg.denom_id,
            &onft.id,
            &onft.metadata.media_uri,
            &onft.owner,
        ));
        info!("minted oNFT {} in denom {} for {}", onft.id, msg.denom_id, onft.owner);
        Ok(())
    }

    fn edit_onft(&self, ctx: &mut TxContext<'_>, msg: MsgEditOnft) -> Result<(), RegistryError> {
        let denom = must_get_denom(ctx, &msg.denom_id)?;
        let mut onft = must_get_onft(ctx, &msg.denom_id, &msg.id)?;
        authorize_onft_owner(&onft, &msg.sender)?;

        let edits_content = msg.name.is_some()
            || msg.description.is_some()
            || msg.media_uri.is_some()
            || msg.preview_uri.is_some()
            || msg.data.is_some()
            || msg.nsfw.is_some()
            || msg.royalty_share.is_some();
        if edits_content && !onft.extensible {
            return Err(RegistryError::NotExtensible(onft.id));
        }

        if let Some(name) = msg.name {
            onft.metadata.name = name;
        }
        if let Some(description) = msg.description {
            onft.metadata.description = description;
        }
        if let Some(media_uri) = msg.media_uri {
            onft.metadata.media_uri = media_uri;
        }
        if let Some(preview_uri) = msg.preview_uri {
            onft.metadata.preview_uri = preview_uri;
        }
        if let Some(data) = msg.data {
            onft.data = data;
        }
        if let Some(nsfw) = msg.nsfw {
            onft.nsfw = nsfw;
        }
        if let Some(royalty_share) = msg.royalty_share {
            onft.royalty_share = royalty_share;
        }

        // the transfer/edit gates are governance-grade: they can only be
        // changed while the denom creator holds the oNFT
        if let Some(transferable) = msg.transferable {
            if denom.creator != onft.owner {
                return Err(RegistryError::NotEditable {
                    onft_id: onft.id,
                    flag: "transferability".to_string(),
                });
            }
            onft.transferable = transferable;
        }
        if let Some(extensible) = msg.extensible {
            if denom.creator != onft.owner {
                return Err(RegistryError::NotEditable {
                    onft_id: onft.id,
                    flag: "extensibility".to_string(),
                });
            }
            onft.extensible = extensible;
        }

        ctx.batch.update_onft(&msg.denom_id, &onft)?;
        ctx.emit(Event::edit_onft(&msg.denom_id, &onft.id, &onft.owner));
        info!("edited oNFT {} in denom {}", onft.id, msg.denom_id);
        Ok(())
    }

    fn transfer_onft(
        &self,
        ctx: &mut TxContext<'_>,
        msg: MsgTransferOnft,
    ) -> Result<(), RegistryError> {
        must_get_denom(ctx, &msg.denom_id)?;
        let mut onft = must_get_onft(ctx, &msg.denom_id, &msg.id)?;
        authorize_onft_owner(&onft, &msg.sender)?;
        if !onft.is_transferable() {
            return Err(RegistryError::NotTransferable(onft.id));
        }
        onft.owner = msg.recipient.clone();
        ctx.batch.update_onft(&msg.denom_id, &onft)?;
        ctx.batch
            .swap_owner(&msg.denom_id, &msg.id, &msg.sender, &msg.recipient);
        ctx.emit(Event::transfer_onft(
            &msg.denom_id,
            &msg.id,
            &msg.sender,
            &msg.recipient,
        ));
        info!(
            "transferred oNFT {} in denom {} from {} to {}",
            msg.id, msg.denom_id, msg.sender, msg.recipient
        );
        Ok(())
    }

    fn burn_onft(&self, ctx: &mut TxContext<'_>, msg: MsgBurnOnft) -> Result<(), RegistryError> {
        must_get_denom(ctx, &msg.denom_id)?;
        let onft = must_get_onft(ctx, &msg.denom_id, &msg.id)?;
        authorize_onft_owner(&onft, &msg.sender)?;
        ctx.batch.remove_onft(&msg.denom_id, &msg.id);
        ctx.batch.unindex_owner(&onft.owner, &msg.denom_id, &msg.id);
        ctx.batch.decrease_supply(&msg.denom_id)?;
        ctx.emit(Event::burn_onft(&msg.denom_id, &msg.id, &onft.owner));
        info!("burned oNFT {} in denom {}", msg.id, msg.denom_id);
        Ok(())
    }
}
