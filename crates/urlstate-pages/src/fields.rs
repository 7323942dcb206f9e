//! Field codecs shared by several pages.

use urlstate_core::{
    BoolCodec, CodeBlobCodec, OptionSetCodec, PercentCodec, StructuredCodec, TextCodec,
    TokenListCodec, ValidatedCodec,
};

use crate::address::{DEFAULT_ADDRESS, is_valid_wallet_address};
use crate::catalog::{ASSET_CLAIM_CHAINS, CHAINS, EVM_CHAINS_FROM, EXCHANGE_CHAINS, SUBSTRATE_CHAINS};
use crate::defaults::{
    DEFAULT_AMOUNT, DEFAULT_ASSET_CLAIM_CHAIN, DEFAULT_CHAIN, DEFAULT_EVM_CHAIN,
    DEFAULT_SUBSTRATE_CHAIN,
};
use crate::records::{CurrencyList, FeeAsset};

pub const FLAG: BoolCodec = BoolCodec;
pub const TEXT: TextCodec = TextCodec::new();
pub const AMOUNT: TextCodec = TextCodec::with_default(DEFAULT_AMOUNT);
pub const PERCENT: PercentCodec = PercentCodec;
pub const CODE: CodeBlobCodec = CodeBlobCodec;

pub const SUBSTRATE_CHAIN: OptionSetCodec =
    OptionSetCodec::new(SUBSTRATE_CHAINS, DEFAULT_SUBSTRATE_CHAIN);
pub const CHAIN: OptionSetCodec = OptionSetCodec::new(CHAINS, DEFAULT_CHAIN);
pub const EVM_CHAIN: OptionSetCodec = OptionSetCodec::new(EVM_CHAINS_FROM, DEFAULT_EVM_CHAIN);
pub const ASSET_CLAIM_CHAIN: OptionSetCodec =
    OptionSetCodec::new(ASSET_CLAIM_CHAINS, DEFAULT_ASSET_CLAIM_CHAIN);

/// Recipient address; anything but a valid SS58 or EVM address decodes to
/// [`DEFAULT_ADDRESS`].
pub const RECIPIENT: ValidatedCodec = ValidatedCodec::new(is_valid_wallet_address, DEFAULT_ADDRESS);

pub const EXCHANGES: TokenListCodec = TokenListCodec::new(EXCHANGE_CHAINS);

pub const CURRENCIES: StructuredCodec<CurrencyList> = StructuredCodec::new();
pub const FEE_ASSET: StructuredCodec<FeeAsset> = StructuredCodec::new();
