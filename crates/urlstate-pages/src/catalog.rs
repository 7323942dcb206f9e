//! Option sets the playground pages validate against.
//!
//! Chain names are large, open-ended identifier sets and stay plain string
//! slices; small closed selectors are [`Token`](urlstate_core::Token) enums.

use urlstate_core::token_enum;

macro_rules! chain_catalog {
    ($($chain:literal),+ $(,)?) => {
        /// Every Substrate chain (parachains and relay chains).
        pub const SUBSTRATE_CHAINS: &[&str] = &[$($chain),+];

        /// Substrate chains plus Ethereum; valid transfer destinations.
        pub const CHAINS: &[&str] = &[$($chain,)+ "Ethereum"];
    };
}

chain_catalog![
    // Polkadot
    "AssetHubPolkadot",
    "Acala",
    "Ajuna",
    "Astar",
    "BifrostPolkadot",
    "BridgeHubPolkadot",
    "Centrifuge",
    "ComposableFinance",
    "Darwinia",
    "EnergyWebX",
    "Hydration",
    "Interlay",
    "Heima",
    "Jamton",
    "Moonbeam",
    "Mythos",
    "NeuroWeb",
    "Nodle",
    "Peaq",
    "Pendulum",
    "Phala",
    "Polimec",
    "Unique",
    "Crust",
    "Manta",
    "Collectives",
    "CoretimePolkadot",
    "PeoplePolkadot",
    // Kusama
    "AssetHubKusama",
    "BridgeHubKusama",
    "CoretimeKusama",
    "Encointer",
    "Altair",
    "Amplitude",
    "Basilisk",
    "BifrostKusama",
    "CrustShadow",
    "Crab",
    "Karura",
    "Kintsugi",
    "Moonriver",
    "PeopleKusama",
    "Quartz",
    "RobonomicsKusama",
    "Shiden",
    "Zeitgeist",
    // Westend
    "AssetHubWestend",
    "BridgeHubWestend",
    "CollectivesWestend",
    "CoretimeWestend",
    "PeopleWestend",
    "Penpal",
    // Paseo
    "AssetHubPaseo",
    "BridgeHubPaseo",
    "CoretimePaseo",
    "PeoplePaseo",
    "HydrationPaseo",
    "NeuroWebPaseo",
    // Relay chains
    "Polkadot",
    "Kusama",
    "Westend",
    "Paseo",
];

pub const RELAY_CHAINS: &[&str] = &["Polkadot", "Kusama", "Westend", "Paseo"];

/// Origins supported by the EVM transfer page.
pub const EVM_CHAINS_FROM: &[&str] = &["Darwinia", "Moonbeam", "Moonriver", "Ethereum"];

/// Chains where trapped assets can be claimed.
pub const ASSET_CLAIM_CHAINS: &[&str] =
    &["Polkadot", "Kusama", "AssetHubPolkadot", "AssetHubKusama"];

/// Chains hosting a DEX the router can swap through.
pub const EXCHANGE_CHAINS: &[&str] = &[
    "AssetHubPolkadot",
    "AssetHubKusama",
    "Acala",
    "Basilisk",
    "BifrostKusama",
    "BifrostPolkadot",
    "Hydration",
    "Karura",
];

#[must_use]
pub fn is_relay_chain(chain: &str) -> bool {
    RELAY_CHAINS.iter().any(|relay| *relay == chain)
}

token_enum! {
    /// Which SDK flavour the playground calls.
    pub enum ApiType {
        Pjs => "PJS",
        Papi => "PAPI",
    }
}

token_enum! {
    /// Asset query functions.
    pub enum AssetsQuery {
        AssetsObject => "ASSETS_OBJECT",
        AssetId => "ASSET_ID",
        AssetLocation => "ASSET_LOCATION",
        AssetInfo => "ASSET_INFO",
        RelaychainSymbol => "RELAYCHAIN_SYMBOL",
        NativeAssets => "NATIVE_ASSETS",
        OtherAssets => "OTHER_ASSETS",
        NativeAssetSymbol => "NATIVE_ASSET_SYMBOL",
        SupportedAssets => "SUPPORTED_ASSETS",
        FeeAssets => "FEE_ASSETS",
        AllSymbols => "ALL_SYMBOLS",
        ParaId => "PARA_ID",
        SupportedDestinations => "SUPPORTED_DESTINATIONS",
        HasSupport => "HAS_SUPPORT",
        Decimals => "DECIMALS",
        ExistentialDeposit => "EXISTENTIAL_DEPOSIT",
        ConvertSs58 => "CONVERT_SS58",
        EthereumBridgeStatus => "ETHEREUM_BRIDGE_STATUS",
        ParaEthFees => "PARA_ETH_FEES",
        AssetBalance => "ASSET_BALANCE",
    }
}

impl AssetsQuery {
    /// Functions with no chain selector.
    #[must_use]
    pub fn hides_chain(self) -> bool {
        matches!(self, Self::EthereumBridgeStatus | Self::ParaEthFees)
    }

    /// Functions that take a destination chain.
    #[must_use]
    pub fn takes_destination(self) -> bool {
        matches!(self, Self::SupportedAssets | Self::AssetInfo)
    }

    /// Functions with a currency symbol/id/location input.
    #[must_use]
    pub fn takes_currency(self) -> bool {
        matches!(
            self,
            Self::AssetId
                | Self::AssetLocation
                | Self::AssetInfo
                | Self::Decimals
                | Self::HasSupport
                | Self::AssetBalance
                | Self::ExistentialDeposit
                | Self::SupportedDestinations
        )
    }

    /// Functions that take an account address.
    #[must_use]
    pub fn takes_address(self) -> bool {
        matches!(self, Self::AssetBalance | Self::ConvertSs58)
    }

    /// Functions whose currency input can be typed (id / symbol / location).
    #[must_use]
    pub fn supports_currency_type(self) -> bool {
        matches!(
            self,
            Self::AssetLocation
                | Self::AssetInfo
                | Self::AssetBalance
                | Self::ExistentialDeposit
                | Self::SupportedDestinations
        )
    }
}

token_enum! {
    /// Pallet query functions.
    pub enum PalletsQuery {
        AllPallets => "ALL_PALLETS",
        DefaultPallet => "DEFAULT_PALLET",
        PalletIndex => "PALLET_INDEX",
    }
}

token_enum! {
    /// How the asset query currency input is interpreted.
    pub enum CurrencyType {
        Id => "id",
        Symbol => "symbol",
        Location => "location",
    }
}

token_enum! {
    /// How a custom transfer currency is interpreted.
    pub enum CustomCurrencyType {
        Id => "id",
        Symbol => "symbol",
        Location => "location",
        OverridenLocation => "overridenLocation",
    }
}

token_enum! {
    /// Disambiguates a currency symbol shared by native and foreign assets.
    pub enum SymbolSpecifier {
        Auto => "auto",
        Native => "native",
        Foreign => "foreign",
        ForeignAbstract => "foreignAbstract",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlstate_core::Token;

    #[test]
    fn chains_extend_substrate_chains_with_ethereum() {
        assert_eq!(CHAINS.len(), SUBSTRATE_CHAINS.len() + 1);
        assert_eq!(CHAINS.last(), Some(&"Ethereum"));
        assert!(!SUBSTRATE_CHAINS.contains(&"Ethereum"));
    }

    #[test]
    fn catalogs_are_subsets_of_chains() {
        for chain in RELAY_CHAINS
            .iter()
            .chain(ASSET_CLAIM_CHAINS)
            .chain(EXCHANGE_CHAINS)
            .chain(EVM_CHAINS_FROM)
        {
            assert!(CHAINS.contains(chain), "{chain} missing from CHAINS");
        }
    }

    #[test]
    fn chain_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for chain in CHAINS {
            assert!(seen.insert(chain), "duplicate chain {chain}");
        }
    }

    #[test]
    fn relay_chain_detection() {
        assert!(is_relay_chain("Kusama"));
        assert!(!is_relay_chain("AssetHubKusama"));
    }

    #[test]
    fn asset_query_tokens() {
        assert_eq!(AssetsQuery::from_token("PARA_ETH_FEES"), Some(AssetsQuery::ParaEthFees));
        assert!(AssetsQuery::ParaEthFees.hides_chain());
        assert!(AssetsQuery::AssetInfo.takes_destination());
        assert!(AssetsQuery::AssetInfo.supports_currency_type());
        assert!(!AssetsQuery::AssetId.supports_currency_type());
        assert_eq!(AssetsQuery::ALL.len(), 20);
    }

    #[test]
    fn custom_currency_type_keeps_upstream_spelling() {
        assert_eq!(CustomCurrencyType::OverridenLocation.as_str(), "overridenLocation");
    }
}
