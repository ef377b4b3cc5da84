use crate::{
    storage::get_data,
    types::{CATALOG_CONTRACT, ESCROW_CONTRACT, NFT_CONTRACT},
};
use common::{
    catalog::interface::CatalogContractClient, escrow::interface::EscrowContractClient,
    nft::interface::TokenContractClient,
};
use soroban_sdk::{Address, Env};

pub fn get_catalog_client(env: &Env) -> CatalogContractClient<'_> {
    let catalog_ca: Address = get_data(env, &CATALOG_CONTRACT).unwrap();
    CatalogContractClient::new(&env, &catalog_ca)
}

pub fn get_nft_client(env: &Env) -> TokenContractClient<'_> {
    let nft_ca: Address = get_data(env, &NFT_CONTRACT).unwrap();
    TokenContractClient::new(&env, &nft_ca)
}

pub fn get_escrow_client(env: &Env) -> EscrowContractClient<'_> {
    let escrow_ca: Address = get_data(env, &ESCROW_CONTRACT).unwrap();
    EscrowContractClient::new(&env, &escrow_ca)
}
