//! Utilities for the deploy scripts

use std::{str::FromStr, sync::Arc};

use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::Address,
};

use crate::errors::ScriptError;

/// Selects the private key of the deployer account from the configured keys.
///
/// The first configured key is used.
pub fn select_deployer_key(priv_keys: &[String]) -> Result<&str, ScriptError> {
    priv_keys.first().map(String::as_str).ok_or_else(|| {
        ScriptError::ClientInitialization("no deployer private key configured".to_string())
    })
}

/// Sets up the client with which to submit the deployment transaction,
/// signing with the given private key against the given RPC endpoint.
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<Arc<impl Middleware>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();
    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.with_chain_id(chain_id),
    ));

    Ok(client)
}

/// Reads the address of the deployer account attached to the client
pub fn deployer_address(client: &impl Middleware) -> Result<Address, ScriptError> {
    client.default_sender().ok_or_else(|| {
        ScriptError::ClientInitialization("client does not have sender attached".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A well-known dev chain private key
    const TEST_PRIV_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    /// The address of the account behind `TEST_PRIV_KEY`
    const TEST_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn test_select_deployer_key() {
        let keys = vec!["0xaa".to_string(), "0xbb".to_string()];
        assert_eq!(select_deployer_key(&keys).unwrap(), "0xaa");
    }

    #[test]
    fn test_select_deployer_key_empty() {
        assert!(matches!(
            select_deployer_key(&[]),
            Err(ScriptError::ClientInitialization(_))
        ));
    }

    #[test]
    fn test_deployer_address() {
        let (provider, _mock) = Provider::mocked();
        let wallet = LocalWallet::from_str(TEST_PRIV_KEY).unwrap();
        let client = SignerMiddleware::new(provider, wallet);

        let address = deployer_address(&client).unwrap();
        assert_eq!(format!("{:#x}", address), TEST_ADDRESS);
    }

    #[test]
    fn test_deployer_address_without_sender() {
        let (provider, _mock) = Provider::mocked();
        assert!(matches!(
            deployer_address(&provider),
            Err(ScriptError::ClientInitialization(_))
        ));
    }
}
