//! Constants used in the deploy scripts

/// The name of the payment handler contract deployed by default
pub const DEFAULT_CONTRACT_NAME: &str = "VNYPaymentHandler";

/// The default directory searched for contract compilation artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The file extension of a contract compilation artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 1;
