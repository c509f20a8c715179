//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client, including the case in which
    /// no deployer account is configured
    ClientInitialization(String),
    /// Error locating the compilation artifact for a named contract
    ArtifactNotFound(String),
    /// Error parsing a contract compilation artifact
    ArtifactParsing(String),
    /// Error deploying a contract
    ContractDeployment(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ArtifactNotFound(s) => write!(f, "error locating artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
        }
    }
}

impl Error for ScriptError {}

#[cfg(test)]
mod tests {
    use super::*;

    /// The error display strings are part of the CLI's failure output,
    /// keep them stable
    #[test]
    fn test_error_display() {
        let err = ScriptError::ClientInitialization("no key".to_string());
        assert_eq!(format!("{}", err), "error initializing client: no key");

        let err = ScriptError::ArtifactNotFound("VNYPaymentHandler".to_string());
        assert_eq!(format!("{}", err), "error locating artifact: VNYPaymentHandler");

        let err = ScriptError::ArtifactParsing("bad json".to_string());
        assert_eq!(format!("{}", err), "error parsing artifact: bad json");

        let err = ScriptError::ContractDeployment("reverted".to_string());
        assert_eq!(format!("{}", err), "error deploying contract: reverted");
    }
}
