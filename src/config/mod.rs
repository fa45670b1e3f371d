//! Chain parameter configuration
//!
//! The consensus core is parameterized by a handful of host-configured
//! constants: where the PoC fork activates, how long the god-mode
//! bootstrap runs, and the base-target bounds. Parameters load from YAML
//! or JSON files, chosen by extension, or come from the built-in network
//! presets.

use crate::core::constants::{INITIAL_BASE_TARGET, MAX_BASE_TARGET};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Consensus parameters of one deployed chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParams {
    /// Height at which PoC validation activates
    pub fork_height: u32,

    /// Length of the god-mode bootstrap after the fork
    pub init_block_count: u32,

    /// Minimum acceptable block timestamp (seconds since the Unix epoch)
    pub min_block_timestamp: u32,

    /// Base target assigned through the bootstrap regime
    #[serde(default = "default_initial_base_target")]
    pub initial_base_target: u64,

    /// Hard upper bound on any retargeted base target
    #[serde(default = "default_max_base_target")]
    pub max_base_target: u64,
}

fn default_initial_base_target() -> u64 {
    INITIAL_BASE_TARGET
}

fn default_max_base_target() -> u64 {
    MAX_BASE_TARGET
}

impl ChainParams {
    /// Parameters of the main network
    pub fn mainnet() -> Self {
        Self {
            fork_height: 501_949,
            init_block_count: 720,
            min_block_timestamp: 1_514_764_800, // 2018-01-01T00:00:00Z
            initial_base_target: INITIAL_BASE_TARGET,
            max_base_target: MAX_BASE_TARGET,
        }
    }

    /// Parameters for local testing: immediate fork, short bootstrap
    pub fn regtest() -> Self {
        Self {
            fork_height: 1,
            init_block_count: 10,
            min_block_timestamp: 0,
            initial_base_target: INITIAL_BASE_TARGET,
            max_base_target: MAX_BASE_TARGET,
        }
    }

    /// First height governed by PoC deadlines (fork plus bootstrap)
    pub fn poc_genesis_height(&self) -> u32 {
        self.fork_height + self.init_block_count
    }

    /// Check internal consistency of the parameter set
    pub fn validate(&self) -> Result<()> {
        if self.initial_base_target == 0 {
            return Err(Error::config_invalid_value(
                "initial_base_target",
                "0",
                "a positive base target",
            ));
        }
        if self.max_base_target == 0 {
            return Err(Error::config_invalid_value(
                "max_base_target",
                "0",
                "a positive base target",
            ));
        }
        if self.initial_base_target > self.max_base_target {
            return Err(Error::config_invalid_value(
                "initial_base_target",
                self.initial_base_target.to_string(),
                format!("at most max_base_target ({})", self.max_base_target),
            ));
        }
        Ok(())
    }

    /// Load parameters from a YAML or JSON file, chosen by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config_file_not_found(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let params: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
            Some("json") => serde_json::from_str(&contents)?,
            _ => return Err(Error::config_unsupported_format(path.display().to_string())),
        };
        params.validate()?;
        Ok(params)
    }
}

impl Default for ChainParams {
    fn default() -> Self {
        Self::mainnet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_params() {
        let params = ChainParams::mainnet();
        assert_eq!(params.initial_base_target, 18_325_193_796);
        assert_eq!(params.max_base_target, 18_325_193_796);
        assert_eq!(
            params.poc_genesis_height(),
            params.fork_height + params.init_block_count
        );
        params.validate().unwrap();
    }

    #[test]
    fn test_regtest_params() {
        let params = ChainParams::regtest();
        assert_eq!(params.poc_genesis_height(), 11);
        params.validate().unwrap();
    }

    #[test]
    fn test_default_is_mainnet() {
        assert_eq!(ChainParams::default(), ChainParams::mainnet());
    }

    #[test]
    fn test_validate_rejects_zero_targets() {
        let mut params = ChainParams::mainnet();
        params.initial_base_target = 0;
        assert!(params.validate().is_err());

        let mut params = ChainParams::mainnet();
        params.max_base_target = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_initial_above_max() {
        let mut params = ChainParams::mainnet();
        params.initial_base_target = params.max_base_target + 1;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let params = ChainParams::mainnet();
        let json = serde_json::to_string(&params).unwrap();
        let back: ChainParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_yaml_defaults_applied() {
        let yaml = "fork_height: 100\ninit_block_count: 5\nmin_block_timestamp: 0\n";
        let params: ChainParams = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(params.initial_base_target, 18_325_193_796);
        assert_eq!(params.max_base_target, 18_325_193_796);
        assert_eq!(params.poc_genesis_height(), 105);
    }

    #[test]
    fn test_from_file_missing() {
        let err = ChainParams::from_file("/nonexistent/params.yaml").unwrap_err();
        assert_eq!(err.category(), "configuration");
    }
}
