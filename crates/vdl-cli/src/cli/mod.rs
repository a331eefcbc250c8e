//! CLI for the VDL verified downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use vdl_core::config;
use vdl_core::DigestAlgorithm;

use commands::{run_checksum, run_completions, run_get, run_manifest, run_verify, GetArgs};

/// Top-level CLI for the VDL verified downloader.
#[derive(Debug, Parser)]
#[command(name = "vdl")]
#[command(about = "VDL: checksum-verified, retrying file downloads", long_about = None)]
pub struct Cli {
    /// Log attempts and retries to stderr instead of the log file.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a URL and keep it only if its digest matches.
    Get {
        /// Direct HTTP/HTTPS URL to download.
        url: String,
        /// Destination file; parent directories are created.
        dest: PathBuf,
        /// Expected digest as lowercase hex.
        #[arg(long, short = 'c')]
        checksum: String,
        /// Digest algorithm (sha1, sha224, sha256, sha384, sha512). Defaults to the config value.
        #[arg(long, short = 'a')]
        algorithm: Option<DigestAlgorithm>,
        /// Extra attempts after the first one fails. Defaults to the config value.
        #[arg(long, short = 'r', value_name = "N")]
        retries: Option<u32>,
    },

    /// Compute the digest of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
        #[arg(long, short = 'a')]
        algorithm: Option<DigestAlgorithm>,
    },

    /// Check a file against an expected digest; exits non-zero on mismatch.
    Verify {
        /// Path to the file.
        path: PathBuf,
        /// Expected digest as lowercase hex.
        expected: String,
        #[arg(long, short = 'a')]
        algorithm: Option<DigestAlgorithm>,
    },

    /// Download every entry of a TOML manifest, in order.
    Manifest {
        /// Path to the manifest file.
        path: PathBuf,
    },

    /// Print shell completions to stdout.
    Completions {
        shell: Shell,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        if let CliCommand::Completions { shell } = self.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Get {
                url,
                dest,
                checksum,
                algorithm,
                retries,
            } => {
                let args = GetArgs {
                    url,
                    dest,
                    checksum,
                    algorithm,
                    retries,
                };
                run_get(&cfg, args).await?
            }
            CliCommand::Checksum { path, algorithm } => {
                run_checksum(&path, algorithm.unwrap_or(cfg.default_algorithm)).await?
            }
            CliCommand::Verify {
                path,
                expected,
                algorithm,
            } => run_verify(&path, &expected, algorithm.unwrap_or(cfg.default_algorithm)).await?,
            CliCommand::Manifest { path } => run_manifest(&cfg, &path).await?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
