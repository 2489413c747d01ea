//! envseal - generate strong secrets and push them to GitHub Actions.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── validate      # Validate a .env file
//! │   ├── generate      # Write a fresh .env template
//! │   ├── rotate        # Rotate AUTH_SECRET with a backup
//! │   ├── github        # Push/list/delete repository secrets
//! │   ├── secret        # Print a single generated secret
//! │   └── setup         # One-shot GitHub setup (envseal-setup)
//! └── core/             # Core library components
//!     ├── config        # .envseal.toml handling
//!     ├── env           # .env document model
//!     ├── generator     # CSPRNG-backed secret generation
//!     ├── validation    # Environment validator
//!     ├── seal          # Sealed-box encryption
//!     ├── repo          # owner/name resolution from git remotes
//!     └── remote/       # Secrets stores
//!         ├── gh        # GitHub CLI backend
//!         └── api       # GitHub REST API backend
//! ```

pub mod cli;
pub mod core;
pub mod error;
