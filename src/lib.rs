//! Rule-based password sanity checks
//!
//! This library decides whether an input passes a named set of rules:
//! length bounds, allowed character classes, per-class minimum counts, a
//! complexity quorum across those classes, and a denylist of forbidden
//! character runs.
//!
//! # Features
//!
//! - `async` (default): Enables [`check_tx`], which checks under a mutex and
//!   sends the result via channel
//! - `tracing`: Enables logging via tracing crate
//! - `argon2`: Enables `Argon2Hasher` for [`Sanity::check_and_hash`]
//!
//! # Environment Variables
//!
//! - `SANITY_<KEY>` (e.g. `SANITY_MIN_LENGTH`): read by [`RuleUpdate::from_env`]
//! - `SANITY_DENYLIST_PATH`: Custom path to denylist file
//!   (default: `./assets/denylist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_sanity::{RuleUpdate, Sanity};
//! use secrecy::SecretString;
//!
//! let mut sanity = Sanity::new();
//!
//! // Named rules never change the default
//! sanity.configure(
//!     &RuleUpdate::new().min_length(12).disallow(["password"]).debug(true),
//!     Some("admin"),
//! );
//!
//! let input = SecretString::new("MyPassword12".to_string().into());
//! assert!(sanity.check(&input, None));
//! assert!(!sanity.check(&input, Some("admin")));
//!
//! for line in sanity.debug_info().into_iter().flatten() {
//!     println!("{line}");
//! }
//! ```

// Internal modules
mod classify;
mod denylist;
mod diagnostics;
mod evaluator;
mod hash;
mod registry;
mod rules;
mod sections;

// Public API
pub use classify::{classify, CharClass, WHITESPACE_TABLE};
pub use denylist::{get_denylist_path, load_denylist, load_denylist_from_path, DenylistError};
pub use diagnostics::{Diagnostics, DEFAULT_CAPACITY};
pub use evaluator::{CheckResult, Sanity};
pub use hash::{CredentialHasher, HashError};
pub use registry::Registry;
pub use rules::{Group, RequiredGroups, RuleKey, RuleSet, RuleUpdate};
pub use sections::{GroupCounts, Rejection};

#[cfg(feature = "async")]
pub use evaluator::check_tx;

#[cfg(feature = "argon2")]
pub use hash::Argon2Hasher;
