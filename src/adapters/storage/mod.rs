//! Storage adapters.
//!
//! Two key-value backends (volatile in-memory and file-backed) plus the
//! repository implementations that sit on top of whichever backend is
//! configured.

mod cart;
mod directory;
mod file;
mod ledger;
mod memory;
mod session;

pub use cart::StoreCartRepository;
pub use directory::StoreUserDirectory;
pub use file::JsonFileStore;
pub use ledger::StoreOrderLedger;
pub use memory::InMemoryKeyValueStore;
pub use session::StoreSessionStore;
