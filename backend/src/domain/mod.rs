//! Domain layer: entities, the ordering mini-language, typed errors, the
//! ports inbound/outbound adapters plug into, and the services behind the
//! driving ports. Transport and store concerns stay out of this module.

pub mod entry;
pub mod error;
pub mod inspiration;
pub mod inspirations_service;
pub mod journal;
pub mod journals_service;
pub mod order_by;
pub mod ports;
pub mod user;

pub use self::entry::{EntryFilter, EntryPatch, EntryUpsert, JournalEntry};
pub use self::error::{Error, ErrorCode};
pub use self::inspiration::Inspiration;
pub use self::inspirations_service::InspirationsService;
pub use self::journal::Journal;
pub use self::journals_service::JournalsService;
pub use self::order_by::{
    ENTRY_ORDER_BY_PATTERN, EntryColumn, EntrySort, OrderClause, Ordering, UnknownEntryColumn,
    entry_order_by_regex, to_order_by,
};
pub use self::user::{User, UserId, UserIdValidationError};
