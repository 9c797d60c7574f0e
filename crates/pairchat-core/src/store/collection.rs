//! Ordered collection trait.
//!
//! Defines the score-keyed, position-addressable collection each room log
//! lives in. Implementations live in pairchat-infra.

use pairchat_types::chat::RoomKey;
use pairchat_types::error::RepositoryError;

/// A persistent sorted multiset of string members per room key.
///
/// Contract every implementation must honour:
/// - Members are ordered by `score` ascending, then by member bytes
///   ascending. Equal (score, member) pairs are kept as distinct entries.
/// - `insert` is atomic and serializable per key; concurrent inserts are
///   never lost.
/// - A key that was never written reads as an empty collection.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait OrderedCollection: Send + Sync {
    /// Insert `member` under `key` with the given ordering score.
    fn insert(
        &self,
        key: &RoomKey,
        score: i64,
        member: String,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Members at positions `start..=end` of the key's order. With `reverse`
    /// the positions count from the highest score down and the result is
    /// descending. Positions past the end are simply absent.
    fn range(
        &self,
        key: &RoomKey,
        start: u64,
        end: u64,
        reverse: bool,
    ) -> impl std::future::Future<Output = Result<Vec<String>, RepositoryError>> + Send;

    /// Cheap liveness probe.
    fn ping(&self) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
