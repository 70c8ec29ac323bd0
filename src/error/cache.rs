/// Errors from the Constraint Cache.
///
/// `FingerprintCollision` represents the invariant the spec says must be
/// impossible by construction (two distinct source payloads hashing to
/// the same fingerprint component set). It exists as a typed variant so
/// debug assertions can report it precisely, but a correctly functioning
/// cache never constructs it.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache fingerprint `{fingerprint}` collided with a differing payload")]
    FingerprintCollision { fingerprint: String },
}

impl CacheError {
    pub fn fingerprint_collision(fingerprint: impl Into<String>) -> Self {
        Self::FingerprintCollision {
            fingerprint: fingerprint.into(),
        }
    }
}
