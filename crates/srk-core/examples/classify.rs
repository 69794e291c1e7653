//! Classify a hand-built profile without performing any network I/O.
//!
//! Run with: `cargo run --example classify`

use std::collections::HashMap;

use srk_core::prelude::*;
use url::Url;

/// Transport that refuses every fetch; good enough to demonstrate the
/// short-circuiting paths.
struct NoFetch;

impl SkinTransport for NoFetch {
    fn fetch(&self, _url: &Url) -> Result<Vec<u8>, TransportError> {
        Err(TransportError::Failed {
            reason: "fetching disabled in this example".into(),
        })
    }
}

fn main() {
    let profile = GameProfile {
        id: uuid::Uuid::new_v4(),
        name: "steve".into(),
        properties: HashMap::new(),
    };

    match SkinRestorer::new(NoFetch, &profile).restore() {
        RestoreOutcome::NoSkin => println!("{}: no usable skin texture", profile.name),
        RestoreOutcome::SignatureValid => println!("{}: texture is trusted", profile.name),
        RestoreOutcome::PendingRestoration(skin) => {
            println!("{}: awaiting repair ({:?} layout)", profile.name, skin.layout)
        }
        RestoreOutcome::BadSkin(cause) => println!("{}: rejected: {cause}", profile.name),
    }
}
