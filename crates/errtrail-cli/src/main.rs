//! Demo: a four-layer call chain in which the deepest layer fails, the
//! layers above annotate what they know, and the top renders the trail.
//!
//! ```text
//! cargo run
//! RUST_LOG=errtrail=trace cargo run   # with capture tracing
//! ```

use errtrail::{DynError, Error, annotate, render};

fn main() {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(err) = refresh_profile() {
        println!("{}", render(err.as_ref()));
    }
}

/// Top layer: re-wrapping is a passthrough, annotations still land here.
fn refresh_profile() -> Result<(), DynError> {
    match load_session() {
        Ok(()) => Ok(()),
        Err(err) => Err(Error::wrap(err)
            .with("attempt", 2)
            .with("user", "m-armstrong")
            .into()),
    }
}

fn load_session() -> Result<(), DynError> {
    match open_store() {
        Ok(()) => Ok(()),
        Err(err) => Err(annotate(err, "records", ["r-17", "r-21", "r-34"])
            .with("store", "users.db")
            .into()),
    }
}

/// Forwards the error untouched; still shows up in the captured trail.
fn open_store() -> Result<(), DynError> {
    read_record()
}

fn read_record() -> Result<(), DynError> {
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "record missing from store");
    tracing::debug!("read failed: {}", err);
    Err(Error::wrap(err).into())
}
