//! **Initializer Injection**
//!
//! An object is given the dependencies it needs when being constructed.
//! This guarantees the object has everything it needs to do its job
//! right away.
//!
//! **Benefits:**
//! - It is clear which dependencies an object has when constructing it
//! - The dependency is immutable for the object's whole lifetime
//! - Forgetting a dependency is a compile error, not a runtime surprise
//!
//! **Run this demo:**
//! ```bash
//! cargo run --example initializer_injection
//! ```

use di_flavours::{FileLoader, RealFileSystem, Result};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Initializer Injection ===\n");

    // Stage a file so the loader has something real to read.
    let dir = TempDir::new()?;
    let path = dir.path().join("greeting.txt");
    std::fs::write(&path, "Hello from an injected filesystem!")?;

    // The filesystem collaborator goes in through the constructor.
    // There is no FileLoader without one; try removing the argument
    // and the program stops compiling.
    let loader = FileLoader::new(Arc::new(RealFileSystem));

    let content = loader.load(&path).await?;
    println!("Loaded through the injected FileSystem:");
    println!("  {}", content);

    println!("\nNo setter exists for the collaborator; the reference the");
    println!("loader was constructed with is the one it keeps forever.");

    Ok(())
}
