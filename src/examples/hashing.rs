//! Hash and verify a password through the dispatch layer.
//!
//! Run with: cargo run --example hashing

use multi_password::{Manager, Options, Result, configure, list_algorithms};

fn main() -> Result<()> {
    configure(|config| {
        config.default_algorithm = Some("bcrypt".into());
        config.default_options = Options::new().with("cost", 10);
    });

    println!("registered algorithms: {:?}", list_algorithms());

    let manager = Manager::new(None, None);
    let hash = manager.create("correct horse battery staple")?;
    println!("encoded hash: {hash}");

    println!(
        "verify (right password): {}",
        manager.verify("correct horse battery staple", &hash)?
    );
    println!(
        "verify (wrong password): {}",
        manager.verify("Tr0ub4dor&3", &hash)?
    );

    Ok(())
}
